use crate::models::domain::{budget::BudgetData, endpoint::Endpoint};

pub const DEFAULT_LANGUAGE: &str = "English";
pub const FARMING_DEFAULT_LANGUAGE: &str = "Hindi";

#[derive(Clone, Debug, PartialEq)]
pub struct LearningPlanRequest {
    pub topic: String,
    pub level: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizRequest {
    pub topic: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FarmingAdvisoryRequest {
    pub crop_type: String,
    pub location: String,
    pub soil_stage: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegalAdviceRequest {
    pub issue: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SchemesRequest {
    pub category: String,
    pub state: String,
    pub beneficiary: Option<String>,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AlertsRequest {
    pub location: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BankingLiteracyRequest {
    pub topic: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanningToolsRequest {
    pub tool_type: String,
    pub budget: Option<BudgetData>,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DigitalServicesRequest {
    pub service: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CareerPathfinderRequest {
    pub interests: String,
    pub skills: String,
    pub education: String,
    pub experience: String,
    pub goals: String,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoubtSolverRequest {
    pub question: String,
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub language: String,
}

/// A validated request, one variant per endpoint. Lives for a single call.
#[derive(Clone, Debug, PartialEq)]
pub enum AdviceRequest {
    LearningPlan(LearningPlanRequest),
    Quiz(QuizRequest),
    FarmingAdvisory(FarmingAdvisoryRequest),
    LegalAdvice(LegalAdviceRequest),
    Schemes(SchemesRequest),
    Alerts(AlertsRequest),
    BankingLiteracy(BankingLiteracyRequest),
    PlanningTools(PlanningToolsRequest),
    DigitalServices(DigitalServicesRequest),
    CareerPathfinder(CareerPathfinderRequest),
    DoubtSolver(DoubtSolverRequest),
}

impl AdviceRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            AdviceRequest::LearningPlan(_) => Endpoint::LearningPlan,
            AdviceRequest::Quiz(_) => Endpoint::Quiz,
            AdviceRequest::FarmingAdvisory(_) => Endpoint::FarmingAdvisory,
            AdviceRequest::LegalAdvice(_) => Endpoint::LegalAdvice,
            AdviceRequest::Schemes(_) => Endpoint::Schemes,
            AdviceRequest::Alerts(_) => Endpoint::Alerts,
            AdviceRequest::BankingLiteracy(_) => Endpoint::BankingLiteracy,
            AdviceRequest::PlanningTools(_) => Endpoint::PlanningTools,
            AdviceRequest::DigitalServices(_) => Endpoint::DigitalServices,
            AdviceRequest::CareerPathfinder(_) => Endpoint::CareerPathfinder,
            AdviceRequest::DoubtSolver(_) => Endpoint::DoubtSolver,
        }
    }

    pub fn language(&self) -> Option<&str> {
        match self {
            AdviceRequest::LearningPlan(r) => Some(&r.language),
            AdviceRequest::Quiz(r) => Some(&r.language),
            AdviceRequest::FarmingAdvisory(r) => Some(&r.language),
            AdviceRequest::LegalAdvice(r) => Some(&r.language),
            AdviceRequest::Schemes(r) => Some(&r.language),
            AdviceRequest::Alerts(_) => None,
            AdviceRequest::BankingLiteracy(r) => Some(&r.language),
            AdviceRequest::PlanningTools(r) => Some(&r.language),
            AdviceRequest::DigitalServices(r) => Some(&r.language),
            AdviceRequest::CareerPathfinder(r) => Some(&r.language),
            AdviceRequest::DoubtSolver(r) => Some(&r.language),
        }
    }
}
