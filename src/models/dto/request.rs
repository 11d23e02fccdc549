use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        advice_request::{
            AlertsRequest, BankingLiteracyRequest, CareerPathfinderRequest, DigitalServicesRequest,
            DoubtSolverRequest, FarmingAdvisoryRequest, LearningPlanRequest, LegalAdviceRequest,
            PlanningToolsRequest, QuizRequest, SchemesRequest, DEFAULT_LANGUAGE,
            FARMING_DEFAULT_LANGUAGE,
        },
        AdviceRequest, BudgetData, Scalar,
    },
};

const NOT_SPECIFIED: &str = "Not specified";

/// Wire DTOs keep every field optional; presence is checked by `validate`.
pub trait IntoAdviceRequest: Validate + Sized {
    /// Message returned with the 400 when a required field is absent or empty.
    const REQUIRED_MESSAGE: &'static str;

    /// Only called after `validate` succeeded.
    fn into_validated(self) -> AdviceRequest;

    fn into_advice_request(self) -> AppResult<AdviceRequest> {
        if let Err(err) = self.validate() {
            log::debug!("rejecting request: {}", err);
            return Err(AppError::BadRequest(Self::REQUIRED_MESSAGE.to_string()));
        }
        Ok(self.into_validated())
    }
}

fn language_or(language: Option<String>, default: &str) -> String {
    match language {
        Some(language) if !language.trim().is_empty() => language,
        _ => default.to_string(),
    }
}

/// Free-form fields accept any JSON scalar; numbers and booleans are used as text.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_text))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LearningPlanRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub topic: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for LearningPlanRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Topic and level are required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::LearningPlan(LearningPlanRequest {
            topic: self.topic.unwrap_or_default(),
            level: self.level.unwrap_or_default(),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for QuizRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Topic is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::Quiz(QuizRequest {
            topic: self.topic.unwrap_or_default(),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FarmingAdvisoryRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub crop_type: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub soil_stage: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for FarmingAdvisoryRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Crop type and location are required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::FarmingAdvisory(FarmingAdvisoryRequest {
            crop_type: self.crop_type.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            soil_stage: non_empty(self.soil_stage).unwrap_or_else(|| "General".to_string()),
            language: language_or(self.language, FARMING_DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LegalAdviceRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub issue: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for LegalAdviceRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Legal issue is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::LegalAdvice(LegalAdviceRequest {
            issue: self.issue.unwrap_or_default(),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SchemesRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub category: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub beneficiary: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for SchemesRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Category and state are required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::Schemes(SchemesRequest {
            category: self.category.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            beneficiary: non_empty(self.beneficiary),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AlertsRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub location: Option<String>,
}

impl IntoAdviceRequest for AlertsRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Location is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::Alerts(AlertsRequest {
            location: self.location.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BankingLiteracyRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for BankingLiteracyRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Topic is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::BankingLiteracy(BankingLiteracyRequest {
            topic: self.topic.unwrap_or_default(),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlanningToolsRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub tool_type: Option<String>,
    pub budget_data: Option<BudgetData>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for PlanningToolsRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Tool type is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::PlanningTools(PlanningToolsRequest {
            tool_type: self.tool_type.unwrap_or_default(),
            budget: self.budget_data,
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DigitalServicesRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub service: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for DigitalServicesRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Service type is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::DigitalServices(DigitalServicesRequest {
            service: self.service.unwrap_or_default(),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CareerPathfinderRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub interests: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub skills: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub education: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub goals: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for CareerPathfinderRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Interests are required.";

    fn into_validated(self) -> AdviceRequest {
        let or_unspecified =
            |value: Option<String>| non_empty(value).unwrap_or_else(|| NOT_SPECIFIED.to_string());

        AdviceRequest::CareerPathfinder(CareerPathfinderRequest {
            interests: self.interests.unwrap_or_default(),
            skills: or_unspecified(self.skills),
            education: or_unspecified(self.education),
            experience: or_unspecified(self.experience),
            goals: or_unspecified(self.goals),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DoubtSolverRequestDto {
    #[validate(required, length(min = 1))]
    #[serde(default, deserialize_with = "scalar_text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub language: Option<String>,
}

impl IntoAdviceRequest for DoubtSolverRequestDto {
    const REQUIRED_MESSAGE: &'static str = "Question is required.";

    fn into_validated(self) -> AdviceRequest {
        AdviceRequest::DoubtSolver(DoubtSolverRequest {
            question: self.question.unwrap_or_default(),
            subject: non_empty(self.subject),
            grade: non_empty(self.grade),
            language: language_or(self.language, DEFAULT_LANGUAGE),
        })
    }
}

/// The SOS route has no required fields; the location is whatever the client sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SosLogRequestDto {
    pub location: Option<serde_json::Value>,
}
