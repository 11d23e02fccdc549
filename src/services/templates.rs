//! Prompt compilation: one system message and one user message per request.
//!
//! Caller-supplied fields are interpolated verbatim. Nothing here escapes or
//! filters instruction-like text coming from the client.

use crate::{
    constants::{prompts::*, quiz_prompt::*},
    models::domain::{
        advice_request::{
            AlertsRequest, BankingLiteracyRequest, CareerPathfinderRequest, DigitalServicesRequest,
            DoubtSolverRequest, FarmingAdvisoryRequest, LearningPlanRequest, LegalAdviceRequest,
            PlanningToolsRequest, QuizRequest, SchemesRequest, DEFAULT_LANGUAGE,
        },
        quiz::QUIZ_QUESTION_COUNT,
        AdviceRequest, PromptMessage,
    },
};

/// English requests get the plain template; anything else gets the variant that
/// names the response language. Both variants carry the same requirement list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LanguageBranch<'a> {
    Default,
    Localized(&'a str),
}

impl<'a> LanguageBranch<'a> {
    pub fn of(language: &'a str) -> Self {
        if language == DEFAULT_LANGUAGE {
            LanguageBranch::Default
        } else {
            LanguageBranch::Localized(language)
        }
    }
}

pub fn compile(request: &AdviceRequest) -> [PromptMessage; 2] {
    let (system, user) = match request {
        AdviceRequest::LearningPlan(r) => (LEARNING_PLAN_SYSTEM_PROMPT, learning_plan_prompt(r)),
        AdviceRequest::Quiz(r) => (QUIZ_SYSTEM_PROMPT, quiz_prompt(r)),
        AdviceRequest::FarmingAdvisory(r) => (FARMING_SYSTEM_PROMPT, farming_prompt(r)),
        AdviceRequest::LegalAdvice(r) => (LEGAL_SYSTEM_PROMPT, legal_prompt(r)),
        AdviceRequest::Schemes(r) => (SCHEMES_SYSTEM_PROMPT, schemes_prompt(r)),
        AdviceRequest::Alerts(r) => (ALERTS_SYSTEM_PROMPT, alerts_prompt(r)),
        AdviceRequest::BankingLiteracy(r) => (BANKING_SYSTEM_PROMPT, banking_prompt(r)),
        AdviceRequest::PlanningTools(r) => (PLANNING_SYSTEM_PROMPT, planning_prompt(r)),
        AdviceRequest::DigitalServices(r) => {
            (DIGITAL_SERVICES_SYSTEM_PROMPT, digital_services_prompt(r))
        }
        AdviceRequest::CareerPathfinder(r) => (CAREER_SYSTEM_PROMPT, career_prompt(r)),
        AdviceRequest::DoubtSolver(r) => (DOUBT_SOLVER_SYSTEM_PROMPT, doubt_solver_prompt(r)),
    };

    [PromptMessage::system(system), PromptMessage::user(user)]
}

fn learning_plan_prompt(r: &LearningPlanRequest) -> String {
    let opening = format!(
        "Create a comprehensive 7-day learning plan for the topic: \"{}\" at \"{}\" level.",
        r.topic, r.level
    );

    match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => format!(
            "{}\n\n{}\n\n{}",
            opening, LEARNING_PLAN_REQUIREMENTS, LEARNING_PLAN_CLOSING
        ),
        LanguageBranch::Localized(language) => format!(
            "{}\nRespond ENTIRELY in {}.\n\n{}\n\n{}",
            opening, language, LEARNING_PLAN_REQUIREMENTS, LEARNING_PLAN_CLOSING
        ),
    }
}

fn quiz_prompt(r: &QuizRequest) -> String {
    format!(
        "Create exactly {} multiple choice questions about \"{}\" in {} language. Format as JSON:\n{}\n{}",
        QUIZ_QUESTION_COUNT, r.topic, r.language, QUIZ_JSON_SHAPE, QUIZ_CLOSING
    )
}

fn farming_prompt(r: &FarmingAdvisoryRequest) -> String {
    format!(
        "Generate today's farming advisory in {} language for:\n\nCrop: {}\nLocation: {}\nSoil Stage: {}\n\n{}\n\n{}",
        r.language, r.crop_type, r.location, r.soil_stage, FARMING_REQUIREMENTS, FARMING_CLOSING
    )
}

fn legal_prompt(r: &LegalAdviceRequest) -> String {
    let opening = match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => format!("Explain about \"{}\" in simple English. Include:", r.issue),
        LanguageBranch::Localized(language) => {
            format!("Explain in {} language: \"{}\". Include:", language, r.issue)
        }
    };

    format!("{}\n{}\n\n{}", opening, LEGAL_REQUIREMENTS, LEGAL_CLOSING)
}

fn schemes_prompt(r: &SchemesRequest) -> String {
    let mut criteria = format!("Category: {}\nState: {}", r.category, r.state);
    if let Some(beneficiary) = &r.beneficiary {
        criteria.push_str(&format!("\nBeneficiary Type: {}", beneficiary));
    }

    format!(
        "List government schemes for:\n{}\n\n{}\n\n{} Respond in {} language.",
        criteria, SCHEMES_REQUIREMENTS, SCHEMES_CLOSING, r.language
    )
}

fn alerts_prompt(r: &AlertsRequest) -> String {
    format!(
        "Provide disaster and weather alerts for: {}\n\n{}\n\n{}\n\n{}",
        r.location, ALERTS_FORMAT, ALERTS_REQUIREMENTS, ALERTS_CLOSING
    )
}

fn banking_prompt(r: &BankingLiteracyRequest) -> String {
    let opening = match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => format!("Explain about \"{}\" in simple English. Include:", r.topic),
        LanguageBranch::Localized(language) => {
            format!("Explain in {} language about \"{}\". Include:", language, r.topic)
        }
    };

    format!("{}\n{}\n\n{}", opening, BANKING_REQUIREMENTS, BANKING_CLOSING)
}

fn planning_prompt(r: &PlanningToolsRequest) -> String {
    let budget = match &r.budget {
        Some(budget) if r.tool_type == BUDGET_ANALYSIS_TOOL => budget,
        _ => {
            return format!(
                "Provide financial planning guidance for {} in {} language.",
                r.tool_type, r.language
            )
        }
    };

    let opening = match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => "Analyze this budget:".to_string(),
        LanguageBranch::Localized(language) => {
            format!("Analyze this budget in {} language:", language)
        }
    };

    format!(
        "{}\n\nMonthly Income: ₹{}\nAllocations: {}\nTotal Allocated: ₹{}\nRemaining: ₹{}\n\n{}\n\n{}",
        opening,
        budget.income,
        budget.allocation_summary(),
        budget.total_allocated,
        budget.remaining,
        BUDGET_REQUIREMENTS,
        BUDGET_CLOSING
    )
}

fn digital_services_prompt(r: &DigitalServicesRequest) -> String {
    let opening = match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => {
            format!("Explain how to use \"{}\" in simple English. Include:", r.service)
        }
        LanguageBranch::Localized(language) => {
            format!("Explain in {} language how to use \"{}\". Include:", language, r.service)
        }
    };

    format!(
        "{}\n{}\n\n{}",
        opening, DIGITAL_SERVICES_REQUIREMENTS, DIGITAL_SERVICES_CLOSING
    )
}

fn career_prompt(r: &CareerPathfinderRequest) -> String {
    let opening = match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => "Provide career guidance based on:".to_string(),
        LanguageBranch::Localized(language) => {
            format!("Provide career guidance in {} language based on:", language)
        }
    };

    format!(
        "{}\n\nInterests: {}\nSkills: {}\nEducation: {}\nExperience: {}\nGoals: {}\n\n{}\n\n{}",
        opening,
        r.interests,
        r.skills,
        r.education,
        r.experience,
        r.goals,
        CAREER_REQUIREMENTS,
        CAREER_CLOSING
    )
}

fn doubt_solver_prompt(r: &DoubtSolverRequest) -> String {
    let mut context = String::new();
    if let Some(subject) = &r.subject {
        context.push_str(&format!(" (Subject: {})", subject));
    }
    if let Some(grade) = &r.grade {
        context.push_str(&format!(" (Grade: {})", grade));
    }

    let opening = match LanguageBranch::of(&r.language) {
        LanguageBranch::Default => format!("Answer this question: \"{}\"{}.", r.question, context),
        LanguageBranch::Localized(language) => format!(
            "Answer this question in {} language: \"{}\"{}.",
            language, r.question, context
        ),
    };

    format!(
        "{}\n\n{}\n\n{}",
        opening, DOUBT_SOLVER_REQUIREMENTS, DOUBT_SOLVER_CLOSING
    )
}
