use serde::Serialize;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Endpoint, Quiz},
};

/// Normalized completion output, tagged by the envelope field it is returned under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AdvicePayload {
    #[serde(rename = "learningPath")]
    LearningPath(String),
    #[serde(rename = "quiz")]
    Quiz(Quiz),
    #[serde(rename = "advisory")]
    Advisory(String),
    #[serde(rename = "advice")]
    Advice(String),
    #[serde(rename = "schemes")]
    Schemes(String),
    #[serde(rename = "alerts")]
    Alerts(String),
    #[serde(rename = "guidance")]
    Guidance(String),
    #[serde(rename = "calculation")]
    Calculation(String),
    #[serde(rename = "guide")]
    Guide(String),
    #[serde(rename = "pathfinder")]
    Pathfinder(String),
    #[serde(rename = "answer")]
    Answer(String),
    #[serde(rename = "message")]
    Message(String),
}

impl AdvicePayload {
    /// Wraps sanitized text in the variant belonging to `endpoint`.
    pub fn text(endpoint: Endpoint, text: String) -> AppResult<Self> {
        let payload = match endpoint {
            Endpoint::LearningPlan => AdvicePayload::LearningPath(text),
            Endpoint::FarmingAdvisory => AdvicePayload::Advisory(text),
            Endpoint::LegalAdvice => AdvicePayload::Advice(text),
            Endpoint::Schemes => AdvicePayload::Schemes(text),
            Endpoint::Alerts => AdvicePayload::Alerts(text),
            Endpoint::BankingLiteracy => AdvicePayload::Guidance(text),
            Endpoint::PlanningTools => AdvicePayload::Calculation(text),
            Endpoint::DigitalServices => AdvicePayload::Guide(text),
            Endpoint::CareerPathfinder => AdvicePayload::Pathfinder(text),
            Endpoint::DoubtSolver => AdvicePayload::Answer(text),
            Endpoint::Quiz => {
                return Err(AppError::InternalError(
                    "quiz output must be parsed, not returned as text".to_string(),
                ))
            }
        };
        Ok(payload)
    }
}

/// `{"success": true, "<resultField>": value}`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub success: bool,
    #[serde(flatten)]
    pub payload: AdvicePayload,
}

impl SuccessEnvelope {
    pub fn new(payload: AdvicePayload) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}
