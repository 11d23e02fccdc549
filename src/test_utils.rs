#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{
        advice_request::*, AdviceRequest, BudgetData,
    };

    /// A well-formed quiz: 8 questions, 4 options each, answers in range.
    pub fn eight_question_quiz_json() -> String {
        let questions: Vec<serde_json::Value> = (0..8)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Question {}?", i + 1),
                    "options": ["Option A", "Option B", "Option C", "Option D"],
                    "correctAnswer": i % 4,
                    "explanation": format!("Option {} is correct", i % 4),
                })
            })
            .collect();

        serde_json::to_string_pretty(&serde_json::json!({ "questions": questions }))
            .expect("quiz fixture serializes")
    }

    /// Completion-shaped texts mixing bold, italic, bullets and stray markers.
    pub fn markdown_samples() -> Vec<&'static str> {
        vec![
            "**Day 1: Introduction**\n\n* Read the *first* chapter\n* Practice   for 20 minutes\n\n\n\n**Day 2**",
            "* Item one\n**Bold** text",
            "Plain text with no markup at all.",
            "** Heading with dangling marker\nLine ending in marker **\n* bullet",
            "Use *water* wisely *\n\t\tIndented   text\n \n \nEnd",
            "Math: 2*3 = 6 and a*b*c\n***Triple*** emphasis",
            "x*y* z* and *unterminated\n*   spaced bullet",
            "आज के काम:\n* **सिंचाई** सुबह 6 बजे\n* *खाद* डालें",
            "\n\n  leading and trailing space  \n\n",
        ]
    }

    /// One validated request for every endpoint.
    pub fn every_advice_request() -> Vec<AdviceRequest> {
        vec![
            AdviceRequest::LearningPlan(LearningPlanRequest {
                topic: "Fractions".into(),
                level: "Beginner".into(),
                language: DEFAULT_LANGUAGE.into(),
            }),
            AdviceRequest::Quiz(QuizRequest {
                topic: "Fractions".into(),
                language: DEFAULT_LANGUAGE.into(),
            }),
            AdviceRequest::FarmingAdvisory(FarmingAdvisoryRequest {
                crop_type: "Rice".into(),
                location: "Cuttack".into(),
                soil_stage: "General".into(),
                language: FARMING_DEFAULT_LANGUAGE.into(),
            }),
            AdviceRequest::LegalAdvice(LegalAdviceRequest {
                issue: "Domestic violence".into(),
                language: "Hindi".into(),
            }),
            AdviceRequest::Schemes(SchemesRequest {
                category: "Farmers".into(),
                state: "Bihar".into(),
                beneficiary: None,
                language: DEFAULT_LANGUAGE.into(),
            }),
            AdviceRequest::Alerts(AlertsRequest {
                location: "Puri".into(),
            }),
            AdviceRequest::BankingLiteracy(BankingLiteracyRequest {
                topic: "Opening a Jan Dhan account".into(),
                language: DEFAULT_LANGUAGE.into(),
            }),
            AdviceRequest::PlanningTools(PlanningToolsRequest {
                tool_type: "Budget Analysis".into(),
                budget: Some(BudgetData::default()),
                language: "Telugu".into(),
            }),
            AdviceRequest::DigitalServices(DigitalServicesRequest {
                service: "UPI".into(),
                language: DEFAULT_LANGUAGE.into(),
            }),
            AdviceRequest::CareerPathfinder(CareerPathfinderRequest {
                interests: "Tailoring".into(),
                skills: "Not specified".into(),
                education: "Class 10".into(),
                experience: "Not specified".into(),
                goals: "Open a shop".into(),
                language: "Kannada".into(),
            }),
            AdviceRequest::DoubtSolver(DoubtSolverRequest {
                question: "What is gravity?".into(),
                subject: None,
                grade: None,
                language: DEFAULT_LANGUAGE.into(),
            }),
        ]
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::Endpoint;

    #[test]
    fn every_advice_request_covers_every_endpoint() {
        let endpoints: Vec<Endpoint> = every_advice_request().iter().map(|r| r.endpoint()).collect();
        assert_eq!(endpoints, Endpoint::ALL.to_vec());
    }

    #[test]
    fn quiz_fixture_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(&eight_question_quiz_json()).unwrap();
        assert_eq!(value["questions"].as_array().unwrap().len(), 8);
    }
}
