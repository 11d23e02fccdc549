use std::fmt;

/// Every route that compiles a prompt and calls the completion provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LearningPlan,
    Quiz,
    FarmingAdvisory,
    LegalAdvice,
    Schemes,
    Alerts,
    BankingLiteracy,
    PlanningTools,
    DigitalServices,
    CareerPathfinder,
    DoubtSolver,
}

impl Endpoint {
    pub const ALL: [Endpoint; 11] = [
        Endpoint::LearningPlan,
        Endpoint::Quiz,
        Endpoint::FarmingAdvisory,
        Endpoint::LegalAdvice,
        Endpoint::Schemes,
        Endpoint::Alerts,
        Endpoint::BankingLiteracy,
        Endpoint::PlanningTools,
        Endpoint::DigitalServices,
        Endpoint::CareerPathfinder,
        Endpoint::DoubtSolver,
    ];

    /// Name of the field carrying the result in the success envelope.
    pub fn result_field(&self) -> &'static str {
        match self {
            Endpoint::LearningPlan => "learningPath",
            Endpoint::Quiz => "quiz",
            Endpoint::FarmingAdvisory => "advisory",
            Endpoint::LegalAdvice => "advice",
            Endpoint::Schemes => "schemes",
            Endpoint::Alerts => "alerts",
            Endpoint::BankingLiteracy => "guidance",
            Endpoint::PlanningTools => "calculation",
            Endpoint::DigitalServices => "guide",
            Endpoint::CareerPathfinder => "pathfinder",
            Endpoint::DoubtSolver => "answer",
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            Endpoint::LearningPlan
            | Endpoint::Quiz
            | Endpoint::Schemes
            | Endpoint::CareerPathfinder => 2000,
            Endpoint::FarmingAdvisory
            | Endpoint::LegalAdvice
            | Endpoint::Alerts
            | Endpoint::BankingLiteracy
            | Endpoint::PlanningTools
            | Endpoint::DigitalServices
            | Endpoint::DoubtSolver => 1500,
        }
    }

    /// The quiz is the only endpoint whose output is parsed instead of sanitized.
    pub fn expects_structured_output(&self) -> bool {
        matches!(self, Endpoint::Quiz)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Endpoint::LearningPlan => "learning_plan",
            Endpoint::Quiz => "quiz",
            Endpoint::FarmingAdvisory => "farming_advisory",
            Endpoint::LegalAdvice => "legal_advice",
            Endpoint::Schemes => "schemes",
            Endpoint::Alerts => "alerts",
            Endpoint::BankingLiteracy => "banking_literacy",
            Endpoint::PlanningTools => "planning_tools",
            Endpoint::DigitalServices => "digital_services",
            Endpoint::CareerPathfinder => "career_pathfinder",
            Endpoint::DoubtSolver => "doubt_solver",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn result_fields_are_unique() {
        let fields: HashSet<_> = Endpoint::ALL.iter().map(|e| e.result_field()).collect();

        assert_eq!(fields.len(), Endpoint::ALL.len());
        assert!(!fields.contains("message"));
    }

    #[test]
    fn token_ceilings_match_endpoint_weight() {
        assert_eq!(Endpoint::LearningPlan.max_tokens(), 2000);
        assert_eq!(Endpoint::Quiz.max_tokens(), 2000);
        assert_eq!(Endpoint::FarmingAdvisory.max_tokens(), 1500);
        assert_eq!(Endpoint::DoubtSolver.max_tokens(), 1500);
    }

    #[test]
    fn only_quiz_is_structured() {
        let structured: Vec<_> = Endpoint::ALL
            .iter()
            .filter(|e| e.expects_structured_output())
            .collect();
        assert_eq!(structured, vec![&Endpoint::Quiz]);
    }
}
