pub mod advice_request;
pub mod budget;
pub mod endpoint;
pub mod prompt;
pub mod quiz;
pub mod quiz_question;
pub mod scalar;
pub use advice_request::AdviceRequest;
pub use budget::BudgetData;
pub use endpoint::Endpoint;
pub use prompt::{PromptMessage, Role};
pub use quiz::Quiz;
pub use quiz_question::QuizQuestion;
pub use scalar::Scalar;
