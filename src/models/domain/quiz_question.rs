use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const QUIZ_OPTION_COUNT: usize = 4;

/// Loose view of one quiz question. Every field keeps whatever JSON the model produced,
/// so a wrongly typed answer is a quality issue rather than a parse failure.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizQuestion {
    pub question: Value,
    pub options: Value,
    pub correct_answer: Value, // index into options, 0-3 when well formed
    pub explanation: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizQuestion {
    /// `None` when the value is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    pub fn quality_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.question.is_string() {
            issues.push(format!("question text is {}", self.question));
        }

        match self.options.as_array() {
            Some(options) if options.len() == QUIZ_OPTION_COUNT => {}
            Some(options) => issues.push(format!(
                "expected {} options, got {}",
                QUIZ_OPTION_COUNT,
                options.len()
            )),
            None => issues.push(format!("options is {}", self.options)),
        }

        let in_range = self
            .correct_answer
            .as_u64()
            .is_some_and(|index| index < QUIZ_OPTION_COUNT as u64);
        if !in_range {
            issues.push(format!(
                "correctAnswer {} is not an index in 0..={}",
                self.correct_answer,
                QUIZ_OPTION_COUNT - 1
            ));
        }

        issues
    }
}
