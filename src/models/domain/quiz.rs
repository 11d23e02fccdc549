use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::domain::quiz_question::QuizQuestion;

pub const QUIZ_QUESTION_COUNT: usize = 8;

/// Quiz payload exactly as the model returned it. Parsed, never repaired or reshaped.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Quiz(Value);

impl Quiz {
    /// The `questions` array, or an empty slice when the model left it out.
    pub fn questions(&self) -> &[Value] {
        self.0
            .get("questions")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }

    /// Data-quality defects that the pipeline lets through. Used for logging only.
    pub fn quality_issues(&self) -> Vec<String> {
        let questions = match self.0.get("questions") {
            Some(Value::Array(questions)) => questions,
            Some(_) => return vec!["questions is not an array".to_string()],
            None => return vec!["questions is missing".to_string()],
        };

        let mut issues = Vec::new();
        if questions.len() != QUIZ_QUESTION_COUNT {
            issues.push(format!(
                "expected {} questions, got {}",
                QUIZ_QUESTION_COUNT,
                questions.len()
            ));
        }

        for (index, value) in questions.iter().enumerate() {
            let question_issues = match QuizQuestion::from_value(value) {
                Some(question) => question.quality_issues(),
                None => vec!["not an object".to_string()],
            };
            issues.extend(
                question_issues
                    .into_iter()
                    .map(|issue| format!("question {}: {}", index + 1, issue)),
            );
        }

        issues
    }
}
