pub const QUIZ_SYSTEM_PROMPT: &str = "You are a quiz generator. Create exactly 8 multiple choice questions with 4 options each. Return ONLY valid JSON format.";

/// Shape the model is asked to reproduce; mirrors `models::domain::Quiz`.
pub const QUIZ_JSON_SHAPE: &str = r#"{
  "questions": [
    {
      "question": "Question text?",
      "options": ["Option A", "Option B", "Option C", "Option D"],
      "correctAnswer": 0,
      "explanation": "Brief explanation why this answer is correct"
    }
  ]
}"#;

pub const QUIZ_CLOSING: &str = "CorrectAnswer should be the index (0-3) of the correct option. Include explanation for each question.";
