use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Category;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
    pub explanation: String,
}

/// A scenario-based multiple-choice question. Exactly one of the four
/// options is marked correct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: String,
    pub category: Category,
    pub scenario: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FinishQuizRequest {
    pub correct: u32,
    #[validate(range(min = 1, message = "total must be at least 1"))]
    pub total: u32,
    /// Client-local calendar date (YYYY-MM-DD). Defaults to the server's
    /// local date when omitted.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FinishQuizResponse {
    pub confidence_streak: u32,
    /// Rounded percentage, persisted as lastQuizScore.
    pub score_percent: u32,
}
