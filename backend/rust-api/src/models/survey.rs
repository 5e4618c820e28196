use serde::{Deserialize, Serialize};

use super::{Category, SurveyResponse};

/// One question of the static self-assessment survey.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyQuestion {
    pub id: Category,
    pub question: &'static str,
    pub options: Vec<SurveyOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyOption {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct SubmitSurveyRequest {
    /// Score per category, 1..=5. All five categories are required;
    /// the engine rejects anything else.
    pub answers: SurveyResponse,
}

#[derive(Debug, Serialize)]
pub struct SubmitSurveyResponse {
    pub focus_areas: Vec<Category>,
    /// Display labels for the dashboard focus-area cards.
    pub focus_area_names: Vec<&'static str>,
    pub has_completed_survey: bool,
}
