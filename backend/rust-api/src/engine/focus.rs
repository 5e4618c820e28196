use crate::engine::EngineError;
use crate::models::{Category, SurveyResponse};

/// How many focus areas a survey produces.
const FOCUS_AREA_COUNT: usize = 2;

/// Derives the user's focus areas: the two categories with the lowest
/// survey scores, ascending by score, ties broken by survey order.
///
/// Rejects surveys missing a category or carrying a score outside 1..=5.
pub fn derive_focus_areas(answers: &SurveyResponse) -> Result<Vec<Category>, EngineError> {
    let mut scored: Vec<(Category, u8)> = Vec::with_capacity(Category::ALL.len());

    for category in Category::ALL {
        let score = *answers.get(&category).ok_or_else(|| {
            EngineError::InvalidInput(format!("missing answer for category {}", category.as_str()))
        })?;
        if !(1..=5).contains(&score) {
            return Err(EngineError::InvalidInput(format!(
                "score {} for category {} is out of range 1..=5",
                score,
                category.as_str()
            )));
        }
        scored.push((category, score));
    }

    if answers.len() != Category::ALL.len() {
        return Err(EngineError::InvalidInput(format!(
            "expected {} categories, got {}",
            Category::ALL.len(),
            answers.len()
        )));
    }

    // Stable sort keeps the survey order among equal scores.
    scored.sort_by_key(|(_, score)| *score);

    Ok(scored
        .into_iter()
        .take(FOCUS_AREA_COUNT)
        .map(|(category, _)| category)
        .collect())
}
