use lazy_static::lazy_static;

use crate::models::survey::{SurveyOption, SurveyQuestion};
use crate::models::Category;

fn options(labels: [&'static str; 5]) -> Vec<SurveyOption> {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| SurveyOption {
            value: (i + 1) as u8,
            label,
        })
        .collect()
}

lazy_static! {
    /// The self-assessment survey, one question per category.
    pub static ref SURVEY_QUESTIONS: Vec<SurveyQuestion> = vec![
        SurveyQuestion {
            id: Category::Social,
            question: "How comfortable are you in social situations?",
            options: options([
                "Very uncomfortable",
                "Somewhat uncomfortable",
                "Neutral",
                "Somewhat comfortable",
                "Very comfortable",
            ]),
        },
        SurveyQuestion {
            id: Category::PublicSpeaking,
            question: "How confident are you with public speaking?",
            options: options([
                "Not confident at all",
                "Slightly confident",
                "Moderately confident",
                "Quite confident",
                "Extremely confident",
            ]),
        },
        SurveyQuestion {
            id: Category::BodyImage,
            question: "How satisfied are you with your body image?",
            options: options([
                "Very dissatisfied",
                "Somewhat dissatisfied",
                "Neutral",
                "Somewhat satisfied",
                "Very satisfied",
            ]),
        },
        SurveyQuestion {
            id: Category::Assertiveness,
            question: "How comfortable are you with being assertive?",
            options: options([
                "Very uncomfortable",
                "Somewhat uncomfortable",
                "Neutral",
                "Somewhat comfortable",
                "Very comfortable",
            ]),
        },
        SurveyQuestion {
            id: Category::SelfWorth,
            question: "How would you rate your sense of self-worth?",
            options: options([
                "Very low",
                "Somewhat low",
                "Average",
                "Somewhat high",
                "Very high",
            ]),
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_question_per_category_in_survey_order() {
        let ids: Vec<Category> = SURVEY_QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, Category::ALL.to_vec());
    }

    #[test]
    fn every_question_offers_scores_one_through_five() {
        for q in SURVEY_QUESTIONS.iter() {
            let values: Vec<u8> = q.options.iter().map(|o| o.value).collect();
            assert_eq!(values, vec![1, 2, 3, 4, 5]);
        }
    }
}
