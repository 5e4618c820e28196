use lazy_static::lazy_static;

use crate::models::quiz::{QuizOption, QuizQuestion};
use crate::models::Category;

/// A selection never returns fewer than this many questions.
const MIN_QUESTIONS: usize = 3;
/// Hard cap on a single quiz round.
const MAX_QUESTIONS: usize = 5;

/// Picks quiz questions for the given focus areas.
///
/// Catalog questions whose category appears in the focus areas are kept,
/// in catalog order. If fewer than three match (including the empty focus
/// case), the filter is discarded and the first three catalog entries are
/// used instead. The result is capped at five questions.
pub fn select_questions(focus_areas: &[Category]) -> Vec<QuizQuestion> {
    let filtered: Vec<QuizQuestion> = QUESTION_CATALOG
        .iter()
        .filter(|q| focus_areas.contains(&q.category))
        .cloned()
        .collect();

    let mut selected = if filtered.len() < MIN_QUESTIONS {
        QUESTION_CATALOG
            .iter()
            .take(MIN_QUESTIONS)
            .cloned()
            .collect()
    } else {
        filtered
    };

    selected.truncate(MAX_QUESTIONS);
    selected
}

fn option(id: &str, text: &str, is_correct: bool, explanation: &str) -> QuizOption {
    QuizOption {
        id: id.to_string(),
        text: text.to_string(),
        is_correct,
        explanation: explanation.to_string(),
    }
}

fn question(
    id: &str,
    category: Category,
    scenario: &str,
    prompt: &str,
    options: Vec<QuizOption>,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        category,
        scenario: scenario.to_string(),
        question: prompt.to_string(),
        options,
    }
}

lazy_static! {
    /// Fixed question catalog. Order matters: it is both the output order
    /// and the fallback order when too few questions match.
    pub static ref QUESTION_CATALOG: Vec<QuizQuestion> = vec![
        question(
            "social1",
            Category::Social,
            "You're at a networking event and don't know anyone.",
            "What's the best approach to start a conversation?",
            vec![
                option(
                    "a",
                    "Wait for someone to approach you first",
                    false,
                    "Waiting passively might result in missed opportunities.",
                ),
                option(
                    "b",
                    "Introduce yourself to someone standing alone",
                    true,
                    "This is a confident and considerate approach that often leads to meaningful connections.",
                ),
                option(
                    "c",
                    "Stay on your phone to look busy",
                    false,
                    "This creates a barrier and signals unavailability.",
                ),
                option(
                    "d",
                    "Leave immediately",
                    false,
                    "This avoids the opportunity entirely and doesn't build confidence.",
                ),
            ],
        ),
        question(
            "public1",
            Category::PublicSpeaking,
            "You're asked to give an impromptu presentation at work.",
            "How do you handle the nervousness?",
            vec![
                option(
                    "a",
                    "Decline and suggest someone else",
                    false,
                    "Avoiding the opportunity doesn't help build confidence.",
                ),
                option(
                    "b",
                    "Accept and take a moment to organize your thoughts",
                    true,
                    "Taking a brief pause to collect yourself shows composure and preparation.",
                ),
                option(
                    "c",
                    "Rush through it as quickly as possible",
                    false,
                    "Rushing often leads to mistakes and doesn't demonstrate confidence.",
                ),
                option(
                    "d",
                    "Make excuses about being unprepared",
                    false,
                    "Making excuses undermines your credibility and confidence.",
                ),
            ],
        ),
        question(
            "assertive1",
            Category::Assertiveness,
            "A colleague takes credit for your idea in a meeting.",
            "What's the most assertive response?",
            vec![
                option(
                    "a",
                    "Say nothing to avoid conflict",
                    false,
                    "Staying silent allows the behavior to continue and doesn't protect your interests.",
                ),
                option(
                    "b",
                    "Politely clarify your contribution",
                    true,
                    "This is assertive without being aggressive and protects your professional reputation.",
                ),
                option(
                    "c",
                    "Confront them aggressively after the meeting",
                    false,
                    "Aggressive confrontation can damage relationships and your professional image.",
                ),
                option(
                    "d",
                    "Complain to other colleagues",
                    false,
                    "Gossiping is unprofessional and doesn't address the issue directly.",
                ),
            ],
        ),
        question(
            "self_worth1",
            Category::SelfWorth,
            "You receive constructive criticism on a project.",
            "How do you respond internally?",
            vec![
                option(
                    "a",
                    "Take it as a personal attack on your abilities",
                    false,
                    "This response is defensive and prevents growth.",
                ),
                option(
                    "b",
                    "View it as an opportunity to improve",
                    true,
                    "This growth mindset builds resilience and self-worth over time.",
                ),
                option(
                    "c",
                    "Dismiss it as the critic being wrong",
                    false,
                    "Dismissing feedback prevents learning and improvement.",
                ),
                option(
                    "d",
                    "Assume you're not good enough for the job",
                    false,
                    "This catastrophic thinking undermines self-confidence.",
                ),
            ],
        ),
        question(
            "body_image1",
            Category::BodyImage,
            "You're invited to a pool party but feel self-conscious about your appearance.",
            "What's the healthiest mindset?",
            vec![
                option(
                    "a",
                    "Skip the event to avoid feeling uncomfortable",
                    false,
                    "Avoidance reinforces negative self-image and limits social experiences.",
                ),
                option(
                    "b",
                    "Focus on enjoying time with friends rather than appearance",
                    true,
                    "Shifting focus to relationships and experiences builds positive self-image.",
                ),
                option(
                    "c",
                    "Go but stay covered up the entire time",
                    false,
                    "This compromise still centers on appearance-based anxiety.",
                ),
                option(
                    "d",
                    "Compare yourself to others at the party",
                    false,
                    "Comparison typically worsens self-image and confidence.",
                ),
            ],
        ),
    ];
}
