use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod profile;
pub mod quiz;
pub mod survey;
pub mod workout;

/// The five self-assessment categories, in survey order. The declaration
/// order doubles as the tie-break order when survey scores are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Social,
    PublicSpeaking,
    BodyImage,
    Assertiveness,
    SelfWorth,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Social,
        Category::PublicSpeaking,
        Category::BodyImage,
        Category::Assertiveness,
        Category::SelfWorth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::PublicSpeaking => "public_speaking",
            Category::BodyImage => "body_image",
            Category::Assertiveness => "assertiveness",
            Category::SelfWorth => "self_worth",
        }
    }

    /// Display name shown on the dashboard focus-area cards.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Social => "Social Confidence",
            Category::PublicSpeaking => "Public Speaking",
            Category::BodyImage => "Body Image",
            Category::Assertiveness => "Assertiveness",
            Category::SelfWorth => "Self-Worth",
        }
    }
}

/// Survey answers: category -> score, each score in 1..=5.
pub type SurveyResponse = BTreeMap<Category, u8>;

/// Completion flags for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    #[serde(default)]
    pub workout: bool,
    #[serde(default)]
    pub confidence: bool,
}

/// Per-day activity flags keyed by ISO date (YYYY-MM-DD). Grows
/// monotonically; existing dates are updated in place.
pub type ActivityLog = BTreeMap<String, DayActivity>;

/// The two independently tracked daily activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Workout,
    Confidence,
}

/// Streak counter for one activity kind. `count` is the number of
/// consecutive qualifying calendar days ending at `last_date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub count: u32,
    pub last_date: Option<NaiveDate>,
}

// Serde converters for chrono::DateTime <-> mongodb::bson::DateTime
pub(crate) mod bson_datetime_as_chrono {
    use chrono::{DateTime, Utc};
    use mongodb::bson;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bson_dt = bson::DateTime::from_millis(date.timestamp_millis());
        bson_dt.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bson_dt = bson::DateTime::deserialize(deserializer)?;
        DateTime::from_timestamp_millis(bson_dt.timestamp_millis())
            .ok_or_else(|| serde::de::Error::custom("timestamp out of range"))
    }
}
