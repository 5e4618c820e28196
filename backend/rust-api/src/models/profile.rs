use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    bson_datetime_as_chrono, ActivityKind, ActivityLog, Category, DayActivity, StreakState,
    SurveyResponse,
};
use crate::models::workout::WorkoutDay;

/// App themes selectable on the settings page.
pub const THEMES: [&str; 5] = ["neon", "dark", "light", "ocean", "forest"];

pub const DEFAULT_THEME: &str = "neon";

/// User profile document stored in the MongoDB "users" collection.
/// `_id` is the uid handed out by the external identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(rename = "createdAt", with = "bson_datetime_as_chrono")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", with = "bson_datetime_as_chrono")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub has_completed_survey: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_answers: Option<SurveyResponse>,
    #[serde(default)]
    pub focus_areas: Vec<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_plan: Option<Vec<WorkoutDay>>,
    #[serde(default)]
    pub activities: ActivityLog,
    #[serde(default)]
    pub workout_streak: u32,
    #[serde(default)]
    pub last_workout_date: Option<NaiveDate>,
    #[serde(default)]
    pub confidence_streak: u32,
    #[serde(default)]
    pub last_confidence_quiz_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_quiz_score: Option<u32>,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    DEFAULT_THEME.to_string()
}

impl UserProfile {
    /// Fresh profile with the defaults a new signup gets.
    pub fn new(uid: &str, email: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: uid.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
            has_completed_survey: false,
            survey_answers: None,
            focus_areas: Vec::new(),
            workout_plan: None,
            activities: ActivityLog::new(),
            workout_streak: 0,
            last_workout_date: None,
            confidence_streak: 0,
            last_confidence_quiz_date: None,
            last_quiz_score: None,
            theme: DEFAULT_THEME.to_string(),
        }
    }

    pub fn streak(&self, kind: ActivityKind) -> StreakState {
        match kind {
            ActivityKind::Workout => StreakState {
                count: self.workout_streak,
                last_date: self.last_workout_date,
            },
            ActivityKind::Confidence => StreakState {
                count: self.confidence_streak,
                last_date: self.last_confidence_quiz_date,
            },
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, message = "uid must not be empty"))]
    pub uid: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateThemeRequest {
    #[validate(length(min = 1, message = "theme must not be empty"))]
    pub theme: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentActivityQuery {
    #[serde(default)]
    pub days: Option<u32>,
    /// Client-local calendar date (YYYY-MM-DD) anchoring the strip.
    /// Defaults to the server's local date when omitted.
    #[serde(default)]
    pub date: Option<String>,
}

/// One cell of the dashboard "this week" strip.
#[derive(Debug, Serialize)]
pub struct ActivityDay {
    pub date: String,
    /// Short weekday label, e.g. "Mon".
    pub day: String,
    pub workout: bool,
    pub confidence: bool,
}

impl ActivityDay {
    pub fn from_log(date: NaiveDate, log: &ActivityLog) -> Self {
        let key = date.format("%Y-%m-%d").to_string();
        let flags = log.get(&key).copied().unwrap_or(DayActivity::default());
        Self {
            day: date.format("%a").to_string(),
            date: key,
            workout: flags.workout,
            confidence: flags.confidence,
        }
    }
}
