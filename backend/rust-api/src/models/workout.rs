use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single exercise slot in the plan. `completed` is the only mutable
/// field once the plan has been generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub completed: bool,
}

impl Exercise {
    pub fn new(id: &str, name: &str, sets: u32, reps: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            sets,
            reps,
            completed: false,
        }
    }
}

/// One weekday of the plan. Rest days carry an empty exercise list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveWorkoutProgressRequest {
    /// The full plan with the client's current completion checkboxes.
    pub plan: Vec<WorkoutDay>,
    /// The day the user was working on when they hit "Save Progress".
    #[validate(length(min = 1, message = "active_day_id must not be empty"))]
    pub active_day_id: String,
    /// Client-local calendar date (YYYY-MM-DD). Defaults to the server's
    /// local date when omitted.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutProgressResponse {
    /// True when every exercise of the active day was checked off.
    pub completed: bool,
    pub workout_streak: u32,
}
