//! Progress & Personalization Engine.
//!
//! Pure, synchronous computation over profile snapshots: focus-area
//! derivation from survey answers, workout plan and quiz question
//! generation, and the daily-streak bookkeeping. No I/O happens here;
//! the service layer owns reading and writing the profile document.

use thiserror::Error;

pub mod focus;
pub mod quiz;
pub mod streak;
pub mod survey;
pub mod workout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed or out-of-range input to a pure function.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Operation attempted against a nonexistent profile.
    #[error("profile not found")]
    MissingProfile,
}
