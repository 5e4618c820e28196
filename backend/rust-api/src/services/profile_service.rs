use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use crate::engine::{focus, quiz, streak, workout, EngineError};
use crate::metrics::{
    streak_outcome, PROFILES_CREATED_TOTAL, QUIZZES_COMPLETED_TOTAL, STREAK_UPDATES_TOTAL,
    SURVEYS_COMPLETED_TOTAL, WORKOUT_PLANS_GENERATED_TOTAL, WORKOUT_SAVES_TOTAL,
};
use crate::models::profile::{ActivityDay, UserProfile, THEMES};
use crate::models::quiz::QuizQuestion;
use crate::models::workout::WorkoutDay;
use crate::models::{ActivityKind, ActivityLog, Category, SurveyResponse};
use crate::utils::time::{chrono_to_bson, today_local};

/// Raised when profile creation collides with an existing document.
/// Handlers map it to 409.
#[derive(Debug, thiserror::Error)]
#[error("profile already exists: {0}")]
pub struct DuplicateProfile(pub String);

/// Read-modify-write sequencing around the pure engine. The engine sees
/// profile snapshots only; this service owns the MongoDB document. Writes
/// overwrite the touched fields unconditionally (last writer wins) — the
/// app assumes at most one active session per user.
pub struct ProfileService {
    mongo: Database,
}

impl ProfileService {
    pub fn new(mongo: Database) -> Self {
        Self { mongo }
    }

    fn users(&self) -> Collection<UserProfile> {
        self.mongo.collection("users")
    }

    pub async fn create_profile(&self, uid: &str, email: &str) -> Result<UserProfile> {
        let profile = UserProfile::new(uid, email, Utc::now());

        let result = self.users().insert_one(&profile).await;
        if let Err(e) = result {
            if is_duplicate_key(&e) {
                return Err(DuplicateProfile(uid.to_string()).into());
            }
            return Err(e).context("Failed to insert profile");
        }

        PROFILES_CREATED_TOTAL.inc();
        tracing::info!("Profile created for uid={}", uid);
        Ok(profile)
    }

    pub async fn get_profile(&self, uid: &str) -> Result<UserProfile> {
        self.users()
            .find_one(doc! { "_id": uid })
            .await
            .context("Failed to query profile")?
            .ok_or_else(|| EngineError::MissingProfile.into())
    }

    /// Derives and persists focus areas from a completed survey.
    pub async fn submit_survey(
        &self,
        uid: &str,
        answers: &SurveyResponse,
    ) -> Result<Vec<Category>> {
        let focus_areas = focus::derive_focus_areas(answers)?;

        // Existence check first so a missing profile beats a write.
        let profile = self.get_profile(uid).await?;

        self.users()
            .update_one(
                doc! { "_id": uid },
                doc! { "$set": {
                    "surveyAnswers": mongodb::bson::to_bson(answers)?,
                    "focusAreas": mongodb::bson::to_bson(&focus_areas)?,
                    "hasCompletedSurvey": true,
                    "updatedAt": chrono_to_bson(Utc::now()),
                }},
            )
            .await
            .context("Failed to save survey results")?;

        SURVEYS_COMPLETED_TOTAL.inc();
        tracing::info!(
            "Survey submitted for uid={}, focus areas: {:?} (was completed: {})",
            uid,
            focus_areas,
            profile.has_completed_survey
        );

        Ok(focus_areas)
    }

    /// Returns the persisted plan, generating and persisting one from the
    /// profile's focus areas when none exists yet. An existing plan is
    /// never regenerated.
    pub async fn workout_plan(&self, uid: &str) -> Result<Vec<WorkoutDay>> {
        let profile = self.get_profile(uid).await?;

        if let Some(plan) = profile.workout_plan {
            return Ok(plan);
        }

        let plan = workout::generate_plan(&profile.focus_areas);
        self.users()
            .update_one(
                doc! { "_id": uid },
                doc! { "$set": {
                    "workoutPlan": mongodb::bson::to_bson(&plan)?,
                    "updatedAt": chrono_to_bson(Utc::now()),
                }},
            )
            .await
            .context("Failed to persist generated workout plan")?;

        WORKOUT_PLANS_GENERATED_TOTAL.inc();
        tracing::info!("Workout plan generated for uid={}", uid);
        Ok(plan)
    }

    /// Persists the client's exercise checkboxes and runs the streak
    /// engine. The day qualifies only when every exercise of the active
    /// day is checked; an unknown day id counts as not completed, exactly
    /// like an empty one.
    pub async fn save_workout_progress(
        &self,
        uid: &str,
        plan: &[WorkoutDay],
        active_day_id: &str,
        date: Option<&str>,
    ) -> Result<(bool, u32)> {
        let today = resolve_day(date)?;
        let profile = self.get_profile(uid).await?;

        // The stored plan's structure is authoritative; the request only
        // contributes completion checkboxes. A payload can never shrink
        // or reshape the persisted plan.
        let stored = match &profile.workout_plan {
            Some(plan) => plan.clone(),
            None => workout::generate_plan(&profile.focus_areas),
        };
        let plan = workout::merge_progress(&stored, plan);

        let completed = plan
            .iter()
            .find(|day| day.id == active_day_id)
            .map(workout::day_completed)
            .unwrap_or(false);

        let before = profile.streak(ActivityKind::Workout);
        let (activities, after) = streak::record_activity(
            &profile.activities,
            &before,
            ActivityKind::Workout,
            today,
            completed,
        );

        self.users()
            .update_one(
                doc! { "_id": uid },
                doc! { "$set": {
                    "workoutPlan": mongodb::bson::to_bson(&plan)?,
                    "activities": mongodb::bson::to_bson(&activities)?,
                    "workoutStreak": after.count,
                    "lastWorkoutDate": mongodb::bson::to_bson(&after.last_date)?,
                    "updatedAt": chrono_to_bson(Utc::now()),
                }},
            )
            .await
            .context("Failed to save workout progress")?;

        WORKOUT_SAVES_TOTAL
            .with_label_values(&[if completed { "true" } else { "false" }])
            .inc();
        if completed {
            STREAK_UPDATES_TOTAL
                .with_label_values(&["workout", streak_outcome(before.count, after.count)])
                .inc();
        }

        tracing::info!(
            "Workout progress saved: uid={}, day={}, completed={}, streak={}",
            uid,
            active_day_id,
            completed,
            after.count
        );

        Ok((completed, after.count))
    }

    /// Selects today's quiz questions from the profile's focus areas.
    /// Regenerated fresh each call; only outcomes are persisted.
    pub async fn quiz_questions(&self, uid: &str) -> Result<Vec<QuizQuestion>> {
        let profile = self.get_profile(uid).await?;
        Ok(quiz::select_questions(&profile.focus_areas))
    }

    /// Finishing the quiz always qualifies for the confidence streak,
    /// whatever the score.
    pub async fn finish_quiz(
        &self,
        uid: &str,
        correct: u32,
        total: u32,
        date: Option<&str>,
    ) -> Result<(u32, u32)> {
        if total == 0 || correct > total {
            return Err(EngineError::InvalidInput(format!(
                "quiz result {}/{} is not valid",
                correct, total
            ))
            .into());
        }

        let today = resolve_day(date)?;
        let profile = self.get_profile(uid).await?;

        let before = profile.streak(ActivityKind::Confidence);
        let (activities, after) = streak::record_activity(
            &profile.activities,
            &before,
            ActivityKind::Confidence,
            today,
            true,
        );

        let score_percent = (correct as f64 / total as f64 * 100.0).round() as u32;

        self.users()
            .update_one(
                doc! { "_id": uid },
                doc! { "$set": {
                    "activities": mongodb::bson::to_bson(&activities)?,
                    "confidenceStreak": after.count,
                    "lastConfidenceQuizDate": mongodb::bson::to_bson(&after.last_date)?,
                    "lastQuizScore": score_percent,
                    "updatedAt": chrono_to_bson(Utc::now()),
                }},
            )
            .await
            .context("Failed to save quiz results")?;

        QUIZZES_COMPLETED_TOTAL.inc();
        STREAK_UPDATES_TOTAL
            .with_label_values(&["confidence", streak_outcome(before.count, after.count)])
            .inc();

        tracing::info!(
            "Quiz finished: uid={}, score={}%, streak={}",
            uid,
            score_percent,
            after.count
        );

        Ok((after.count, score_percent))
    }

    /// Last-N-days view of the activity log, oldest first. Days without
    /// an entry come back with both flags false.
    pub async fn recent_activity(
        &self,
        uid: &str,
        days: u32,
        date: Option<&str>,
    ) -> Result<Vec<ActivityDay>> {
        let today = resolve_day(date)?;
        let profile = self.get_profile(uid).await?;

        Ok(activity_strip(&profile.activities, today, days))
    }

    pub async fn update_theme(&self, uid: &str, theme: &str) -> Result<()> {
        validate_theme(theme)?;

        let result = self
            .users()
            .update_one(
                doc! { "_id": uid },
                doc! { "$set": {
                    "theme": theme,
                    "updatedAt": chrono_to_bson(Utc::now()),
                }},
            )
            .await
            .context("Failed to update theme")?;

        if result.matched_count == 0 {
            return Err(EngineError::MissingProfile.into());
        }

        tracing::info!("Theme updated: uid={}, theme={}", uid, theme);
        Ok(())
    }
}

/// Client-supplied calendar date, or the server's local date when absent.
fn resolve_day(date: Option<&str>) -> Result<NaiveDate, EngineError> {
    match date {
        Some(value) => streak::parse_day(value),
        None => Ok(today_local()),
    }
}

/// The dashboard strip: one cell per day ending at `today`, oldest first.
/// `days` is clamped to 1..=31; dates the log never saw come back with
/// both flags false.
fn activity_strip(log: &ActivityLog, today: NaiveDate, days: u32) -> Vec<ActivityDay> {
    let days = days.clamp(1, 31);
    let mut strip = Vec::with_capacity(days as usize);
    for offset in (0..days).rev() {
        let day = today - Days::new(u64::from(offset));
        strip.push(ActivityDay::from_log(day, log));
    }
    strip
}

fn validate_theme(theme: &str) -> Result<(), EngineError> {
    if THEMES.contains(&theme) {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(format!("unknown theme: {}", theme)))
    }
}

fn is_duplicate_key(e: &mongodb::error::Error) -> bool {
    if let mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(ref we)) =
        *e.kind
    {
        return we.code == 11000;
    }
    false
}
