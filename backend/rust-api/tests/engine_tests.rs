//! End-to-end exercises of the Progress & Personalization Engine through
//! the public library API: survey answers in, focus areas, plan, quiz and
//! streak updates out. No database involved.

use chrono::NaiveDate;
use confidenceboost_api::engine::{focus, quiz, streak, workout, EngineError};
use confidenceboost_api::models::{
    ActivityKind, ActivityLog, Category, DayActivity, StreakState, SurveyResponse,
};

fn survey(scores: [u8; 5]) -> SurveyResponse {
    Category::ALL.iter().copied().zip(scores).collect()
}

fn day(s: &str) -> NaiveDate {
    streak::parse_day(s).unwrap()
}

#[test]
fn survey_to_personalized_plan_and_quiz() {
    // The reference example: body_image and social score lowest.
    let answers = survey([2, 4, 1, 5, 3]);
    let focus_areas = focus::derive_focus_areas(&answers).unwrap();
    assert_eq!(focus_areas, vec![Category::BodyImage, Category::Social]);

    let plan = workout::generate_plan(&focus_areas);
    assert_eq!(plan.len(), 7);
    assert_eq!(plan[0].name, "Monday - Upper Body");
    assert_eq!(plan[0].exercises.len(), 4);
    assert_eq!(plan[2].exercises.len(), 4);
    assert!(plan[1].exercises.is_empty());
    assert!(plan[3].exercises.is_empty());
    assert!(plan[6].exercises.is_empty());

    let questions = quiz::select_questions(&focus_areas);
    assert!((3..=5).contains(&questions.len()));
}

#[test]
fn a_week_of_workouts_builds_a_streak() {
    let mut log = ActivityLog::new();
    let mut state = StreakState::default();

    for (i, date) in ["2024-03-04", "2024-03-05", "2024-03-06", "2024-03-07"]
        .iter()
        .enumerate()
    {
        let (new_log, new_state) =
            streak::record_activity(&log, &state, ActivityKind::Workout, day(date), true);
        log = new_log;
        state = new_state;
        assert_eq!(state.count, (i + 1) as u32);
    }

    assert_eq!(state.last_date, Some(day("2024-03-07")));
    assert_eq!(log.len(), 4);
    assert!(log.values().all(|entry| entry.workout));
}

#[test]
fn a_missed_day_resets_then_rebuilds() {
    let state = StreakState {
        count: 9,
        last_date: Some(day("2024-03-05")),
    };

    // Two days skipped.
    let (log, state) = streak::record_activity(
        &ActivityLog::new(),
        &state,
        ActivityKind::Confidence,
        day("2024-03-08"),
        true,
    );
    assert_eq!(state.count, 1);

    let (_, state) =
        streak::record_activity(&log, &state, ActivityKind::Confidence, day("2024-03-09"), true);
    assert_eq!(state.count, 2);
}

#[test]
fn the_two_activity_kinds_track_independently() {
    let today = day("2024-03-10");
    let log = ActivityLog::new();

    let workout_state = StreakState {
        count: 3,
        last_date: Some(day("2024-03-09")),
    };
    let confidence_state = StreakState::default();

    let (log, workout_state) =
        streak::record_activity(&log, &workout_state, ActivityKind::Workout, today, true);
    let (log, confidence_state) = streak::record_activity(
        &log,
        &confidence_state,
        ActivityKind::Confidence,
        today,
        true,
    );

    assert_eq!(workout_state.count, 4);
    assert_eq!(confidence_state.count, 1);
    assert_eq!(
        log["2024-03-10"],
        DayActivity {
            workout: true,
            confidence: true
        }
    );
}

#[test]
fn saving_an_incomplete_workout_never_moves_the_streak() {
    let mut plan = workout::generate_plan(&[]);
    plan[0].exercises[0].completed = true; // one of three checked

    assert!(!workout::day_completed(&plan[0]));

    let state = StreakState {
        count: 7,
        last_date: Some(day("2024-03-09")),
    };
    let (log, after) = streak::record_activity(
        &ActivityLog::new(),
        &state,
        ActivityKind::Workout,
        day("2024-03-10"),
        workout::day_completed(&plan[0]),
    );

    assert_eq!(after, state);
    assert!(!log["2024-03-10"].workout);
}

#[test]
fn finishing_the_quiz_twice_in_a_day_counts_once() {
    let today = day("2024-03-10");
    let log = ActivityLog::new();
    let state = StreakState {
        count: 5,
        last_date: Some(day("2024-03-09")),
    };

    let (log, state) =
        streak::record_activity(&log, &state, ActivityKind::Confidence, today, true);
    let (_, state) = streak::record_activity(&log, &state, ActivityKind::Confidence, today, true);

    assert_eq!(state.count, 6);
}

#[test]
fn an_empty_progress_payload_cannot_erase_the_plan() {
    let stored = workout::generate_plan(&[Category::BodyImage, Category::Social]);

    // A save request with no days at all must leave the stored plan as is
    // and count the active day as not completed.
    let merged = workout::merge_progress(&stored, &[]);
    assert_eq!(merged, stored);
    assert_eq!(merged.len(), 7);

    let completed = merged
        .iter()
        .find(|d| d.id == "day1")
        .map(workout::day_completed)
        .unwrap_or(false);
    assert!(!completed);
}

#[test]
fn invalid_survey_input_is_surfaced_not_silently_fixed() {
    let mut answers = survey([2, 4, 1, 5, 3]);
    answers.insert(Category::PublicSpeaking, 9);

    match focus::derive_focus_areas(&answers) {
        Err(EngineError::InvalidInput(msg)) => {
            assert!(msg.contains("public_speaking"), "got: {}", msg);
        }
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}
