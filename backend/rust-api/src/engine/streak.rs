use chrono::{Days, NaiveDate};

use crate::engine::EngineError;
use crate::models::{ActivityKind, ActivityLog, StreakState};

/// Records one activity instance for `today` and recomputes the streak.
///
/// Returns updated copies of the activity log and streak state; the caller
/// owns persisting them. The log entry for `today` is upserted with this
/// kind's flag only, the other kind's flag on the same date is preserved.
///
/// The streak only moves when the day qualifies:
/// - no prior qualifying date: the streak starts at 1
/// - prior date is yesterday: the streak grows by 1
/// - prior date is today: already counted, the counter stays put
/// - anything older: the streak resets to 1
///
/// A non-qualifying day (workout saved with unchecked exercises) leaves
/// the streak untouched and only writes the flag as false.
pub fn record_activity(
    log: &ActivityLog,
    streak: &StreakState,
    kind: ActivityKind,
    today: NaiveDate,
    qualified: bool,
) -> (ActivityLog, StreakState) {
    let mut log = log.clone();
    let entry = log.entry(day_key(today)).or_default();
    match kind {
        ActivityKind::Workout => entry.workout = qualified,
        ActivityKind::Confidence => entry.confidence = qualified,
    }

    if !qualified {
        return (log, *streak);
    }

    let yesterday = today - Days::new(1);
    let count = match streak.last_date {
        None => 1,
        Some(last) if last == yesterday => streak.count + 1,
        Some(last) if last == today => streak.count,
        Some(_) => 1,
    };

    (
        log,
        StreakState {
            count,
            last_date: Some(today),
        },
    )
}

/// Parses a client-supplied `YYYY-MM-DD` calendar date.
pub fn parse_day(value: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidInput(format!("malformed date: {}", value)))
}

/// Activity-log key for a calendar date.
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayActivity;

    fn date(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    #[test]
    fn first_qualifying_day_starts_streak_at_one() {
        let log = ActivityLog::new();
        let streak = StreakState::default();
        let today = date("2024-03-10");

        let (log, streak) =
            record_activity(&log, &streak, ActivityKind::Confidence, today, true);

        assert_eq!(streak.count, 1);
        assert_eq!(streak.last_date, Some(today));
        assert!(log["2024-03-10"].confidence);
    }

    #[test]
    fn consecutive_day_increments_streak() {
        let streak = StreakState {
            count: 5,
            last_date: Some(date("2024-03-09")),
        };

        let (_, streak) = record_activity(
            &ActivityLog::new(),
            &streak,
            ActivityKind::Workout,
            date("2024-03-10"),
            true,
        );

        assert_eq!(streak.count, 6);
        assert_eq!(streak.last_date, Some(date("2024-03-10")));
    }

    #[test]
    fn gap_resets_streak_to_one() {
        let streak = StreakState {
            count: 5,
            last_date: Some(date("2024-03-07")),
        };

        let (_, streak) = record_activity(
            &ActivityLog::new(),
            &streak,
            ActivityKind::Workout,
            date("2024-03-10"),
            true,
        );

        assert_eq!(streak.count, 1);
    }

    #[test]
    fn second_completion_same_day_does_not_double_count() {
        let today = date("2024-03-10");
        let log = ActivityLog::new();
        let streak = StreakState {
            count: 5,
            last_date: Some(date("2024-03-09")),
        };

        let (log, streak) = record_activity(&log, &streak, ActivityKind::Workout, today, true);
        assert_eq!(streak.count, 6);

        let (_, streak) = record_activity(&log, &streak, ActivityKind::Workout, today, true);
        assert_eq!(streak.count, 6);
        assert_eq!(streak.last_date, Some(today));
    }

    #[test]
    fn non_qualifying_day_leaves_streak_untouched() {
        let streak = StreakState {
            count: 3,
            last_date: Some(date("2024-03-09")),
        };

        let (log, after) = record_activity(
            &ActivityLog::new(),
            &streak,
            ActivityKind::Workout,
            date("2024-03-10"),
            false,
        );

        assert_eq!(after, streak);
        assert!(!log["2024-03-10"].workout);
    }

    #[test]
    fn upsert_preserves_the_other_activity_flag() {
        let today = date("2024-03-10");
        let mut log = ActivityLog::new();
        log.insert(
            day_key(today),
            DayActivity {
                workout: true,
                confidence: false,
            },
        );

        let (log, _) = record_activity(
            &log,
            &StreakState::default(),
            ActivityKind::Confidence,
            today,
            true,
        );

        let entry = log["2024-03-10"];
        assert!(entry.workout, "workout flag must survive a confidence write");
        assert!(entry.confidence);
    }

    #[test]
    fn non_qualifying_write_preserves_other_flag_too() {
        let today = date("2024-03-10");
        let mut log = ActivityLog::new();
        log.insert(
            day_key(today),
            DayActivity {
                workout: false,
                confidence: true,
            },
        );

        let (log, _) = record_activity(
            &log,
            &StreakState::default(),
            ActivityKind::Workout,
            today,
            false,
        );

        let entry = log["2024-03-10"];
        assert!(entry.confidence);
        assert!(!entry.workout);
    }

    #[test]
    fn month_boundary_counts_as_consecutive() {
        let streak = StreakState {
            count: 2,
            last_date: Some(date("2024-02-29")),
        };

        let (_, streak) = record_activity(
            &ActivityLog::new(),
            &streak,
            ActivityKind::Confidence,
            date("2024-03-01"),
            true,
        );

        assert_eq!(streak.count, 3);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(parse_day("2024-13-01").is_err());
        assert!(parse_day("not-a-date").is_err());
        assert!(parse_day("2024/03/10").is_err());
        assert!(parse_day("").is_err());
    }
}
