use crate::models::workout::{Exercise, WorkoutDay};
use crate::models::Category;

/// Builds the 7-day workout plan for the given focus areas.
///
/// The base template has four training days and three rest days in fixed
/// weekday order. A `body_image` focus area adds one extra exercise to
/// Monday and one to Wednesday. Deterministic: the same focus areas always
/// produce the same plan. The service layer only calls this when the
/// profile has no plan yet; an existing plan is never regenerated.
pub fn generate_plan(focus_areas: &[Category]) -> Vec<WorkoutDay> {
    let mut plan = base_plan();

    if focus_areas.contains(&Category::BodyImage) {
        plan[0]
            .exercises
            .push(Exercise::new("ex13", "Bicep Curls", 3, 12));
        plan[2]
            .exercises
            .push(Exercise::new("ex14", "Glute Bridges", 3, 15));
    }

    plan
}

/// A workout day qualifies for the streak only when it has exercises and
/// every one of them is checked off.
pub fn day_completed(day: &WorkoutDay) -> bool {
    !day.exercises.is_empty() && day.exercises.iter().all(|ex| ex.completed)
}

/// Copies the client's completion checkboxes onto the stored plan.
///
/// The stored plan's structure is authoritative: `completed` is the only
/// field a request can change. Days or exercises the client did not send
/// keep their persisted flags; anything in the payload the plan never had
/// is dropped.
pub fn merge_progress(stored: &[WorkoutDay], client: &[WorkoutDay]) -> Vec<WorkoutDay> {
    stored
        .iter()
        .map(|day| {
            let client_day = client.iter().find(|d| d.id == day.id);
            let exercises = day
                .exercises
                .iter()
                .map(|ex| {
                    let completed = client_day
                        .and_then(|d| d.exercises.iter().find(|e| e.id == ex.id))
                        .map_or(ex.completed, |e| e.completed);
                    Exercise {
                        completed,
                        ..ex.clone()
                    }
                })
                .collect();
            WorkoutDay {
                id: day.id.clone(),
                name: day.name.clone(),
                exercises,
            }
        })
        .collect()
}

fn base_plan() -> Vec<WorkoutDay> {
    vec![
        WorkoutDay {
            id: "day1".to_string(),
            name: "Monday - Upper Body".to_string(),
            exercises: vec![
                Exercise::new("ex1", "Push-ups", 3, 10),
                Exercise::new("ex2", "Dumbbell Rows", 3, 12),
                Exercise::new("ex3", "Shoulder Press", 3, 10),
            ],
        },
        WorkoutDay {
            id: "day2".to_string(),
            name: "Tuesday - Rest Day".to_string(),
            exercises: vec![],
        },
        WorkoutDay {
            id: "day3".to_string(),
            name: "Wednesday - Lower Body".to_string(),
            exercises: vec![
                Exercise::new("ex4", "Squats", 3, 15),
                Exercise::new("ex5", "Lunges", 3, 10),
                Exercise::new("ex6", "Calf Raises", 3, 20),
            ],
        },
        WorkoutDay {
            id: "day4".to_string(),
            name: "Thursday - Rest Day".to_string(),
            exercises: vec![],
        },
        WorkoutDay {
            id: "day5".to_string(),
            name: "Friday - Full Body".to_string(),
            exercises: vec![
                Exercise::new("ex7", "Burpees", 3, 10),
                Exercise::new("ex8", "Mountain Climbers", 3, 20),
                Exercise::new("ex9", "Plank", 3, 30),
            ],
        },
        WorkoutDay {
            id: "day6".to_string(),
            name: "Saturday - Cardio".to_string(),
            exercises: vec![
                Exercise::new("ex10", "Jumping Jacks", 3, 30),
                Exercise::new("ex11", "High Knees", 3, 20),
                Exercise::new("ex12", "Jump Rope", 1, 100),
            ],
        },
        WorkoutDay {
            id: "day7".to_string(),
            name: "Sunday - Rest Day".to_string(),
            exercises: vec![],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_has_seven_days_with_three_rest_days() {
        let plan = generate_plan(&[]);
        assert_eq!(plan.len(), 7);

        let rest_days: Vec<&str> = plan
            .iter()
            .filter(|day| day.exercises.is_empty())
            .map(|day| day.id.as_str())
            .collect();
        assert_eq!(rest_days, vec!["day2", "day4", "day7"]);
    }

    #[test]
    fn body_image_focus_adds_two_exercises() {
        let plan = generate_plan(&[Category::BodyImage, Category::Social]);

        assert_eq!(plan[0].name, "Monday - Upper Body");
        assert_eq!(plan[0].exercises.len(), 4);
        assert_eq!(plan[0].exercises[3].name, "Bicep Curls");

        assert_eq!(plan[2].exercises.len(), 4);
        assert_eq!(plan[2].exercises[3].name, "Glute Bridges");

        // The other training days stay untouched.
        assert_eq!(plan[4].exercises.len(), 3);
        assert_eq!(plan[5].exercises.len(), 3);
    }

    #[test]
    fn without_body_image_focus_plan_is_base() {
        let plan = generate_plan(&[Category::Social, Category::SelfWorth]);
        assert_eq!(plan[0].exercises.len(), 3);
        assert_eq!(plan[2].exercises.len(), 3);
    }

    #[test]
    fn generation_is_idempotent() {
        let focus = [Category::BodyImage, Category::Assertiveness];
        assert_eq!(generate_plan(&focus), generate_plan(&focus));
    }

    #[test]
    fn day_completed_requires_all_exercises_checked() {
        let mut day = generate_plan(&[])[0].clone();
        assert!(!day_completed(&day));

        for ex in &mut day.exercises {
            ex.completed = true;
        }
        assert!(day_completed(&day));

        day.exercises[1].completed = false;
        assert!(!day_completed(&day));
    }

    #[test]
    fn rest_day_never_counts_as_completed() {
        let plan = generate_plan(&[]);
        assert!(!day_completed(&plan[1]));
    }

    #[test]
    fn merge_copies_only_completion_flags() {
        let stored = generate_plan(&[]);
        let mut client = stored.clone();
        client[0].exercises[1].completed = true;
        client[0].exercises[1].name = "Renamed".to_string();
        client[0].exercises[1].sets = 99;

        let merged = merge_progress(&stored, &client);
        assert!(merged[0].exercises[1].completed);
        assert_eq!(merged[0].exercises[1].name, "Dumbbell Rows");
        assert_eq!(merged[0].exercises[1].sets, 3);
    }

    #[test]
    fn merge_with_empty_client_plan_keeps_the_stored_structure() {
        let stored = generate_plan(&[Category::BodyImage, Category::Social]);
        let merged = merge_progress(&stored, &[]);
        assert_eq!(merged, stored);
    }

    #[test]
    fn merge_ignores_days_and_exercises_the_plan_never_had() {
        let stored = generate_plan(&[]);
        let mut client = stored.clone();
        client[1]
            .exercises
            .push(Exercise::new("ex99", "Made Up", 1, 1));
        client.push(WorkoutDay {
            id: "day8".to_string(),
            name: "Extra".to_string(),
            exercises: vec![],
        });

        let merged = merge_progress(&stored, &client);
        assert_eq!(merged.len(), 7);
        assert!(merged[1].exercises.is_empty());
    }

    #[test]
    fn merge_preserves_flags_for_days_the_client_omitted() {
        let mut stored = generate_plan(&[]);
        stored[2].exercises[0].completed = true;

        // Client sends only Monday.
        let client = vec![stored[0].clone()];
        let merged = merge_progress(&stored, &client);
        assert!(merged[2].exercises[0].completed);
    }
}
