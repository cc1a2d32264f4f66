use crate::models::{Exercise, NewExercise};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered collection of logged exercises, newest-first at the head.
/// Serializes as the bare JSON array it is persisted as.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutLog {
    pub exercises: Vec<Exercise>,
}

impl WorkoutLog {
    /// Builds the entry (fresh id, current timestamp) and prepends it.
    pub fn add(&mut self, new: NewExercise) -> Exercise {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            sets: new.sets,
            reps: new.reps,
            weight: new.weight,
            date: Utc::now(),
            split: new.split,
        };
        self.exercises.insert(0, exercise.clone());
        exercise
    }

    /// Removes the matching entry; a no-op when the id is unknown.
    pub fn delete_by_id(&mut self, id: &str) {
        self.exercises.retain(|exercise| exercise.id != id);
    }

    /// Removes every entry logged on the given calendar day.
    pub fn delete_by_day(&mut self, day: &str) {
        self.exercises.retain(|exercise| exercise.day_key() != day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Split;
    use chrono::{TimeZone, Utc};

    fn new_exercise(name: &str) -> NewExercise {
        NewExercise {
            name: name.to_string(),
            sets: 3,
            reps: 10,
            weight: 60.0,
            split: None,
        }
    }

    fn exercise_on(year: i32, month: u32, day: u32, name: &str) -> Exercise {
        Exercise {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            sets: 3,
            reps: 10,
            weight: 60.0,
            date: Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap(),
            split: None,
        }
    }

    #[test]
    fn add_grows_by_one_with_distinct_ids() {
        let mut log = WorkoutLog::default();

        let first = log.add(new_exercise("Bench Press"));
        assert_eq!(log.exercises.len(), 1);

        let second = log.add(new_exercise("Bench Press"));
        assert_eq!(log.exercises.len(), 2);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn add_prepends_the_newest_entry() {
        let mut log = WorkoutLog::default();
        log.add(new_exercise("Squat"));
        let latest = log.add(new_exercise("Deadlift"));

        assert_eq!(log.exercises[0], latest);
        assert_eq!(log.exercises[1].name, "Squat");
    }

    #[test]
    fn delete_by_id_removes_at_most_one_entry() {
        let mut log = WorkoutLog::default();
        let kept = log.add(new_exercise("Squat"));
        let removed = log.add(new_exercise("Deadlift"));

        log.delete_by_id(&removed.id);
        assert_eq!(log.exercises, vec![kept.clone()]);

        log.delete_by_id("no-such-id");
        assert_eq!(log.exercises, vec![kept]);
    }

    #[test]
    fn delete_by_day_removes_exactly_that_day() {
        let mut log = WorkoutLog {
            exercises: vec![
                exercise_on(2024, 1, 2, "Bench Press"),
                exercise_on(2024, 1, 1, "Squat"),
                exercise_on(2024, 1, 2, "Overhead Press"),
            ],
        };

        log.delete_by_day("2024-01-02");
        assert_eq!(log.exercises.len(), 1);
        assert_eq!(log.exercises[0].name, "Squat");

        log.delete_by_day("2024-01-02");
        assert_eq!(log.exercises.len(), 1);
    }

    #[test]
    fn serialized_log_round_trips() {
        let mut log = WorkoutLog::default();
        log.add(NewExercise {
            name: "Bench Press".to_string(),
            sets: 3,
            reps: 10,
            weight: 62.5,
            split: Some(Split::Push),
        });
        log.add(new_exercise("Squat"));

        let raw = serde_json::to_string(&log).unwrap();
        let reloaded: WorkoutLog = serde_json::from_str(&raw).unwrap();
        assert_eq!(reloaded, log);
    }
}
