use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Split {
    Push,
    Pull,
    Legs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Split>,
}

impl Exercise {
    /// Calendar-day portion of the creation timestamp, used for grouping
    /// and bulk deletes.
    pub fn day_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Validated form input; `id` and `date` are assigned when the entry is
/// added to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub split: Option<Split>,
}

/// Raw in-progress form values. Numeric fields stay strings until submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub weight: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split: Option<Split>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved,
}

#[derive(Debug, Deserialize)]
pub struct AddExerciseRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sets: String,
    #[serde(default)]
    pub reps: String,
    #[serde(default)]
    pub weight: String,
    pub split: Option<Split>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub day: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub total: usize,
    pub days: Vec<DayGroup>,
}

#[derive(Debug, Serialize)]
pub struct AddExerciseResponse {
    pub exercise: Exercise,
    pub draft: ExerciseDraft,
}

#[derive(Debug, Serialize)]
pub struct DraftResponse {
    pub draft: ExerciseDraft,
    pub status: SaveStatus,
}
