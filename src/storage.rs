use crate::errors::StoreError;
use crate::log::WorkoutLog;
use crate::models::ExerciseDraft;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const EXERCISES_KEY: &str = "exercises";
pub const DRAFT_KEY: &str = "exerciseDraft";

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

/// Key-value store backed by one JSON file per key under the data
/// directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Missing or unreadable values come back as `None`; the caller
    /// supplies the default.
    pub async fn load(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Some(value),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read key '{key}': {err}");
                None
            }
        }
    }

    pub async fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::write(self.key_path(key), value)
            .await
            .map_err(|source| StoreError::Write {
                key: key.to_string(),
                source,
            })
    }
}

pub async fn load_log(store: &LocalStore) -> WorkoutLog {
    parse_or_default(EXERCISES_KEY, store.load(EXERCISES_KEY).await)
}

pub async fn load_draft(store: &LocalStore) -> ExerciseDraft {
    parse_or_default(DRAFT_KEY, store.load(DRAFT_KEY).await)
}

pub async fn persist_log(store: &LocalStore, log: &WorkoutLog) -> Result<(), StoreError> {
    save_json(store, EXERCISES_KEY, log).await
}

pub async fn persist_draft(store: &LocalStore, draft: &ExerciseDraft) -> Result<(), StoreError> {
    save_json(store, DRAFT_KEY, draft).await
}

fn parse_or_default<T: DeserializeOwned + Default>(key: &str, raw: Option<String>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            error!("failed to parse stored key '{key}': {err}");
            T::default()
        }
    }
}

async fn save_json<T: Serialize>(store: &LocalStore, key: &str, value: &T) -> Result<(), StoreError> {
    let payload =
        serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
    store.save(key, &payload).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Exercise, Split};
    use chrono::{TimeZone, Utc};
    use std::path::PathBuf;

    fn unique_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "workout_log_store_{tag}_{}_{nanos}",
            std::process::id()
        ))
    }

    async fn store_in(tag: &str) -> LocalStore {
        let dir = unique_dir(tag);
        fs::create_dir_all(&dir).await.unwrap();
        LocalStore::new(dir)
    }

    #[tokio::test]
    async fn missing_keys_load_as_defaults() {
        let store = store_in("missing").await;
        assert_eq!(load_log(&store).await, WorkoutLog::default());
        assert_eq!(load_draft(&store).await, ExerciseDraft::default());
    }

    #[tokio::test]
    async fn corrupt_values_load_as_defaults() {
        let store = store_in("corrupt").await;
        store.save(EXERCISES_KEY, "not json at all").await.unwrap();
        store.save(DRAFT_KEY, "{\"name\": 42}").await.unwrap();

        assert_eq!(load_log(&store).await, WorkoutLog::default());
        assert_eq!(load_draft(&store).await, ExerciseDraft::default());
    }

    #[tokio::test]
    async fn log_round_trips_through_the_store() {
        let store = store_in("round_trip").await;
        let log = WorkoutLog {
            exercises: vec![Exercise {
                id: "a1".to_string(),
                name: "Bench Press".to_string(),
                sets: 3,
                reps: 10,
                weight: 62.5,
                date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap(),
                split: Some(Split::Push),
            }],
        };

        persist_log(&store, &log).await.unwrap();
        assert_eq!(load_log(&store).await, log);
    }

    #[tokio::test]
    async fn log_persists_as_a_bare_array() {
        let store = store_in("layout").await;
        persist_log(&store, &WorkoutLog::default()).await.unwrap();

        let raw = store.load(EXERCISES_KEY).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
    }
}
