use crate::models::{ExerciseDraft, SaveStatus};
use crate::storage::{LocalStore, persist_draft};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::error;

/// Edits within this window coalesce into a single write.
pub const DEBOUNCE: Duration = Duration::from_millis(1000);
/// How long the "saved" confirmation stays up before going quiet.
pub const SAVED_HOLD: Duration = Duration::from_millis(2000);

struct DraftInner {
    draft: ExerciseDraft,
    status: SaveStatus,
    pending: Option<JoinHandle<()>>,
}

/// Owns the in-progress form values and their debounced autosave.
///
/// At most one save task is outstanding; every update aborts the pending
/// task and schedules a fresh one, so only the last edit in a burst is
/// written.
#[derive(Clone)]
pub struct DraftManager {
    store: LocalStore,
    debounce: Duration,
    saved_hold: Duration,
    inner: Arc<Mutex<DraftInner>>,
}

impl DraftManager {
    /// Wraps a draft loaded from the store. Construction schedules nothing;
    /// only updates start a save cycle.
    pub fn new(store: LocalStore, draft: ExerciseDraft) -> Self {
        Self::with_timing(store, draft, DEBOUNCE, SAVED_HOLD)
    }

    fn with_timing(
        store: LocalStore,
        draft: ExerciseDraft,
        debounce: Duration,
        saved_hold: Duration,
    ) -> Self {
        Self {
            store,
            debounce,
            saved_hold,
            inner: Arc::new(Mutex::new(DraftInner {
                draft,
                status: SaveStatus::Idle,
                pending: None,
            })),
        }
    }

    pub async fn snapshot(&self) -> (ExerciseDraft, SaveStatus) {
        let inner = self.inner.lock().await;
        (inner.draft.clone(), inner.status)
    }

    /// Replaces the draft and restarts the debounce window.
    pub async fn update(&self, draft: ExerciseDraft) -> SaveStatus {
        self.apply(draft).await
    }

    /// Clears everything except the split selection, which survives to
    /// speed up consecutive same-split entries. The reset is itself a draft
    /// update and runs through the normal save cycle.
    pub async fn reset_after_submit(&self) -> ExerciseDraft {
        let split = self.inner.lock().await.draft.split;
        let cleared = ExerciseDraft {
            split,
            ..ExerciseDraft::default()
        };
        self.apply(cleared.clone()).await;
        cleared
    }

    /// Aborts any pending save so no task fires after teardown.
    pub async fn shutdown(&self) {
        if let Some(handle) = self.inner.lock().await.pending.take() {
            handle.abort();
        }
    }

    async fn apply(&self, draft: ExerciseDraft) -> SaveStatus {
        let mut inner = self.inner.lock().await;
        inner.draft = draft;
        inner.status = SaveStatus::Saving;
        if let Some(handle) = inner.pending.take() {
            handle.abort();
        }
        let manager = self.clone();
        inner.pending = Some(tokio::spawn(async move {
            manager.run_save_cycle().await;
        }));
        SaveStatus::Saving
    }

    async fn run_save_cycle(&self) {
        tokio::time::sleep(self.debounce).await;
        {
            let mut inner = self.inner.lock().await;
            let draft = inner.draft.clone();
            match persist_draft(&self.store, &draft).await {
                Ok(()) => inner.status = SaveStatus::Saved,
                Err(err) => {
                    error!("failed to save draft: {err}");
                    inner.status = SaveStatus::Idle;
                    return;
                }
            }
        }
        tokio::time::sleep(self.saved_hold).await;
        let mut inner = self.inner.lock().await;
        if inner.status == SaveStatus::Saved {
            inner.status = SaveStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Split;
    use std::path::{Path, PathBuf};
    use tokio::fs;
    use tokio::time::sleep;

    fn unique_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!(
            "workout_log_draft_{tag}_{}_{nanos}",
            std::process::id()
        ))
    }

    async fn manager_in(tag: &str, debounce_ms: u64, hold_ms: u64) -> (DraftManager, PathBuf) {
        let dir = unique_dir(tag);
        fs::create_dir_all(&dir).await.unwrap();
        let manager = DraftManager::with_timing(
            LocalStore::new(dir.clone()),
            ExerciseDraft::default(),
            Duration::from_millis(debounce_ms),
            Duration::from_millis(hold_ms),
        );
        (manager, dir)
    }

    fn draft_named(name: &str) -> ExerciseDraft {
        ExerciseDraft {
            name: name.to_string(),
            ..ExerciseDraft::default()
        }
    }

    async fn stored_draft(dir: &Path) -> Option<ExerciseDraft> {
        match fs::read_to_string(dir.join("exerciseDraft.json")).await {
            Ok(raw) => Some(serde_json::from_str(&raw).unwrap()),
            Err(_) => None,
        }
    }

    #[tokio::test]
    async fn rapid_updates_coalesce_into_one_write() {
        let (manager, dir) = manager_in("coalesce", 900, 600).await;

        manager.update(draft_named("b")).await;
        sleep(Duration::from_millis(300)).await;
        manager.update(draft_named("be")).await;
        sleep(Duration::from_millis(300)).await;
        manager.update(draft_named("bench")).await;

        // The first two timers would both have fired by now had the later
        // edits not cancelled them.
        sleep(Duration::from_millis(750)).await;
        assert_eq!(stored_draft(&dir).await, None);
        assert_eq!(manager.snapshot().await.1, SaveStatus::Saving);

        sleep(Duration::from_millis(450)).await;
        assert_eq!(stored_draft(&dir).await, Some(draft_named("bench")));
        assert_eq!(manager.snapshot().await.1, SaveStatus::Saved);
    }

    #[tokio::test]
    async fn status_walks_saving_saved_idle() {
        let (manager, _dir) = manager_in("walk", 200, 300).await;
        assert_eq!(manager.snapshot().await.1, SaveStatus::Idle);

        let status = manager.update(draft_named("squat")).await;
        assert_eq!(status, SaveStatus::Saving);

        sleep(Duration::from_millis(350)).await;
        assert_eq!(manager.snapshot().await.1, SaveStatus::Saved);

        sleep(Duration::from_millis(400)).await;
        assert_eq!(manager.snapshot().await.1, SaveStatus::Idle);
    }

    #[tokio::test]
    async fn failed_save_reverts_to_idle_without_saved() {
        let dir = unique_dir("fail");
        // A regular file where the data directory should be makes every
        // write fail.
        fs::write(&dir, b"blocker").await.unwrap();
        let manager = DraftManager::with_timing(
            LocalStore::new(dir.clone()),
            ExerciseDraft::default(),
            Duration::from_millis(100),
            Duration::from_millis(200),
        );

        manager.update(draft_named("deadlift")).await;
        sleep(Duration::from_millis(300)).await;

        assert_eq!(manager.snapshot().await.1, SaveStatus::Idle);
        assert_eq!(stored_draft(&dir).await, None);
    }

    #[tokio::test]
    async fn reset_after_submit_keeps_only_the_split() {
        let (manager, _dir) = manager_in("reset", 200, 300).await;
        manager
            .update(ExerciseDraft {
                name: "Bench Press".to_string(),
                sets: "3".to_string(),
                reps: "10".to_string(),
                weight: "60".to_string(),
                split: Some(Split::Push),
            })
            .await;

        let cleared = manager.reset_after_submit().await;
        assert_eq!(
            cleared,
            ExerciseDraft {
                split: Some(Split::Push),
                ..ExerciseDraft::default()
            }
        );

        let (draft, status) = manager.snapshot().await;
        assert_eq!(draft, cleared);
        assert_eq!(status, SaveStatus::Saving);
    }
}
