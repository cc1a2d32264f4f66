use crate::draft::DraftManager;
use crate::log::WorkoutLog;
use crate::models::ExerciseDraft;
use crate::storage::LocalStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: LocalStore,
    pub log: Arc<Mutex<WorkoutLog>>,
    pub draft: DraftManager,
}

impl AppState {
    pub fn new(store: LocalStore, log: WorkoutLog, draft: ExerciseDraft) -> Self {
        Self {
            draft: DraftManager::new(store.clone(), draft),
            log: Arc::new(Mutex::new(log)),
            store,
        }
    }
}
