use crate::errors::AppError;
use crate::grouping::group_by_day;
use crate::log::WorkoutLog;
use crate::models::{
    AddExerciseRequest, AddExerciseResponse, DraftResponse, ExerciseDraft, LogResponse,
    NewExercise,
};
use crate::state::AppState;
use crate::storage::persist_log;
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use tracing::error;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn get_log(State(state): State<AppState>) -> Result<Json<LogResponse>, AppError> {
    let log = state.log.lock().await;
    Ok(Json(log_response(&log)))
}

pub async fn add_exercise(
    State(state): State<AppState>,
    Json(payload): Json<AddExerciseRequest>,
) -> Result<Json<AddExerciseResponse>, AppError> {
    let new = parse_new_exercise(payload).map_err(AppError::bad_request)?;

    let exercise = {
        let mut log = state.log.lock().await;
        let exercise = log.add(new);
        persist_or_log(&state, &log).await;
        exercise
    };
    let draft = state.draft.reset_after_submit().await;

    Ok(Json(AddExerciseResponse { exercise, draft }))
}

pub async fn delete_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LogResponse>, AppError> {
    let mut log = state.log.lock().await;
    log.delete_by_id(&id);
    persist_or_log(&state, &log).await;
    Ok(Json(log_response(&log)))
}

pub async fn delete_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<LogResponse>, AppError> {
    let mut log = state.log.lock().await;
    log.delete_by_day(&day);
    persist_or_log(&state, &log).await;
    Ok(Json(log_response(&log)))
}

pub async fn get_draft(State(state): State<AppState>) -> Json<DraftResponse> {
    let (draft, status) = state.draft.snapshot().await;
    Json(DraftResponse { draft, status })
}

pub async fn update_draft(
    State(state): State<AppState>,
    Json(draft): Json<ExerciseDraft>,
) -> Json<DraftResponse> {
    let status = state.draft.update(draft.clone()).await;
    Json(DraftResponse { draft, status })
}

/// A dropped write is logged and retried naturally on the next mutation;
/// the in-memory log stays authoritative.
async fn persist_or_log(state: &AppState, log: &WorkoutLog) {
    if let Err(err) = persist_log(&state.store, log).await {
        error!("failed to persist exercises: {err}");
    }
}

fn log_response(log: &WorkoutLog) -> LogResponse {
    LogResponse {
        total: log.exercises.len(),
        days: group_by_day(&log.exercises),
    }
}

fn parse_new_exercise(request: AddExerciseRequest) -> Result<NewExercise, &'static str> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err("exercise name must not be empty");
    }
    let sets = parse_positive(&request.sets).ok_or("sets must be a positive whole number")?;
    let reps = parse_positive(&request.reps).ok_or("reps must be a positive whole number")?;
    let weight = parse_weight(&request.weight).ok_or("weight must be a non-negative number")?;

    Ok(NewExercise {
        name: name.to_string(),
        sets,
        reps,
        weight,
        split: request.split,
    })
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

fn parse_weight(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}
