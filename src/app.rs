use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/log", get(handlers::get_log))
        .route("/api/exercises", post(handlers::add_exercise))
        .route("/api/exercises/:id", delete(handlers::delete_exercise))
        .route("/api/days/:day", delete(handlers::delete_day))
        .route(
            "/api/draft",
            get(handlers::get_draft).put(handlers::update_draft),
        )
        .with_state(state)
}
