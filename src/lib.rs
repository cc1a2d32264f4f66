pub mod app;
pub mod draft;
pub mod errors;
pub mod grouping;
pub mod handlers;
pub mod log;
pub mod models;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{LocalStore, load_draft, load_log, resolve_data_dir};
