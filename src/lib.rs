pub mod app;
pub mod errors;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;
pub mod week;

pub use app::router;
pub use state::AppState;
pub use storage::{load_store, resolve_data_path};
