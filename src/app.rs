use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/log", post(handlers::store_log))
        .route("/api/log/:username", get(handlers::get_log))
        .route("/api/log/:username/daily", post(handlers::log_daily))
        .route("/api/log/:username/session", post(handlers::log_session))
        .route("/api/insights/:username", get(handlers::get_insights))
        .with_state(state)
}
