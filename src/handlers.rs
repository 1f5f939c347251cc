use crate::errors::{AppError, StatsError};
use crate::insights::{build_insights, InsightsResponse};
use crate::models::{AppData, DailyEntry, NotesResponse, StoreLogRequest, UsageSession, UserDoc};
use crate::state::AppState;
use crate::storage::persist_store;
use crate::ui;
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;

pub async fn index() -> Html<&'static str> {
    Html(ui::page())
}

/// Replace a user's whole document. No per-row validation here: the store
/// accepts whatever shape the client kept, and aggregation skips bad rows.
pub async fn store_log(
    State(state): State<AppState>,
    Json(payload): Json<StoreLogRequest>,
) -> Result<Json<NotesResponse>, AppError> {
    let mut store = state.store.lock().await;
    store.store_document(&payload.username, payload.doc);
    persist_store(&state.data_path, &store).await?;

    let notes = fetch_owned(&store, &payload.username)?;
    Ok(Json(NotesResponse { notes }))
}

pub async fn get_log(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<NotesResponse>, AppError> {
    let store = state.store.lock().await;
    let notes = fetch_owned(&store, &username)?;
    Ok(Json(NotesResponse { notes }))
}

/// Append one daily check-in through the fetch-modify-replace cycle. A first
/// check-in creates the user's document.
pub async fn log_daily(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(entry): Json<DailyEntry>,
) -> Result<Json<NotesResponse>, AppError> {
    if entry.date.parse::<NaiveDate>().is_err() {
        return Err(AppError::bad_request("date must be a YYYY-MM-DD calendar date"));
    }

    append(&state, &username, |doc| doc.daily.push(entry)).await
}

/// Append one usage session. Unlike the bulk replace, building a session one
/// at a time gets its range checked up front.
pub async fn log_session(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(session): Json<UsageSession>,
) -> Result<Json<NotesResponse>, AppError> {
    let (Ok(start), Ok(end)) = (
        session.start_date.parse::<NaiveDate>(),
        session.end_date.parse::<NaiveDate>(),
    ) else {
        return Err(AppError::bad_request(
            "start_date and end_date must be YYYY-MM-DD calendar dates",
        ));
    };
    if end < start {
        return Err(AppError::bad_request(
            StatsError::InvalidRange { start, end }.to_string(),
        ));
    }

    append(&state, &username, |doc| doc.sessions.push(session)).await
}

pub async fn get_insights(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<InsightsResponse>, AppError> {
    let store = state.store.lock().await;
    let doc = store
        .fetch_document(&username)
        .ok_or_else(|| AppError::not_found(format!("no log stored for {username}")))?;

    Ok(Json(build_insights(doc)))
}

async fn append(
    state: &AppState,
    username: &str,
    apply: impl FnOnce(&mut UserDoc),
) -> Result<Json<NotesResponse>, AppError> {
    let mut store = state.store.lock().await;
    let mut doc = store.fetch_document(username).cloned().unwrap_or_default();
    apply(&mut doc);
    store.store_document(username, doc);
    persist_store(&state.data_path, &store).await?;

    let notes = fetch_owned(&store, username)?;
    Ok(Json(NotesResponse { notes }))
}

fn fetch_owned(store: &AppData, username: &str) -> Result<UserDoc, AppError> {
    store
        .fetch_document(username)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("no log stored for {username}")))
}
