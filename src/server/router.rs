use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        event::{get_recent_events, record_event},
        health::get_health,
        leaderboard::get_leaderboard,
        save::upload_save,
        session::{end_session, start_session},
        user::register_user,
    },
    error::AppError,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/register", post(register_user))
        .route("/session/start", post(start_session))
        .route("/session/end", post(end_session))
        .route("/event", post(record_event))
        // Legacy path, kept for clients built before /event existed.
        .route("/ingest", post(record_event))
        .route("/save/upload", post(upload_save))
        .route("/health", get(get_health))
        .route("/events", get(get_recent_events))
        .route("/leaderboard", get(get_leaderboard))
        .fallback(unknown_route)
}

/// Unmatched routes answer with the API's structured error body.
async fn unknown_route() -> AppError {
    AppError::NotFound("Endpoint not found".to_string())
}
