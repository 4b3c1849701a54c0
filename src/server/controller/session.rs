use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        telemetry::{EndSessionDto, SessionEndedDto, SessionStartedDto, StartSessionDto},
    },
    server::{
        doc::INGEST_TAG,
        error::AppError,
        model::session::{EndSessionParam, StartSessionParam},
        service::identity::IdentityService,
        state::AppState,
        util::extract::Json,
    },
};

/// OS string used when a session start does not report one.
const DEFAULT_OS_INFO: &str = "Unknown";

/// POST /session/start - Open a new telemetry session
///
/// Creates the owning user on the fly when the id is unseen, folds an optional
/// carried-over playtime into the user's total, then inserts the session row.
/// A reused session_id fails loudly as a datastore error.
///
/// # Returns
/// - `200 OK`: Status body echoing the session id
/// - `400 Bad Request`: Missing session_id/user_id or malformed body
/// - `500 Internal Server Error`: Duplicate session id or database error
#[utoipa::path(
    post,
    path = "/session/start",
    tag = INGEST_TAG,
    request_body = StartSessionDto,
    responses(
        (status = 200, description = "Session opened", body = SessionStartedDto),
        (status = 400, description = "Missing required field or malformed body", body = ErrorDto),
        (status = 500, description = "Duplicate session id or internal error", body = ErrorDto)
    ),
)]
pub async fn start_session(
    State(state): State<AppState>,
    Json(payload): Json<StartSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = payload
        .session_id
        .ok_or_else(|| AppError::BadRequest("session_id and user_id required".to_string()))?;
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::BadRequest("session_id and user_id required".to_string()))?;
    let os_info = payload
        .os_info
        .unwrap_or_else(|| DEFAULT_OS_INFO.to_string());

    let identity_service = IdentityService::new(&state.db);
    identity_service
        .start_session(StartSessionParam {
            session_id: session_id.clone(),
            user_id: user_id.clone(),
            os_info,
            starting_total_playtime: payload.starting_total_playtime,
        })
        .await?;

    tracing::info!(session_id = %session_id, user_id = %user_id, "session started");

    Ok((
        StatusCode::OK,
        Json(SessionStartedDto {
            status: "session_started".to_string(),
            session_id,
        }),
    ))
}

/// POST /session/end - Close a session and reconcile playtime
///
/// Sets the server-assigned end time and the reported duration, then max-merges
/// the reported cumulative playtime into the owner's total. Ending an unknown
/// or already-closed session is a logged no-op, not an error.
///
/// # Returns
/// - `200 OK`: Status body
/// - `400 Bad Request`: Missing session_id or malformed body
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/session/end",
    tag = INGEST_TAG,
    request_body = EndSessionDto,
    responses(
        (status = 200, description = "Session closed, or nothing to close", body = SessionEndedDto),
        (status = 400, description = "Missing session_id or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_session(
    State(state): State<AppState>,
    Json(payload): Json<EndSessionDto>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = payload
        .session_id
        .ok_or_else(|| AppError::BadRequest("session_id required".to_string()))?;

    let identity_service = IdentityService::new(&state.db);
    identity_service
        .end_session(EndSessionParam {
            session_id: session_id.clone(),
            playtime_seconds: payload.playtime_seconds,
            total_playtime_seconds: payload.total_playtime_seconds,
        })
        .await?;

    tracing::info!(session_id = %session_id, "session ended");

    Ok((
        StatusCode::OK,
        Json(SessionEndedDto {
            status: "session_ended".to_string(),
        }),
    ))
}
