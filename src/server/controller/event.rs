use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    model::{
        api::ErrorDto,
        telemetry::{EventListDto, EventRecordedDto, RecordEventDto},
    },
    server::{
        doc::{INGEST_TAG, QUERY_TAG},
        error::AppError,
        model::event::RecordEventParam,
        service::event::EventService,
        state::AppState,
        util::extract::Json,
    },
};

/// How many events the recent view returns.
const RECENT_EVENTS_LIMIT: u64 = 100;

/// POST /event - Record a telemetry event
///
/// Also mounted at the legacy /ingest path. Coordinates default to the origin
/// and the timestamp is always assigned server-side. Unknown event tags are
/// stored with a warning; retried submissions produce duplicate rows.
///
/// # Returns
/// - `200 OK`: Status body
/// - `400 Bad Request`: Missing session_id/event_type or malformed body
/// - `500 Internal Server Error`: Unknown session or database error
#[utoipa::path(
    post,
    path = "/event",
    tag = INGEST_TAG,
    request_body = RecordEventDto,
    responses(
        (status = 200, description = "Event recorded", body = EventRecordedDto),
        (status = 400, description = "Missing required field or malformed body", body = ErrorDto),
        (status = 500, description = "Unknown session or internal error", body = ErrorDto)
    ),
)]
pub async fn record_event(
    State(state): State<AppState>,
    Json(payload): Json<RecordEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let session_id = payload
        .session_id
        .ok_or_else(|| AppError::BadRequest("session_id and event_type required".to_string()))?;
    let event_type = payload
        .event_type
        .ok_or_else(|| AppError::BadRequest("session_id and event_type required".to_string()))?;
    let meta = payload.meta.unwrap_or_else(|| json!({}));

    let event_service = EventService::new(&state.db);
    let event = event_service
        .record(RecordEventParam {
            session_id,
            event_type,
            x: payload.x,
            y: payload.y,
            meta,
        })
        .await?;

    tracing::info!(
        event_type = %event.event_type,
        x = event.x,
        y = event.y,
        "event recorded"
    );

    Ok((
        StatusCode::OK,
        Json(EventRecordedDto {
            status: "event_recorded".to_string(),
        }),
    ))
}

/// GET /events - Most recent events, newest first
///
/// Read view for debugging and external visualization; returns the last 100
/// ingested events in reverse insertion order.
///
/// # Returns
/// - `200 OK`: Event list
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/events",
    tag = QUERY_TAG,
    responses(
        (status = 200, description = "Recent events, newest first", body = EventListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_events(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let event_service = EventService::new(&state.db);
    let events = event_service.recent(RECENT_EVENTS_LIMIT).await?;

    let events_dto: Vec<_> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(EventListDto { events: events_dto })))
}
