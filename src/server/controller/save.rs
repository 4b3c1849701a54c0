use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::{
    model::{
        api::ErrorDto,
        telemetry::{SaveUploadedDto, UploadSaveDto},
    },
    server::{
        doc::INGEST_TAG,
        error::AppError,
        model::save_file::UploadSaveParam,
        service::save::SaveService,
        state::AppState,
        util::extract::Json,
    },
};

/// POST /save/upload - Store a save snapshot
///
/// Appends a snapshot row with the level/inventory payloads taken verbatim. A
/// cumulative playtime carried in the save document is max-merged into the
/// user's total, covering clients that crashed before ending their session.
///
/// # Returns
/// - `200 OK`: Status body echoing the user id
/// - `400 Bad Request`: Missing user_id or malformed body
/// - `500 Internal Server Error`: Unknown user or database error
#[utoipa::path(
    post,
    path = "/save/upload",
    tag = INGEST_TAG,
    request_body = UploadSaveDto,
    responses(
        (status = 200, description = "Snapshot stored and playtime synced", body = SaveUploadedDto),
        (status = 400, description = "Missing user_id or malformed body", body = ErrorDto),
        (status = 500, description = "Unknown user or internal error", body = ErrorDto)
    ),
)]
pub async fn upload_save(
    State(state): State<AppState>,
    Json(payload): Json<UploadSaveDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id required".to_string()))?;
    let save_data = payload.save_data.unwrap_or_else(|| json!({}));

    let save_service = SaveService::new(&state.db);
    save_service
        .upload(UploadSaveParam {
            user_id: user_id.clone(),
            save_data,
        })
        .await?;

    tracing::info!(user_id = %user_id, "save snapshot stored");

    Ok((
        StatusCode::OK,
        Json(SaveUploadedDto {
            status: "save_synced".to_string(),
            user_id,
        }),
    ))
}
