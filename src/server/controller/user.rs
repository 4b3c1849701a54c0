use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::{
        api::ErrorDto,
        telemetry::{RegisterUserDto, UserRegisteredDto},
    },
    server::{
        doc::INGEST_TAG,
        error::AppError,
        model::user::RegisterUserParam,
        service::identity::IdentityService,
        state::AppState,
        util::extract::Json,
    },
};

/// Username used when a registration carries no explicit name.
const DEFAULT_USERNAME: &str = "Anonymous";

/// POST /user/register - Register a user or confirm an existing registration
///
/// Registration is idempotent: repeating it for the same id succeeds and leaves
/// the originally registered username in place.
///
/// # Returns
/// - `200 OK`: Status body echoing the user id
/// - `400 Bad Request`: Missing user_id or malformed body
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    post,
    path = "/user/register",
    tag = INGEST_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered or already present", body = UserRegisteredDto),
        (status = 400, description = "Missing user_id or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = payload
        .user_id
        .ok_or_else(|| AppError::BadRequest("user_id required".to_string()))?;
    let username = payload
        .username
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string());

    let identity_service = IdentityService::new(&state.db);
    identity_service
        .register(RegisterUserParam {
            user_id: user_id.clone(),
            username,
        })
        .await?;

    tracing::info!(user_id = %user_id, "user registered");

    Ok((
        StatusCode::OK,
        Json(UserRegisteredDto {
            status: "registered".to_string(),
            user_id,
        }),
    ))
}
