use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        leaderboard::{LeaderboardDto, LeaderboardQueryDto},
    },
    server::{
        doc::QUERY_TAG,
        error::AppError,
        service::leaderboard::{LeaderboardService, PLAYTIME_CATEGORY},
        state::AppState,
        util::extract::Json,
    },
};

/// GET /leaderboard - Ranked users for a category
///
/// Serves the playtime ranking (top 20, descending; ties in storage order).
/// The category defaults to playtime when the query parameter is absent; any
/// other value is rejected by name before touching the datastore.
///
/// # Returns
/// - `200 OK`: Ranked leaderboard
/// - `400 Bad Request`: Unknown category
/// - `500 Internal Server Error`: Database error
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = QUERY_TAG,
    params(
        ("category" = Option<String>, Query, description = "Leaderboard category, defaults to playtime")
    ),
    responses(
        (status = 200, description = "Ranked users, highest playtime first", body = LeaderboardDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = query
        .category
        .unwrap_or_else(|| PLAYTIME_CATEGORY.to_string());

    let leaderboard_service = LeaderboardService::new(&state.db);
    let users = leaderboard_service.ranking(&category).await?;

    let entries: Vec<_> = users.into_iter().map(|u| u.into_leaderboard_dto()).collect();

    Ok((
        StatusCode::OK,
        Json(LeaderboardDto {
            category,
            leaderboard: entries,
        }),
    ))
}
