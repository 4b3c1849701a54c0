use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    model::telemetry::HealthDto,
    server::{doc::QUERY_TAG, state::AppState, util::extract::Json},
};

/// GET /health - Liveness probe with pool readiness
///
/// Always answers while the process is up; the `pool` flag reflects whether a
/// pooled connection can currently reach the datastore.
///
/// # Returns
/// - `200 OK`: Liveness body with the pool flag
#[utoipa::path(
    get,
    path = "/health",
    tag = QUERY_TAG,
    responses(
        (status = 200, description = "Process alive, pool flag reports datastore reachability", body = HealthDto)
    ),
)]
pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    let pool_ready = state.db.ping().await.is_ok();

    (
        StatusCode::OK,
        Json(HealthDto {
            status: "alive".to_string(),
            pool: pool_ready,
        }),
    )
}
