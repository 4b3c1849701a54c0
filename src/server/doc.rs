//! OpenAPI aggregation for the endpoint annotations.

use utoipa::OpenApi;

/// Tag grouping the write paths used by game clients.
pub const INGEST_TAG: &str = "ingest";

/// Tag grouping the read views over collected telemetry.
pub const QUERY_TAG: &str = "query";

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::user::register_user,
        crate::server::controller::session::start_session,
        crate::server::controller::session::end_session,
        crate::server::controller::event::record_event,
        crate::server::controller::event::get_recent_events,
        crate::server::controller::save::upload_save,
        crate::server::controller::leaderboard::get_leaderboard,
        crate::server::controller::health::get_health,
    ),
    tags(
        (name = INGEST_TAG, description = "Write paths used by game clients"),
        (name = QUERY_TAG, description = "Read views over collected telemetry")
    )
)]
pub struct ApiDoc;
