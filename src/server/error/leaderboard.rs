use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// Requested leaderboard category is not served.
    ///
    /// Only the playtime ranking exists; the check runs before any datastore
    /// read. Results in a 400 Bad Request naming the category.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Converts leaderboard errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `UnknownCategory`, with the category named in the body
impl IntoResponse for LeaderboardError {
    fn into_response(self) -> Response {
        match self {
            Self::UnknownCategory(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
