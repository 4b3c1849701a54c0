use axum::{
    extract::rejection::JsonRejection,
    extract::FromRequest,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::server::error::AppError;

/// JSON extractor that reports body rejections through the API error shape.
///
/// Axum's stock `Json` renders a malformed body as a plain-text response; this
/// wrapper funnels the rejection through `AppError::BadRequest` instead, so
/// clients always receive `{"error": ...}` regardless of how a request failed.
/// Also usable as a response type, where it behaves exactly like `axum::Json`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
