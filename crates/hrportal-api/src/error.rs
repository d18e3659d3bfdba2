//! Maps domain `AppError` to HTTP responses.

use std::any::Any;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use hrportal_core::error::{AppError, ErrorKind};

use crate::state::AppState;

/// Replacement message for server-side failures outside development.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// The unmasked body of a 500-class response.
///
/// Rides along as a response extension; only [`reveal_internal_details`]
/// puts it on the wire.
#[derive(Debug, Clone)]
pub struct InternalDetail(ApiErrorResponse);

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// An [`AppError`] on its way out as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let status = status_for(error.kind);

        if !error.kind.is_internal() {
            let body = ApiErrorResponse {
                error: error.kind.to_string(),
                message: error.message,
            };
            return (status, Json(body)).into_response();
        }

        tracing::error!(kind = %error.kind, error = %error, "Internal server error");
        masked(status, error.kind, error.message)
    }
}

/// A masked 500-class response carrying its detail as an extension.
fn masked(status: StatusCode, kind: ErrorKind, detail: String) -> Response {
    let body = ApiErrorResponse {
        error: kind.to_string(),
        message: INTERNAL_MESSAGE.to_string(),
    };
    let mut response = (status, Json(body.clone())).into_response();
    response.extensions_mut().insert(InternalDetail(ApiErrorResponse {
        message: detail,
        ..body
    }));
    response
}

/// Last-resort handler for a panicking request.
///
/// Used with `CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "Request handler panicked");
    masked(StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::Internal, detail)
}

/// Swaps masked error bodies for their detail in development.
pub async fn reveal_internal_details(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if !state.config.is_development() {
        return response;
    }

    match response.extensions_mut().remove::<InternalDetail>() {
        Some(InternalDetail(body)) => {
            let status = response.status();
            (status, Json(body)).into_response()
        }
        None => response,
    }
}
