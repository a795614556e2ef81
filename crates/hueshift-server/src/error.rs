//! HTTP error responses.
//!
//! Every failure the endpoint can report is an [`AppError`]. The client sees
//! a short JSON message; the full cause chain goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hueshift_core::{EncodeError, HueError, ProcessError};
use serde::Serialize;
use thiserror::Error;

use crate::acquire::AcquireError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// `image` or `hue` absent or empty.
    #[error("Missing image or hue")]
    MissingParameters,

    /// `hue` is not an integer in [0, 360].
    #[error("Invalid hue value (must be 0-360)")]
    InvalidHue(#[source] HueError),

    /// The source image could not be downloaded or decoded.
    #[error("Failed to download image")]
    Acquisition(#[source] AcquireError),

    #[error("Failed to encode image")]
    Encode(#[source] EncodeError),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameters | AppError::InvalidHue(_) => StatusCode::BAD_REQUEST,
            AppError::Acquisition(_) | AppError::Encode(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Full description including the underlying cause, for logs only.
    pub fn detailed_message(&self) -> String {
        match self {
            AppError::MissingParameters => self.to_string(),
            AppError::InvalidHue(e) => format!("{self}: {e}"),
            AppError::Acquisition(e) => format!("{self}: {e}"),
            AppError::Encode(e) => format!("{self}: {e}"),
            AppError::Internal(detail) => format!("{self}: {detail}"),
        }
    }
}

impl From<AcquireError> for AppError {
    fn from(err: AcquireError) -> Self {
        AppError::Acquisition(err)
    }
}

impl From<ProcessError> for AppError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::Decode(e) => AppError::Acquisition(AcquireError::Decode(e)),
            ProcessError::Encode(e) => AppError::Encode(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self.detailed_message(), status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self.detailed_message(), status = status.as_u16(), "Rejected request");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
