//! Maps the `ApiError` taxonomy to HTTP status codes and caller-visible
//! messages.
//!
//! Validation and geocode failures surface their message verbatim; not-found
//! always returns the same generic body; storage and unexpected failures log
//! full detail and return a generic body so storage internals never leak.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use crate::common::ApiError;
use crate::server::responses::ErrorResponse;

pub const NOT_FOUND_MESSAGE: &str = "Application resource not found.";
pub const SERVER_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";
pub const THERAPIST_FAILED_MESSAGE: &str = "Therapist could not be created.";
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required.";

impl ApiError {
    /// Status and caller-visible message for this failure.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Validation(message) | Self::LocationInvalid(message) => {
                (StatusCode::BAD_REQUEST, message.clone())
            }
            Self::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            Self::AuthenticationRequired => {
                (StatusCode::UNAUTHORIZED, AUTH_REQUIRED_MESSAGE.to_string())
            }
            Self::TherapistCreationFailed(detail) => {
                error!(detail = %detail, "Therapist creation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    THERAPIST_FAILED_MESSAGE.to_string(),
                )
            }
            Self::Persistence(source) => {
                error!(error = %source, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
            Self::Unexpected(source) => {
                error!(error = %source, "Unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
