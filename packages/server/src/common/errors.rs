use thiserror::Error;

/// Failure taxonomy for the therapist directory API.
///
/// Domain actions return these typed failures; the HTTP boundary maps each
/// variant to a status code and a caller-visible message (`server::error`).
/// Expected conditions (not-found, invalid input) are variants here, never
/// panics or bare `anyhow` errors.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed input, including unparsable symbolic identifiers.
    #[error("{0}")]
    Validation(String),

    /// Geocoding or location persistence failed during onboarding.
    #[error("{0}")]
    LocationInvalid(String),

    /// The therapist insert failed after its location (if any) resolved.
    #[error("therapist could not be created: {0}")]
    TherapistCreationFailed(String),

    #[error("resource not found")]
    NotFound,

    #[error("authentication required")]
    AuthenticationRequired,

    /// Underlying storage failure. Detail is logged, never surfaced.
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl ApiError {
    /// Shorthand for `Validation` with a formatted message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
