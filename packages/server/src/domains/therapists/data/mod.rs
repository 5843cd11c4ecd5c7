//! Request DTOs for the therapist API, matching the client form payloads.

use serde::{Deserialize, Serialize};

use crate::common::ApiError;

/// Location sub-object embedded in an onboarding submission.
///
/// `state_id` is the composite symbolic code the form submits (`"MN-24"`);
/// `location_type_id` is a numeric id into the fixed type enumeration. Both
/// are resolved and validated during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationAddRequest {
    pub location_type_id: i32,
    pub line_one: String,
    #[serde(default)]
    pub line_two: Option<String>,
    pub city: String,
    pub zip: String,
    pub state_id: String,
}

/// Therapist onboarding submission, optionally embedding a location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistAddRequest {
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub mi: Option<String>,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub location: Option<LocationAddRequest>,
}

fn default_is_active() -> bool {
    true
}

impl TherapistAddRequest {
    /// Server-side validation of required fields. Field-level messages for
    /// the form live in the client; this is the backstop.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.trim().is_empty() || !self.email.contains('@') {
            return Err(ApiError::validation("email is required and must be valid"));
        }
        if self.first_name.trim().is_empty() {
            return Err(ApiError::validation("firstName is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ApiError::validation("lastName is required"));
        }
        if self.phone.trim().is_empty() {
            return Err(ApiError::validation("phone is required"));
        }
        if let Some(location) = &self.location {
            location.validate()?;
        }
        Ok(())
    }
}

impl LocationAddRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.line_one.trim().is_empty() {
            return Err(ApiError::validation("location.lineOne is required"));
        }
        if self.city.trim().is_empty() {
            return Err(ApiError::validation("location.city is required"));
        }
        if self.zip.trim().is_empty() {
            return Err(ApiError::validation("location.zip is required"));
        }
        Ok(())
    }
}

/// Therapist update submission (no location changes on this path).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistUpdateRequest {
    pub email: String,
    pub first_name: String,
    #[serde(default)]
    pub mi: Option<String>,
    pub last_name: String,
    pub phone: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}
