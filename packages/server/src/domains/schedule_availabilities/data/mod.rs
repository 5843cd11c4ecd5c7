//! Request DTOs for the schedule-availability API.
//!
//! Actor identity is never part of these payloads; it comes from the
//! authenticated session and is stamped by the service.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::common::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAvailabilityAddRequest {
    pub day_of_week: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub valid_from: NaiveDate,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAvailabilityUpdateRequest {
    pub day_of_week: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub valid_from: NaiveDate,
    #[serde(default)]
    pub valid_to: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Shared domain validation for add and update payloads.
pub(crate) fn validate_window(
    day_of_week: i32,
    starts_at: NaiveTime,
    ends_at: NaiveTime,
    valid_from: NaiveDate,
    valid_to: Option<NaiveDate>,
) -> Result<(), ApiError> {
    if !(0..=6).contains(&day_of_week) {
        return Err(ApiError::validation("dayOfWeek must be between 0 and 6"));
    }
    if ends_at <= starts_at {
        return Err(ApiError::validation("endsAt must be after startsAt"));
    }
    if let Some(valid_to) = valid_to {
        if valid_to < valid_from {
            return Err(ApiError::validation("validTo must not precede validFrom"));
        }
    }
    Ok(())
}

impl ScheduleAvailabilityAddRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_window(
            self.day_of_week,
            self.starts_at,
            self.ends_at,
            self.valid_from,
            self.valid_to,
        )
    }
}

impl ScheduleAvailabilityUpdateRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_window(
            self.day_of_week,
            self.starts_at,
            self.ends_at,
            self.valid_from,
            self.valid_to,
        )
    }
}
