//! Response envelopes shared by all API routes.
//!
//! Every success body carries `isSuccessful: true` plus the payload; every
//! failure body carries `isSuccessful: false` plus a list of messages. The
//! admin UI switches on the flag rather than sniffing payload shapes.

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse<T> {
    pub is_successful: bool,
    pub item: T,
}

impl<T> ItemResponse<T> {
    pub fn new(item: T) -> Self {
        Self {
            is_successful: true,
            item,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse<T> {
    pub is_successful: bool,
    pub items: Vec<T>,
}

impl<T> ItemsResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            is_successful: true,
            items,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub is_successful: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self {
            is_successful: true,
        }
    }
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub is_successful: bool,
    pub errors: Vec<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            is_successful: false,
            errors: vec![message.into()],
        }
    }
}
