//! Shared request fixtures and count helpers.
//!
//! The database container is shared across the whole test binary, so every
//! fixture carries a unique marker (email, street line, actor id) that keeps
//! concurrently running tests out of each other's data.

use std::sync::atomic::{AtomicI32, Ordering};

use sqlx::PgPool;

use server_core::common::UserId;
use server_core::domains::schedule_availabilities::data::ScheduleAvailabilityAddRequest;
use server_core::domains::therapists::data::{LocationAddRequest, TherapistAddRequest};

static COUNTER: AtomicI32 = AtomicI32::new(1);

fn next_marker() -> i32 {
    COUNTER.fetch_add(1, Ordering::Relaxed)
}

pub fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, next_marker())
}

/// Street line unique to one test, used to count "our" locations.
pub fn unique_line_one(prefix: &str) -> String {
    format!("{} Test Street #{}", prefix, next_marker())
}

/// Actor id unique to one test (kept clear of small fixed ids).
pub fn unique_user_id() -> UserId {
    UserId::from_raw(10_000 + next_marker())
}

pub fn therapist_request(email: &str) -> TherapistAddRequest {
    serde_json::from_value(serde_json::json!({
        "email": email,
        "firstName": "Kim",
        "lastName": "Lee",
        "phone": "612-555-0199"
    }))
    .expect("fixture deserializes")
}

pub fn location_request(line_one: &str) -> LocationAddRequest {
    LocationAddRequest {
        location_type_id: 2,
        line_one: line_one.to_string(),
        line_two: None,
        city: "Minneapolis".to_string(),
        zip: "55403".to_string(),
        state_id: "MN-24".to_string(),
    }
}

pub fn therapist_request_with_location(email: &str, line_one: &str) -> TherapistAddRequest {
    let mut request = therapist_request(email);
    request.location = Some(location_request(line_one));
    request
}

pub fn availability_request() -> ScheduleAvailabilityAddRequest {
    serde_json::from_value(serde_json::json!({
        "dayOfWeek": 2,
        "startsAt": "09:00:00",
        "endsAt": "17:00:00",
        "validFrom": "2026-01-05"
    }))
    .expect("fixture deserializes")
}

pub async fn count_locations_with_line_one(line_one: &str, pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM locations WHERE line_one = $1")
        .bind(line_one)
        .fetch_one(pool)
        .await
        .expect("count query succeeds")
}

pub async fn count_therapists_with_email(email: &str, pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM therapists WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await
        .expect("count query succeeds")
}
