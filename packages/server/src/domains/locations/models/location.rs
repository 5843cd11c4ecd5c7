use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use typed_builder::TypedBuilder;

use crate::common::LocationId;

/// Physical office location attached to a therapist.
///
/// Coordinates are NOT NULL: a location row is only ever written after a
/// successful geocode, so a persisted row always carries them.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub location_type_id: i32,
    pub line_one: String,
    pub line_two: Option<String>,
    pub city: String,
    pub zip: String,
    pub state_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for persisting a location.
///
/// `state_id` and `location_type_id` are canonical reference ids - symbolic
/// client encodings are resolved before this struct is built.
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateLocation {
    pub location_type_id: i32,
    pub line_one: String,
    #[builder(default)]
    pub line_two: Option<String>,
    pub city: String,
    pub zip: String,
    pub state_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Insert a location and return the persisted row.
    ///
    /// Generic over the executor so the insert can run inside the onboarding
    /// transaction.
    pub async fn create<'e>(
        input: &CreateLocation,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO locations (location_type_id, line_one, line_two, city, zip, state_id, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(input.location_type_id)
        .bind(&input.line_one)
        .bind(&input.line_two)
        .bind(&input.city)
        .bind(&input.zip)
        .bind(input.state_id)
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id<'e>(
        id: LocationId,
        executor: impl PgExecutor<'e>,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
