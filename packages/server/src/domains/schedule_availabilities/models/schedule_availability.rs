use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::{Paged, ScheduleAvailabilityId, UserId, ValidatedPage};

/// A recurring weekly availability window.
///
/// `day_of_week` is 0 (Sunday) through 6; the window applies from
/// `valid_from` until `valid_to` (open-ended when NULL). Creator and
/// modifier identities come from the authenticated actor, never the
/// request body.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAvailability {
    pub id: ScheduleAvailabilityId,
    pub day_of_week: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub valid_from: NaiveDate,
    pub valid_to: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_by: UserId,
    pub modified_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateScheduleAvailability {
    pub day_of_week: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub valid_from: NaiveDate,
    #[builder(default)]
    pub valid_to: Option<NaiveDate>,
    #[builder(default)]
    pub notes: Option<String>,
    pub created_by: UserId,
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct UpdateScheduleAvailability {
    pub day_of_week: i32,
    pub starts_at: NaiveTime,
    pub ends_at: NaiveTime,
    pub valid_from: NaiveDate,
    #[builder(default)]
    pub valid_to: Option<NaiveDate>,
    #[builder(default)]
    pub notes: Option<String>,
    pub modified_by: UserId,
}

impl ScheduleAvailability {
    pub async fn create(
        input: &CreateScheduleAvailability,
        pool: &PgPool,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO schedule_availabilities
                (day_of_week, starts_at, ends_at, valid_from, valid_to, notes, created_by, modified_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING *
            "#,
        )
        .bind(input.day_of_week)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .bind(input.valid_from)
        .bind(input.valid_to)
        .bind(&input.notes)
        .bind(input.created_by)
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(
        id: ScheduleAvailabilityId,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM schedule_availabilities WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full unpaginated listing (bounded size assumed by the caller).
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM schedule_availabilities ORDER BY day_of_week ASC, starts_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_paginated(
        page: &ValidatedPage,
        pool: &PgPool,
    ) -> Result<Paged<Self>, sqlx::Error> {
        let items = sqlx::query_as::<_, Self>(
            "SELECT * FROM schedule_availabilities ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM schedule_availabilities")
            .fetch_one(pool)
            .await?;

        Ok(Paged::new(items, total_count, page))
    }

    pub async fn find_by_created_by(
        page: &ValidatedPage,
        created_by: UserId,
        pool: &PgPool,
    ) -> Result<Paged<Self>, sqlx::Error> {
        let items = sqlx::query_as::<_, Self>(
            "SELECT * FROM schedule_availabilities WHERE created_by = $1 ORDER BY id ASC LIMIT $2 OFFSET $3",
        )
        .bind(created_by)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        let total_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM schedule_availabilities WHERE created_by = $1")
                .bind(created_by)
                .fetch_one(pool)
                .await?;

        Ok(Paged::new(items, total_count, page))
    }

    /// Update an availability window; returns the number of rows matched.
    pub async fn update(
        id: ScheduleAvailabilityId,
        input: &UpdateScheduleAvailability,
        pool: &PgPool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE schedule_availabilities
            SET day_of_week = $2,
                starts_at = $3,
                ends_at = $4,
                valid_from = $5,
                valid_to = $6,
                notes = $7,
                modified_by = $8,
                updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(input.day_of_week)
        .bind(input.starts_at)
        .bind(input.ends_at)
        .bind(input.valid_from)
        .bind(input.valid_to)
        .bind(&input.notes)
        .bind(input.modified_by)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete an availability window; returns the number of rows removed.
    pub async fn delete(id: ScheduleAvailabilityId, pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schedule_availabilities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
