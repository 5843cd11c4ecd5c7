use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgExecutor, PgPool};

use crate::common::{LocationId, Paged, TherapistId, ValidatedPage};

/// Provider record in the therapist directory.
///
/// `location_id` is a weak reference: a therapist may exist with no office
/// location, and deleting a therapist never deletes the location.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: TherapistId,
    pub email: String,
    pub first_name: String,
    pub mi: Option<String>,
    pub last_name: String,
    pub phone: String,
    pub avatar_url: Option<String>,
    pub location_id: Option<LocationId>,
    pub is_active: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a therapist
#[derive(Debug, Clone)]
pub struct CreateTherapist {
    pub email: String,
    pub first_name: String,
    pub mi: Option<String>,
    pub last_name: String,
    pub phone: String,
    pub avatar_url: Option<String>,
    pub location_id: Option<LocationId>,
    pub is_active: bool,
    pub notes: Option<String>,
}

/// Input for updating a therapist (full replace; never touches the location)
#[derive(Debug, Clone)]
pub struct UpdateTherapist {
    pub email: String,
    pub first_name: String,
    pub mi: Option<String>,
    pub last_name: String,
    pub phone: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub notes: Option<String>,
}

impl Therapist {
    /// Insert a therapist and return the persisted row.
    ///
    /// Generic over the executor so the insert can run inside the onboarding
    /// transaction.
    pub async fn create<'e>(
        input: &CreateTherapist,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO therapists (email, first_name, mi, last_name, phone, avatar_url, location_id, is_active, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&input.email)
        .bind(&input.first_name)
        .bind(&input.mi)
        .bind(&input.last_name)
        .bind(&input.phone)
        .bind(&input.avatar_url)
        .bind(input.location_id)
        .bind(input.is_active)
        .bind(&input.notes)
        .fetch_one(executor)
        .await
    }

    pub async fn find_by_id(id: TherapistId, pool: &PgPool) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>("SELECT * FROM therapists WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_paginated(
        page: &ValidatedPage,
        pool: &PgPool,
    ) -> Result<Paged<Self>, sqlx::Error> {
        let items = sqlx::query_as::<_, Self>(
            "SELECT * FROM therapists ORDER BY last_name ASC, first_name ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(pool)
        .await?;

        let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM therapists")
            .fetch_one(pool)
            .await?;

        Ok(Paged::new(items, total_count, page))
    }

    /// Update a therapist; `None` when no row matches the id.
    pub async fn update(
        id: TherapistId,
        input: &UpdateTherapist,
        pool: &PgPool,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE therapists
            SET email = $2,
                first_name = $3,
                mi = $4,
                last_name = $5,
                phone = $6,
                avatar_url = $7,
                is_active = $8,
                notes = $9,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.email)
        .bind(&input.first_name)
        .bind(&input.mi)
        .bind(&input.last_name)
        .bind(&input.phone)
        .bind(&input.avatar_url)
        .bind(input.is_active)
        .bind(&input.notes)
        .fetch_optional(pool)
        .await
    }

    /// Delete a therapist; returns the number of rows removed.
    pub async fn delete(id: TherapistId, pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM therapists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
