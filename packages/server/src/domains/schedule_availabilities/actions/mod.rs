//! Schedule-availability service
//!
//! Owns the full lifecycle of availability windows. Mutations stamp the
//! authenticated actor as creator/modifier; reads that find nothing return
//! `NotFound`, while paginated queries with zero matching rows return a
//! valid empty page.

use sqlx::PgPool;
use tracing::info;

use crate::common::{ApiError, PageRequest, Paged, ScheduleAvailabilityId, UserId};
use crate::domains::schedule_availabilities::data::{
    ScheduleAvailabilityAddRequest, ScheduleAvailabilityUpdateRequest,
};
use crate::domains::schedule_availabilities::models::{
    CreateScheduleAvailability, ScheduleAvailability, UpdateScheduleAvailability,
};

/// Persist a new availability window stamped with the acting user.
pub async fn add_schedule_availability(
    request: &ScheduleAvailabilityAddRequest,
    actor: UserId,
    pool: &PgPool,
) -> Result<ScheduleAvailabilityId, ApiError> {
    request.validate()?;

    let input = CreateScheduleAvailability::builder()
        .day_of_week(request.day_of_week)
        .starts_at(request.starts_at)
        .ends_at(request.ends_at)
        .valid_from(request.valid_from)
        .valid_to(request.valid_to)
        .notes(request.notes.clone())
        .created_by(actor)
        .build();

    let availability = ScheduleAvailability::create(&input, pool).await?;

    info!(
        schedule_availability_id = %availability.id,
        created_by = %actor,
        "Schedule availability created"
    );
    Ok(availability.id)
}

/// Update an existing window, stamping the acting user as modifier.
///
/// Fails with `NotFound` when the id matches no record; an update that
/// touches nothing is an error, never a silent no-op.
pub async fn update_schedule_availability(
    id: ScheduleAvailabilityId,
    request: &ScheduleAvailabilityUpdateRequest,
    actor: UserId,
    pool: &PgPool,
) -> Result<(), ApiError> {
    request.validate()?;

    let input = UpdateScheduleAvailability::builder()
        .day_of_week(request.day_of_week)
        .starts_at(request.starts_at)
        .ends_at(request.ends_at)
        .valid_from(request.valid_from)
        .valid_to(request.valid_to)
        .notes(request.notes.clone())
        .modified_by(actor)
        .build();

    let rows_affected = ScheduleAvailability::update(id, &input, pool).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }

    info!(schedule_availability_id = %id, modified_by = %actor, "Schedule availability updated");
    Ok(())
}

pub async fn get_schedule_availability(
    id: ScheduleAvailabilityId,
    pool: &PgPool,
) -> Result<ScheduleAvailability, ApiError> {
    ScheduleAvailability::find_by_id(id, pool)
        .await?
        .ok_or(ApiError::NotFound)
}

pub async fn get_all_schedule_availabilities(
    page: PageRequest,
    pool: &PgPool,
) -> Result<Paged<ScheduleAvailability>, ApiError> {
    let page = page.validate()?;
    Ok(ScheduleAvailability::find_paginated(&page, pool).await?)
}

/// Paged listing scoped to the windows a given user created.
///
/// Intentionally not restricted to the requesting actor; the admin UI
/// queries other creators with it.
pub async fn get_schedule_availabilities_by_creator(
    page: PageRequest,
    created_by: UserId,
    pool: &PgPool,
) -> Result<Paged<ScheduleAvailability>, ApiError> {
    let page = page.validate()?;
    Ok(ScheduleAvailability::find_by_created_by(&page, created_by, pool).await?)
}

pub async fn delete_schedule_availability(
    id: ScheduleAvailabilityId,
    pool: &PgPool,
) -> Result<(), ApiError> {
    let rows_affected = ScheduleAvailability::delete(id, pool).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }

    info!(schedule_availability_id = %id, "Schedule availability deleted");
    Ok(())
}

/// Full unpaginated listing.
pub async fn list_schedule_availabilities(
    pool: &PgPool,
) -> Result<Vec<ScheduleAvailability>, ApiError> {
    Ok(ScheduleAvailability::find_all(pool).await?)
}
