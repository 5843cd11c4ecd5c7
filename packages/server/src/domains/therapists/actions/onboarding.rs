//! Therapist onboarding
//!
//! Sequences the "no location" and "with location" paths. With a location,
//! the order is: geocode, resolve symbolic identifiers, then persist the
//! location and the therapist inside one transaction. Every failure is
//! terminal for the request; no retries.

use tracing::{info, warn};

use crate::common::{ApiError, LocationId, TherapistId};
use crate::domains::locations::models::{reference, CreateLocation, Location};
use crate::domains::therapists::data::TherapistAddRequest;
use crate::domains::therapists::models::{CreateTherapist, Therapist};
use crate::kernel::{GeocodeAddress, ServerDeps};

/// Message surfaced to the client for any location failure during onboarding.
const LOCATION_INVALID: &str = "Location is invalid.";

/// Onboard a therapist, provisioning the embedded location first if present.
pub async fn onboard_therapist(
    request: TherapistAddRequest,
    deps: &ServerDeps,
) -> Result<TherapistId, ApiError> {
    request.validate()?;

    let Some(location_request) = request.location.clone() else {
        let therapist = Therapist::create(&therapist_input(&request, None), &deps.db_pool)
            .await
            .map_err(|error| {
                warn!(error = %error, "Therapist insert failed");
                ApiError::TherapistCreationFailed(error.to_string())
            })?;
        info!(therapist_id = %therapist.id, "Therapist onboarded without location");
        return Ok(therapist.id);
    };

    // The geocode query only needs the abbreviation half of the composite
    // state code; full resolution happens after the geocode succeeds.
    let state_abbreviation = location_request
        .state_id
        .split('-')
        .next()
        .unwrap_or_default()
        .to_string();

    let address = GeocodeAddress {
        line_one: location_request.line_one.clone(),
        line_two: location_request.line_two.clone(),
        city: location_request.city.clone(),
        state_abbreviation,
        zip: location_request.zip.clone(),
    };

    let coordinates = deps.geocoder.resolve(&address).await.map_err(|error| {
        warn!(error = %error, "Geocoding failed during onboarding");
        ApiError::LocationInvalid(LOCATION_INVALID.to_string())
    })?;

    let state_id = reference::resolve_state_code(&location_request.state_id)?;
    let location_type_id = reference::resolve_location_type_id(location_request.location_type_id)?;

    // Location and therapist inserts share one transaction: a failed
    // therapist insert rolls the location back, so no orphan survives.
    let mut tx = deps.db_pool.begin().await?;

    let location_input = CreateLocation::builder()
        .location_type_id(location_type_id)
        .line_one(location_request.line_one)
        .line_two(location_request.line_two)
        .city(location_request.city)
        .zip(location_request.zip)
        .state_id(state_id)
        .latitude(coordinates.latitude)
        .longitude(coordinates.longitude)
        .build();

    let location = Location::create(&location_input, &mut *tx).await.map_err(|error| {
        warn!(error = %error, "Location insert failed during onboarding");
        ApiError::LocationInvalid(LOCATION_INVALID.to_string())
    })?;

    let therapist = Therapist::create(&therapist_input(&request, Some(location.id)), &mut *tx)
        .await
        .map_err(|error| {
            warn!(error = %error, location_id = %location.id, "Therapist insert failed; rolling back location");
            ApiError::TherapistCreationFailed(error.to_string())
        })?;

    tx.commit().await?;

    info!(
        therapist_id = %therapist.id,
        location_id = %location.id,
        "Therapist onboarded with location"
    );
    Ok(therapist.id)
}

fn therapist_input(
    request: &TherapistAddRequest,
    location_id: Option<LocationId>,
) -> CreateTherapist {
    CreateTherapist {
        email: request.email.clone(),
        first_name: request.first_name.clone(),
        mi: request.mi.clone(),
        last_name: request.last_name.clone(),
        phone: request.phone.clone(),
        avatar_url: request.avatar_url.clone(),
        location_id,
        is_active: request.is_active,
        notes: request.notes.clone(),
    }
}
