//! Onboarding integration tests: the conditional location path, the
//! compensation policy, and the transactional no-orphan guarantee.

mod common;

use std::sync::Arc;

use test_context::test_context;

use common::*;
use server_core::common::ApiError;
use server_core::domains::locations::models::Location;
use server_core::domains::therapists::actions::onboard_therapist;
use server_core::domains::therapists::models::{CreateTherapist, Therapist};
use server_core::kernel::MockGeocoder;

#[test_context(TestHarness)]
#[tokio::test]
async fn no_location_submission_skips_geocoding_entirely(ctx: &TestHarness) {
    let geocoder = Arc::new(MockGeocoder::new());
    let deps = ctx.deps_with_geocoder(geocoder.clone());
    let email = unique_email("no-location");

    let id = onboard_therapist(therapist_request(&email), &deps)
        .await
        .unwrap();

    let therapist = Therapist::find_by_id(id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("therapist persisted");
    assert_eq!(therapist.email, email);
    assert!(therapist.location_id.is_none());
    assert!(therapist.is_active);

    // Geocoder (and therefore location provisioning) never ran
    assert!(geocoder.calls().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn geocode_failure_creates_nothing(ctx: &TestHarness) {
    let geocoder = Arc::new(MockGeocoder::new().with_failure("no match for address"));
    let deps = ctx.deps_with_geocoder(geocoder.clone());
    let email = unique_email("geocode-fail");
    let line_one = unique_line_one("Geocode Fail");

    let result = onboard_therapist(
        therapist_request_with_location(&email, &line_one),
        &deps,
    )
    .await;

    match result {
        Err(ApiError::LocationInvalid(message)) => {
            assert_eq!(message, "Location is invalid.")
        }
        other => panic!("expected LocationInvalid, got {:?}", other),
    }

    assert_eq!(count_therapists_with_email(&email, &ctx.db_pool).await, 0);
    assert_eq!(
        count_locations_with_line_one(&line_one, &ctx.db_pool).await,
        0
    );
    assert_eq!(geocoder.calls().len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_state_code_fails_validation_after_geocode(ctx: &TestHarness) {
    let geocoder = Arc::new(MockGeocoder::new().with_coordinates(44.98, -93.27));
    let deps = ctx.deps_with_geocoder(geocoder.clone());
    let email = unique_email("bad-state");
    let line_one = unique_line_one("Bad State");

    let mut request = therapist_request_with_location(&email, &line_one);
    // MN's canonical id is 24; a mismatched numeric part must not resolve
    request.location.as_mut().unwrap().state_id = "MN-23".to_string();

    let result = onboard_therapist(request, &deps).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));

    assert_eq!(count_therapists_with_email(&email, &ctx.db_pool).await, 0);
    assert_eq!(
        count_locations_with_line_one(&line_one, &ctx.db_pool).await,
        0
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn therapist_insert_failure_rolls_back_the_location(ctx: &TestHarness) {
    let email = unique_email("duplicate");
    let line_one = unique_line_one("Rollback");

    // Seed a therapist so the onboarding insert trips the unique email
    // constraint after the location insert succeeded.
    let seed = CreateTherapist {
        email: email.clone(),
        first_name: "Kim".to_string(),
        mi: None,
        last_name: "Lee".to_string(),
        phone: "612-555-0199".to_string(),
        avatar_url: None,
        location_id: None,
        is_active: true,
        notes: None,
    };
    Therapist::create(&seed, &ctx.db_pool).await.unwrap();

    let geocoder = Arc::new(MockGeocoder::new().with_coordinates(44.98, -93.27));
    let deps = ctx.deps_with_geocoder(geocoder);

    let result = onboard_therapist(
        therapist_request_with_location(&email, &line_one),
        &deps,
    )
    .await;
    assert!(matches!(result, Err(ApiError::TherapistCreationFailed(_))));

    // The transaction rolled the location back; no orphan survives
    assert_eq!(
        count_locations_with_line_one(&line_one, &ctx.db_pool).await,
        0
    );
    assert_eq!(count_therapists_with_email(&email, &ctx.db_pool).await, 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn successful_onboarding_persists_location_and_therapist(ctx: &TestHarness) {
    let geocoder = Arc::new(MockGeocoder::new().with_coordinates(44.98, -93.27));
    let deps = ctx.deps_with_geocoder(geocoder.clone());
    let email = unique_email("with-location");
    let line_one = unique_line_one("Success");

    let id = onboard_therapist(
        therapist_request_with_location(&email, &line_one),
        &deps,
    )
    .await
    .unwrap();

    let therapist = Therapist::find_by_id(id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("therapist persisted");
    let location_id = therapist.location_id.expect("location attached");

    let location = Location::find_by_id(location_id, &ctx.db_pool)
        .await
        .unwrap()
        .expect("location persisted");
    assert_eq!(location.line_one, line_one);
    assert_eq!(location.state_id, 24);
    assert_eq!(location.location_type_id, 2);
    assert_eq!(location.latitude, 44.98);
    assert_eq!(location.longitude, -93.27);

    // Geocoder saw the abbreviation half of the composite state code
    let calls = geocoder.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("MN"));
    assert_eq!(
        count_locations_with_line_one(&line_one, &ctx.db_pool).await,
        1
    );
}
