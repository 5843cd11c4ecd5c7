//! Therapist routes
//!
//! Creation runs through the onboarding action (conditional location
//! provisioning); the remaining CRUD operations are thin model calls.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::common::{ApiError, PageRequest, Paged, TherapistId};
use crate::domains::therapists::actions::onboard_therapist;
use crate::domains::therapists::data::{TherapistAddRequest, TherapistUpdateRequest};
use crate::domains::therapists::models::{Therapist, UpdateTherapist};
use crate::server::app::AppState;
use crate::server::responses::{ItemResponse, SuccessResponse};

pub fn router() -> Router {
    Router::new()
        .route("/api/therapists", post(create_therapist))
        .route("/api/therapists/paginate", get(paginate_therapists))
        .route(
            "/api/therapists/:id",
            get(get_therapist)
                .put(update_therapist)
                .delete(delete_therapist),
        )
}

async fn create_therapist(
    Extension(state): Extension<AppState>,
    Json(request): Json<TherapistAddRequest>,
) -> Result<(StatusCode, Json<ItemResponse<TherapistId>>), ApiError> {
    let id = onboard_therapist(request, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::new(id))))
}

async fn get_therapist(
    Extension(state): Extension<AppState>,
    Path(id): Path<TherapistId>,
) -> Result<Json<ItemResponse<Therapist>>, ApiError> {
    let therapist = Therapist::find_by_id(id, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(ItemResponse::new(therapist)))
}

async fn paginate_therapists(
    Extension(state): Extension<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ItemResponse<Paged<Therapist>>>, ApiError> {
    let page = page.validate()?;
    let paged = Therapist::find_paginated(&page, &state.db_pool).await?;
    Ok(Json(ItemResponse::new(paged)))
}

async fn update_therapist(
    Extension(state): Extension<AppState>,
    Path(id): Path<TherapistId>,
    Json(request): Json<TherapistUpdateRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let input = UpdateTherapist {
        email: request.email,
        first_name: request.first_name,
        mi: request.mi,
        last_name: request.last_name,
        phone: request.phone,
        avatar_url: request.avatar_url,
        is_active: request.is_active,
        notes: request.notes,
    };

    Therapist::update(id, &input, &state.db_pool)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(SuccessResponse::new()))
}

async fn delete_therapist(
    Extension(state): Extension<AppState>,
    Path(id): Path<TherapistId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let rows_affected = Therapist::delete(id, &state.db_pool).await?;
    if rows_affected == 0 {
        return Err(ApiError::NotFound);
    }
    Ok(Json(SuccessResponse::new()))
}
