//! Schedule-availability routes
//!
//! Mutations require an authenticated actor (stamped as creator/modifier);
//! reads are open to any caller with API access.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::common::{ApiError, PageRequest, Paged, ScheduleAvailabilityId, UserId};
use crate::domains::schedule_availabilities::actions;
use crate::domains::schedule_availabilities::data::{
    ScheduleAvailabilityAddRequest, ScheduleAvailabilityUpdateRequest,
};
use crate::domains::schedule_availabilities::models::ScheduleAvailability;
use crate::server::app::AppState;
use crate::server::middleware::AuthContext;
use crate::server::responses::{ItemResponse, ItemsResponse, SuccessResponse};

pub fn router() -> Router {
    Router::new()
        .route(
            "/api/scheduleavailabilities",
            post(create_schedule_availability).get(list_schedule_availabilities),
        )
        .route(
            "/api/scheduleavailabilities/paginate",
            get(paginate_schedule_availabilities),
        )
        .route(
            "/api/scheduleavailabilities/createdBy",
            get(paginate_by_created_by),
        )
        .route(
            "/api/scheduleavailabilities/:id",
            get(get_schedule_availability)
                .put(update_schedule_availability)
                .delete(delete_schedule_availability),
        )
}

async fn create_schedule_availability(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(request): Json<ScheduleAvailabilityAddRequest>,
) -> Result<(StatusCode, Json<ItemResponse<ScheduleAvailabilityId>>), ApiError> {
    let actor = auth.actor()?;
    let id = actions::add_schedule_availability(&request, actor, &state.db_pool).await?;
    Ok((StatusCode::CREATED, Json(ItemResponse::new(id))))
}

async fn update_schedule_availability(
    Extension(state): Extension<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<ScheduleAvailabilityId>,
    Json(request): Json<ScheduleAvailabilityUpdateRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let actor = auth.actor()?;
    actions::update_schedule_availability(id, &request, actor, &state.db_pool).await?;
    Ok(Json(SuccessResponse::new()))
}

async fn get_schedule_availability(
    Extension(state): Extension<AppState>,
    Path(id): Path<ScheduleAvailabilityId>,
) -> Result<Json<ItemResponse<ScheduleAvailability>>, ApiError> {
    let availability = actions::get_schedule_availability(id, &state.db_pool).await?;
    Ok(Json(ItemResponse::new(availability)))
}

async fn paginate_schedule_availabilities(
    Extension(state): Extension<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<ItemResponse<Paged<ScheduleAvailability>>>, ApiError> {
    let paged = actions::get_all_schedule_availabilities(page, &state.db_pool).await?;
    Ok(Json(ItemResponse::new(paged)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedByQuery {
    page_index: i32,
    page_size: i32,
    created_by: i32,
}

async fn paginate_by_created_by(
    Extension(state): Extension<AppState>,
    Query(query): Query<CreatedByQuery>,
) -> Result<Json<ItemResponse<Paged<ScheduleAvailability>>>, ApiError> {
    let page = PageRequest {
        page_index: query.page_index,
        page_size: query.page_size,
    };
    let paged = actions::get_schedule_availabilities_by_creator(
        page,
        UserId::from_raw(query.created_by),
        &state.db_pool,
    )
    .await?;
    Ok(Json(ItemResponse::new(paged)))
}

async fn delete_schedule_availability(
    Extension(state): Extension<AppState>,
    Path(id): Path<ScheduleAvailabilityId>,
) -> Result<Json<SuccessResponse>, ApiError> {
    actions::delete_schedule_availability(id, &state.db_pool).await?;
    Ok(Json(SuccessResponse::new()))
}

async fn list_schedule_availabilities(
    Extension(state): Extension<AppState>,
) -> Result<Json<ItemsResponse<ScheduleAvailability>>, ApiError> {
    let list = actions::list_schedule_availabilities(&state.db_pool).await?;
    Ok(Json(ItemsResponse::new(list)))
}
