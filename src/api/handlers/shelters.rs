//! Handlers for shelter list, detail, schedule and favorites.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::api::dto::animal::{AnimalCard, AnimalListResponse};
use crate::api::dto::post::PostItem;
use crate::api::dto::shelter::{
    FavoriteResponse, FilterChip, ShelterCard, ShelterDetailResponse, ShelterListResponse,
    ShelterSearchParams,
};
use crate::api::dto::slot::{DateGroupItem, ScheduleResponse};
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// Searches shelters by name or address, then applies a filter chip.
///
/// # Endpoint
///
/// `GET /api/shelters?q=&filter=all|today|walk|bath|clean`
///
/// An empty or missing `q` lists every shelter. No match is an empty list.
pub async fn shelter_list_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<ShelterSearchParams>,
) -> Result<Json<ShelterListResponse>, AppError> {
    let query = params.q.unwrap_or_default();
    let filter = params.filter.unwrap_or_default();

    let shelters = state.shelter_service.search(&query, filter).await?;
    let items = ShelterCard::list(&shelters, &ctx.session.favorites);

    Ok(Json(ShelterListResponse {
        query,
        filter,
        filters: FilterChip::all(filter),
        count: items.len(),
        items,
    }))
}

/// # Endpoint
///
/// `GET /api/shelters/{id}`
///
/// # Errors
///
/// Returns 404 for an unknown shelter.
pub async fn shelter_detail_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<ShelterDetailResponse>, AppError> {
    let detail = state.shelter_service.detail(&id).await?;

    Ok(Json(ShelterDetailResponse {
        shelter: ShelterCard::new(&detail.shelter, &ctx.session.favorites),
        animals: detail.animals.iter().map(AnimalCard::from).collect(),
        slot_count: detail.slot_count,
        schedule: DateGroupItem::list(&detail.schedule),
        posts: detail.posts.iter().map(PostItem::from).collect(),
    }))
}

/// # Endpoint
///
/// `GET /api/shelters/{id}/schedule`
pub async fn shelter_schedule_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let groups = state.schedule_service.schedule_for_shelter(&id).await?;

    Ok(Json(ScheduleResponse {
        shelter_id: id,
        groups: DateGroupItem::list(&groups),
    }))
}

/// # Endpoint
///
/// `GET /api/shelters/{id}/animals`
pub async fn shelter_animals_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnimalListResponse>, AppError> {
    let animals = state.shelter_service.shelter_animals(&id).await?;

    Ok(Json(AnimalListResponse {
        shelter_id: id,
        count: animals.len(),
        items: animals.iter().map(AnimalCard::from).collect(),
    }))
}

/// Flips the caller's favorite flag for one shelter.
///
/// # Endpoint
///
/// `POST /api/shelters/{id}/favorite`
pub async fn toggle_favorite_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<FavoriteResponse>, AppError> {
    let is_favorite = state.preference_service.toggle_favorite(&ctx, &id).await?;

    Ok(Json(FavoriteResponse {
        shelter_id: id,
        is_favorite,
    }))
}
