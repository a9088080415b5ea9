//! Handler for animal detail.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::animal::{AnimalCard, AnimalDetailResponse};
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/animals/{id}`
///
/// The `shelter` field is `resolved`, `unresolved` (the animal names a
/// shelter that does not exist) or `none`.
pub async fn animal_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnimalDetailResponse>, AppError> {
    let view = state.shelter_service.get_animal(&id).await?;

    Ok(Json(AnimalDetailResponse {
        animal: AnimalCard::from(&view.animal),
        description: view.animal.description,
        shelter: view.shelter,
    }))
}
