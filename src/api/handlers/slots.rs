//! Handlers for volunteer slots.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::slot::SlotItem;
use crate::application::services::Acknowledgement;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/slots/{id}`
pub async fn slot_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SlotItem>, AppError> {
    let slot = state.schedule_service.get_slot(&id).await?;
    Ok(Json(SlotItem::from(&slot)))
}

/// Acknowledges a sign-up. The slot's applicant count is not changed.
///
/// # Endpoint
///
/// `POST /api/slots/{id}/apply`
///
/// # Errors
///
/// Returns 409 when the slot is full.
pub async fn apply_slot_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgement>, AppError> {
    let ack = state.schedule_service.apply(&id).await?;
    Ok(Json(ack))
}
