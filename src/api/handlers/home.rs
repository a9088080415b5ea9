//! Handler for the home screen.

use axum::{Extension, Json, extract::State};

use crate::api::dto::animal::AnimalCard;
use crate::api::dto::home::HomeResponse;
use crate::api::dto::shelter::ShelterCard;
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// Nearby shelters and popular animals.
///
/// # Endpoint
///
/// `GET /api/home`
pub async fn home_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<HomeResponse>, AppError> {
    let home = state.shelter_service.home().await?;
    let session = &ctx.session;

    let greeting_name = session
        .profile
        .as_ref()
        .map_or_else(|| session.account_name.clone(), |p| p.name.clone());

    Ok(Json(HomeResponse {
        greeting_name,
        location: session.picker.location().to_string(),
        nearby_shelters: ShelterCard::list(&home.nearby, &session.favorites),
        popular_animals: home.popular.iter().map(AnimalCard::from).collect(),
    }))
}
