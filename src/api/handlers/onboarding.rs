//! Handler for the onboarding form.

use axum::{Extension, Json, extract::State};

use crate::api::dto::onboarding::{OnboardingRequest, OnboardingResponse};
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `POST /api/onboarding`
///
/// # Errors
///
/// Returns 400 with the first failing check: consents, then phone, then name.
pub async fn onboarding_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(payload): Json<OnboardingRequest>,
) -> Result<Json<OnboardingResponse>, AppError> {
    let profile = state
        .onboarding_service
        .complete(&ctx, payload.into())
        .await?;

    Ok(Json(OnboardingResponse {
        role_label: profile.role.label(),
        profile,
    }))
}
