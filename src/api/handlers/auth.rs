//! Handlers for sign-in and sign-out.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::auth::{AccountSummary, LoginRequest, LoginResponse};
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// Signs in with email and password.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// - 400 for a malformed email or empty password
/// - 401 for wrong credentials
/// - 504 when the sign-in call times out
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        account: AccountSummary::from(&outcome.session),
        token: outcome.token,
    }))
}

/// Social sign-in (`google`, `kakao`). Always 503: no provider is wired up.
///
/// # Endpoint
///
/// `POST /api/auth/social/{provider}`
pub async fn social_login_handler(
    State(state): State<AppState>,
    Path(provider): Path<String>,
) -> Result<Json<LoginResponse>, AppError> {
    let outcome = state.auth_service.social_login(&provider).await?;

    Ok(Json(LoginResponse {
        account: AccountSummary::from(&outcome.session),
        token: outcome.token,
    }))
}

/// # Endpoint
///
/// `POST /api/auth/logout`
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<StatusCode, AppError> {
    state.auth_service.logout(&ctx).await?;
    Ok(StatusCode::NO_CONTENT)
}
