//! Handlers for "my page".

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::api::dto::application::ApplicationItem;
use crate::api::dto::auth::AccountSummary;
use crate::api::dto::my::{MyContent, MyParams, MyResponse, MyTab, SettingsView};
use crate::api::dto::shelter::ShelterCard;
use crate::application::services::Acknowledgement;
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/my?tab=applications|favorites|settings`
pub async fn my_page_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<MyParams>,
) -> Result<Json<MyResponse>, AppError> {
    let session = &ctx.session;

    let content = match params.tab {
        MyTab::Applications => {
            let apps = state
                .application_service
                .my_applications(ctx.account_id())
                .await?;
            MyContent::Applications(apps.iter().map(ApplicationItem::from).collect())
        }
        MyTab::Favorites => {
            let shelters = state.preference_service.favorites(&ctx).await?;
            MyContent::Favorites(ShelterCard::list(&shelters, &session.favorites))
        }
        MyTab::Settings => MyContent::Settings(SettingsView {
            location: session.picker.location().to_string(),
            profile: session.profile.clone(),
            favorite_count: session.favorites.len(),
        }),
    };

    Ok(Json(MyResponse {
        account: AccountSummary::from(session),
        tab: params.tab,
        content,
    }))
}

/// # Endpoint
///
/// `POST /api/my/applications/{id}/cancel`
///
/// # Errors
///
/// - 404 when the application is not the caller's
/// - 409 when it is no longer pending
pub async fn cancel_application_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgement>, AppError> {
    let ack = state
        .application_service
        .cancel(ctx.account_id(), &id)
        .await?;
    Ok(Json(ack))
}
