//! Handlers for the shelter admin dashboard.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::api::dto::admin::{AdminContent, AdminParams, AdminResponse, AdminTab, OverviewItem};
use crate::api::dto::animal::AnimalCard;
use crate::api::dto::application::ApplicationItem;
use crate::api::dto::post::PostItem;
use crate::api::dto::slot::DateGroupItem;
use crate::api::middleware::auth::require_shelter_admin;
use crate::application::services::Acknowledgement;
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/admin?tab=applications|schedule|animals|posts`
///
/// # Errors
///
/// Returns 403 unless the caller is a shelter admin.
pub async fn dashboard_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Query(params): Query<AdminParams>,
) -> Result<Json<AdminResponse>, AppError> {
    let shelter_id = require_shelter_admin(&ctx)?;
    let dashboard = &state.dashboard_service;

    let overview = dashboard.overview(shelter_id).await?;

    let content = match params.tab {
        AdminTab::Applications => {
            let apps = dashboard.applications(shelter_id).await?;
            AdminContent::Applications(apps.iter().map(ApplicationItem::from).collect())
        }
        AdminTab::Schedule => {
            let groups = dashboard.schedule(shelter_id).await?;
            AdminContent::Schedule(DateGroupItem::list(&groups))
        }
        AdminTab::Animals => {
            let animals = dashboard.animals(shelter_id).await?;
            AdminContent::Animals(animals.iter().map(AnimalCard::from).collect())
        }
        AdminTab::Posts => {
            let posts = dashboard.posts(shelter_id).await?;
            AdminContent::Posts(posts.iter().map(PostItem::from).collect())
        }
    };

    Ok(Json(AdminResponse {
        overview: OverviewItem::from(&overview),
        tab: params.tab,
        content,
    }))
}

/// # Endpoint
///
/// `POST /api/admin/applications/{id}/approve`
pub async fn approve_application_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgement>, AppError> {
    let shelter_id = require_shelter_admin(&ctx)?;
    let ack = state.application_service.approve(shelter_id, &id).await?;
    Ok(Json(ack))
}

/// # Endpoint
///
/// `POST /api/admin/applications/{id}/reject`
pub async fn reject_application_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<String>,
) -> Result<Json<Acknowledgement>, AppError> {
    let shelter_id = require_shelter_admin(&ctx)?;
    let ack = state.application_service.reject(shelter_id, &id).await?;
    Ok(Json(ack))
}
