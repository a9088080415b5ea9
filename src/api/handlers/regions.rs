//! Handlers for region data and the location picker.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::dto::region::{
    DistrictsResponse, LocationResponse, ProvincesResponse, SelectDistrictRequest,
    SelectProvinceRequest,
};
use crate::domain::session::AuthContext;
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /api/regions`
pub async fn province_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ProvincesResponse>, AppError> {
    let provinces = state.preference_service.provinces().await?;
    Ok(Json(ProvincesResponse { provinces }))
}

/// # Endpoint
///
/// `GET /api/regions/{province}`
pub async fn district_list_handler(
    State(state): State<AppState>,
    Path(province): Path<String>,
) -> Result<Json<DistrictsResponse>, AppError> {
    let districts = state.preference_service.districts(&province).await?;
    Ok(Json(DistrictsResponse {
        province,
        districts,
    }))
}

/// Current location and picker state.
///
/// # Endpoint
///
/// `GET /api/location`
pub async fn location_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Json<LocationResponse> {
    let picker = state.preference_service.picker(&ctx);
    Json(LocationResponse::from(&picker))
}

/// Reopens the picker on the current province.
///
/// # Endpoint
///
/// `POST /api/location/open`
pub async fn open_picker_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
) -> Result<Json<LocationResponse>, AppError> {
    let picker = state.preference_service.open_picker(&ctx).await?;
    Ok(Json(LocationResponse::from(&picker)))
}

/// Highlights a province; the location itself is unchanged.
///
/// # Endpoint
///
/// `PUT /api/location/province`
///
/// # Errors
///
/// - 404 for an unknown province
/// - 409 when the picker is closed
pub async fn select_province_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(payload): Json<SelectProvinceRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    payload.validate()?;

    let picker = state
        .preference_service
        .select_province(&ctx, &payload.province)
        .await?;
    Ok(Json(LocationResponse::from(&picker)))
}

/// Chooses a district of the highlighted province and closes the picker.
///
/// # Endpoint
///
/// `PUT /api/location/district`
///
/// # Errors
///
/// - 400 when the district belongs to another province
/// - 409 when the picker is closed
pub async fn select_district_handler(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(payload): Json<SelectDistrictRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    payload.validate()?;

    let picker = state
        .preference_service
        .select_district(&ctx, &payload.district)
        .await?;
    Ok(Json(LocationResponse::from(&picker)))
}
