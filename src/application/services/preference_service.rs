//! Per-session preferences: favorite shelters and the location picker.
//!
//! Every change goes through [`SessionRepository::update`], so it applies to
//! the stored session rather than the snapshot the request was authenticated
//! with.

use serde_json::json;
use std::sync::Arc;

use super::shelter_service::shelter_not_found;
use crate::domain::entities::Shelter;
use crate::domain::region_picker::{RegionError, RegionPicker};
use crate::domain::repositories::{RegionRepository, SessionRepository, ShelterRepository};
use crate::domain::session::{AuthContext, Session};
use crate::error::AppError;

pub struct PreferenceService<S, R, X>
where
    S: ShelterRepository,
    R: RegionRepository,
    X: SessionRepository,
{
    shelters: Arc<S>,
    regions: Arc<R>,
    sessions: Arc<X>,
}

impl<S, R, X> PreferenceService<S, R, X>
where
    S: ShelterRepository,
    R: RegionRepository,
    X: SessionRepository,
{
    pub fn new(shelters: Arc<S>, regions: Arc<R>, sessions: Arc<X>) -> Self {
        Self {
            shelters,
            regions,
            sessions,
        }
    }

    /// Flips one shelter's favorite flag and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown shelter.
    pub async fn toggle_favorite(&self, ctx: &AuthContext, shelter_id: &str) -> Result<bool, AppError> {
        if self.shelters.find_by_id(shelter_id).await?.is_none() {
            return Err(shelter_not_found(shelter_id));
        }

        let id = shelter_id.to_string();
        let session = self
            .sessions
            .update(
                &ctx.token_hash,
                Box::new(move |session: &mut Session| -> Result<(), AppError> {
                    session.favorites.toggle(&id);
                    Ok(())
                }),
            )
            .await?;
        let favorite = session.favorites.contains(shelter_id);

        metrics::counter!("favorite_toggles_total").increment(1);
        tracing::debug!(shelter = shelter_id, favorite, "Favorite toggled");

        Ok(favorite)
    }

    /// Favorite shelters in seed order.
    pub async fn favorites(&self, ctx: &AuthContext) -> Result<Vec<Shelter>, AppError> {
        let shelters = self.shelters.list().await?;
        Ok(ctx
            .session
            .favorites
            .select(&shelters)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn picker(&self, ctx: &AuthContext) -> RegionPicker {
        ctx.session.picker.clone()
    }

    /// Reopens the picker on the current location's province.
    pub async fn open_picker(&self, ctx: &AuthContext) -> Result<RegionPicker, AppError> {
        self.update_picker(ctx, |picker| {
            picker.reopen();
            Ok(())
        })
        .await
    }

    pub async fn select_province(
        &self,
        ctx: &AuthContext,
        province: &str,
    ) -> Result<RegionPicker, AppError> {
        let province = province.to_string();
        self.update_picker(ctx, move |picker| {
            picker.select_province(&province)?;
            Ok(())
        })
        .await
    }

    /// Finalizes the location and closes the picker.
    pub async fn select_district(
        &self,
        ctx: &AuthContext,
        district: &str,
    ) -> Result<RegionPicker, AppError> {
        let district = district.to_string();
        let picker = self
            .update_picker(ctx, move |picker| {
                picker.select_district(&district)?;
                Ok(())
            })
            .await?;

        tracing::debug!(location = %picker.location(), "Location finalized");
        Ok(picker)
    }

    pub async fn provinces(&self) -> Result<Vec<String>, AppError> {
        let regions = self.regions.regions().await?;
        Ok(regions.provinces().map(str::to_string).collect())
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown province.
    pub async fn districts(&self, province: &str) -> Result<Vec<String>, AppError> {
        let regions = self.regions.regions().await?;
        regions
            .districts(province)
            .map(<[String]>::to_vec)
            .ok_or_else(|| AppError::not_found("Province not found", json!({ "province": province })))
    }

    async fn update_picker(
        &self,
        ctx: &AuthContext,
        f: impl FnOnce(&mut RegionPicker) -> Result<(), RegionError> + Send + 'static,
    ) -> Result<RegionPicker, AppError> {
        let session = self
            .sessions
            .update(
                &ctx.token_hash,
                Box::new(move |session: &mut Session| {
                    f(&mut session.picker).map_err(AppError::from)
                }),
            )
            .await?;
        Ok(session.picker)
    }
}
