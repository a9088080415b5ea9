//! Volunteer schedule and slot sign-up.

use serde_json::json;
use std::sync::Arc;

use super::acknowledgement::Acknowledgement;
use super::shelter_service::shelter_not_found;
use crate::domain::entities::VolunteerSlot;
use crate::domain::repositories::{ShelterRepository, SlotRepository};
use crate::domain::schedule::{DateGroup, group_by_date};
use crate::error::AppError;

pub const APPLY_MESSAGE: &str = "봉사 신청이 완료되었습니다!";

pub struct ScheduleService<S: ShelterRepository, L: SlotRepository> {
    shelters: Arc<S>,
    slots: Arc<L>,
}

impl<S: ShelterRepository, L: SlotRepository> ScheduleService<S, L> {
    pub fn new(shelters: Arc<S>, slots: Arc<L>) -> Self {
        Self { shelters, slots }
    }

    /// A shelter's slots grouped by date, first-seen date first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown shelter. A known shelter
    /// without slots yields an empty schedule.
    pub async fn schedule_for_shelter(&self, shelter_id: &str) -> Result<Vec<DateGroup>, AppError> {
        if self.shelters.find_by_id(shelter_id).await?.is_none() {
            return Err(shelter_not_found(shelter_id));
        }

        let slots = self.slots.find_by_shelter(shelter_id).await?;
        Ok(group_by_date(slots))
    }

    pub async fn get_slot(&self, id: &str) -> Result<VolunteerSlot, AppError> {
        self.slots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Slot not found", json!({ "id": id })))
    }

    /// Acknowledges a sign-up for a slot. Nothing is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the slot has no seats left.
    pub async fn apply(&self, slot_id: &str) -> Result<Acknowledgement, AppError> {
        let slot = self.get_slot(slot_id).await?;

        if slot.is_full() {
            return Err(AppError::conflict(
                "모집이 마감된 봉사입니다",
                json!({
                    "slot_id": slot.id,
                    "capacity": slot.capacity,
                    "current_applicants": slot.current_applicants,
                }),
            ));
        }

        tracing::info!(slot = %slot.id, shelter = %slot.shelter_id, "Volunteer application acknowledged");

        Ok(Acknowledgement::new(APPLY_MESSAGE, slot.id))
    }
}
