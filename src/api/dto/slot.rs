//! DTOs for volunteer slots and the grouped schedule.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{SlotType, VolunteerSlot};
use crate::domain::schedule::{DateGroup, date_badge};

#[derive(Debug, Serialize)]
pub struct SlotItem {
    pub id: String,
    pub shelter_id: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub time: String,
    pub slot_type: SlotType,
    pub slot_type_label: &'static str,
    pub capacity: u32,
    pub current_applicants: u32,
    pub remaining: u32,
    pub is_full: bool,
    pub description: String,
}

impl From<&VolunteerSlot> for SlotItem {
    fn from(slot: &VolunteerSlot) -> Self {
        Self {
            id: slot.id.clone(),
            shelter_id: slot.shelter_id.clone(),
            date: slot.date,
            date_label: date_badge(slot.date),
            time: slot.time_range(),
            slot_type: slot.slot_type,
            slot_type_label: slot.slot_type.label(),
            capacity: slot.capacity,
            current_applicants: slot.current_applicants,
            remaining: slot.remaining(),
            is_full: slot.is_full(),
            description: slot.description.clone(),
        }
    }
}

/// One calendar day of the schedule.
#[derive(Debug, Serialize)]
pub struct DateGroupItem {
    pub date: NaiveDate,
    pub label: String,
    pub slots: Vec<SlotItem>,
}

impl From<&DateGroup> for DateGroupItem {
    fn from(group: &DateGroup) -> Self {
        Self {
            date: group.date,
            label: group.label(),
            slots: group.slots.iter().map(SlotItem::from).collect(),
        }
    }
}

impl DateGroupItem {
    pub fn list(groups: &[DateGroup]) -> Vec<Self> {
        groups.iter().map(Self::from).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub shelter_id: String,
    pub groups: Vec<DateGroupItem>,
}
