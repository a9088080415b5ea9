//! Domain entity representing a volunteer time slot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of volunteer work offered in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotType {
    Walk,
    Bath,
    Clean,
    Other,
}

impl SlotType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Walk => "산책 봉사",
            Self::Bath => "목욕 봉사",
            Self::Clean => "청소 봉사",
            Self::Other => "기타 봉사",
        }
    }
}

/// A scheduled time window at a shelter accepting a bounded number of volunteers.
///
/// `current_applicants <= capacity` holds for every slot in the store; the seed
/// loader rejects documents that break it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerSlot {
    pub id: String,
    pub shelter_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub capacity: u32,
    pub current_applicants: u32,
    pub slot_type: SlotType,
    pub description: String,
}

impl VolunteerSlot {
    /// Seats still open. Saturates at zero.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.current_applicants)
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// "10:00 - 12:00"
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}
