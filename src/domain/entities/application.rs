//! Domain entity representing a volunteer's application for a slot.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::SlotType;

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Badge text shown next to the application.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "대기중",
            Self::Approved => "승인됨",
            Self::Rejected => "거절됨",
        }
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// A volunteer's request to fill a volunteer slot.
///
/// The shelter name is denormalized for display; `shelter_id` is the reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub shelter_id: String,
    pub shelter_name: String,
    #[serde(default)]
    pub slot_id: Option<String>,
    pub applicant_id: String,
    pub applicant_name: String,
    pub date: NaiveDate,
    /// "10:00-12:00"
    pub time: String,
    pub slot_type: SlotType,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}
