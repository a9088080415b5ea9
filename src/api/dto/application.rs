//! DTO for volunteer applications.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::entities::{Application, ApplicationStatus};

#[derive(Debug, Serialize)]
pub struct ApplicationItem {
    pub id: String,
    pub shelter_id: String,
    pub shelter_name: String,
    pub applicant_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub slot_type_label: &'static str,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub applied_at: DateTime<Utc>,
    /// Only pending applications can be cancelled.
    pub can_cancel: bool,
}

impl From<&Application> for ApplicationItem {
    fn from(app: &Application) -> Self {
        Self {
            id: app.id.clone(),
            shelter_id: app.shelter_id.clone(),
            shelter_name: app.shelter_name.clone(),
            applicant_name: app.applicant_name.clone(),
            date: app.date,
            time: app.time.clone(),
            slot_type_label: app.slot_type.label(),
            status: app.status,
            status_label: app.status.label(),
            applied_at: app.applied_at,
            can_cancel: app.status.is_pending(),
        }
    }
}
