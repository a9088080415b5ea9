//! DTOs for the shelter admin dashboard.

use serde::{Deserialize, Serialize};

use super::animal::AnimalCard;
use super::application::ApplicationItem;
use super::post::PostItem;
use super::slot::DateGroupItem;
use crate::application::services::DashboardOverview;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Applications,
    Schedule,
    Animals,
    Posts,
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminParams {
    #[serde(default)]
    pub tab: AdminTab,
}

#[derive(Debug, Serialize)]
pub struct OverviewItem {
    pub shelter_id: String,
    pub shelter_name: String,
    pub pending_applications: usize,
    pub slots: usize,
    pub animals_in_care: usize,
    pub posts: usize,
}

impl From<&DashboardOverview> for OverviewItem {
    fn from(o: &DashboardOverview) -> Self {
        Self {
            shelter_id: o.shelter.id.clone(),
            shelter_name: o.shelter.name.clone(),
            pending_applications: o.pending_applications,
            slots: o.slots,
            animals_in_care: o.animals_in_care,
            posts: o.posts,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub overview: OverviewItem,
    pub tab: AdminTab,
    #[serde(flatten)]
    pub content: AdminContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminContent {
    Applications(Vec<ApplicationItem>),
    Schedule(Vec<DateGroupItem>),
    Animals(Vec<AnimalCard>),
    Posts(Vec<PostItem>),
}
