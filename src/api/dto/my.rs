//! DTOs for the "my page" tabs.

use serde::{Deserialize, Serialize};

use super::application::ApplicationItem;
use super::auth::AccountSummary;
use super::shelter::ShelterCard;
use crate::domain::entities::Profile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MyTab {
    #[default]
    Applications,
    Favorites,
    Settings,
}

#[derive(Debug, Default, Deserialize)]
pub struct MyParams {
    #[serde(default)]
    pub tab: MyTab,
}

#[derive(Debug, Serialize)]
pub struct MyResponse {
    pub account: AccountSummary,
    pub tab: MyTab,
    #[serde(flatten)]
    pub content: MyContent,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MyContent {
    Applications(Vec<ApplicationItem>),
    Favorites(Vec<ShelterCard>),
    Settings(SettingsView),
}

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub location: String,
    pub profile: Option<Profile>,
    pub favorite_count: usize,
}
