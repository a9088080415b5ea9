//! DTOs for shelter list, detail and favorite endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use super::animal::AnimalCard;
use super::post::PostItem;
use super::slot::DateGroupItem;
use crate::domain::entities::Shelter;
use crate::domain::favorites::FavoriteSet;
use crate::domain::search::ShelterFilter;

/// Query parameters of `GET /api/shelters`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ShelterSearchParams {
    #[serde(default)]
    pub q: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub filter: Option<ShelterFilter>,
}

/// Shelter as shown on list cards. `is_favorite` reflects the caller's session.
#[derive(Debug, Serialize)]
pub struct ShelterCard {
    pub id: String,
    pub name: String,
    pub address: String,
    pub distance: Option<String>,
    pub image_url: String,
    pub today_slots: Option<u32>,
    pub animal_count: Option<u32>,
    pub is_favorite: bool,
    pub tags: Vec<String>,
}

impl ShelterCard {
    pub fn new(shelter: &Shelter, favorites: &FavoriteSet) -> Self {
        Self {
            id: shelter.id.clone(),
            name: shelter.name.clone(),
            address: shelter.address.clone(),
            distance: shelter.distance.clone(),
            image_url: shelter.image_url.clone(),
            today_slots: shelter.today_slots,
            animal_count: shelter.animal_count,
            is_favorite: favorites.contains(&shelter.id),
            tags: shelter.displayed_tags().to_vec(),
        }
    }

    pub fn list(shelters: &[Shelter], favorites: &FavoriteSet) -> Vec<Self> {
        shelters.iter().map(|s| Self::new(s, favorites)).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct FilterChip {
    pub id: String,
    pub label: &'static str,
    pub selected: bool,
}

impl FilterChip {
    /// Every chip, with `selected` marking the active one.
    pub fn all(active: ShelterFilter) -> Vec<Self> {
        ShelterFilter::ALL
            .into_iter()
            .map(|f| Self {
                id: f.to_string(),
                label: f.label(),
                selected: f == active,
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct ShelterListResponse {
    pub query: String,
    pub filter: ShelterFilter,
    pub filters: Vec<FilterChip>,
    pub count: usize,
    pub items: Vec<ShelterCard>,
}

#[derive(Debug, Serialize)]
pub struct ShelterDetailResponse {
    pub shelter: ShelterCard,
    pub animals: Vec<AnimalCard>,
    pub slot_count: usize,
    pub schedule: Vec<DateGroupItem>,
    pub posts: Vec<PostItem>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub shelter_id: String,
    pub is_favorite: bool,
}
