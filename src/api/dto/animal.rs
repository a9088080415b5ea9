//! DTOs for animal endpoints.

use serde::Serialize;

use crate::domain::entities::{Animal, AnimalStatus, Sex, ShelterLink, Species};

#[derive(Debug, Serialize)]
pub struct AnimalCard {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub age: String,
    pub sex: Sex,
    pub status: AnimalStatus,
    pub status_label: &'static str,
    pub image_url: String,
}

impl From<&Animal> for AnimalCard {
    fn from(animal: &Animal) -> Self {
        Self {
            id: animal.id.clone(),
            name: animal.name.clone(),
            species: animal.species,
            age: animal.age.clone(),
            sex: animal.sex,
            status: animal.status,
            status_label: animal.status.label(),
            image_url: animal.image_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnimalDetailResponse {
    #[serde(flatten)]
    pub animal: AnimalCard,
    pub description: Option<String>,
    pub shelter: ShelterLink,
}

#[derive(Debug, Serialize)]
pub struct AnimalListResponse {
    pub shelter_id: String,
    pub count: usize,
    pub items: Vec<AnimalCard>,
}
