//! DTO for the home screen.

use serde::Serialize;

use super::animal::AnimalCard;
use super::shelter::ShelterCard;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub greeting_name: String,
    pub location: String,
    pub nearby_shelters: Vec<ShelterCard>,
    pub popular_animals: Vec<AnimalCard>,
}
