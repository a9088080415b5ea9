//! Domain entity representing a sheltered animal.

use serde::{Deserialize, Serialize};

use super::Shelter;

/// Animal species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Other,
}

/// Animal sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Whether the animal is still in the shelter's care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalStatus {
    Care,
    Adopted,
}

impl AnimalStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Care => "보호중",
            Self::Adopted => "입양완료",
        }
    }
}

/// An animal housed by a shelter.
///
/// The owning shelter is referenced by identifier. The reference is not checked
/// at load time; use [`Animal::resolve_shelter`] to find out whether it points
/// at a known shelter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub name: String,
    pub species: Species,
    /// Free-text age ("2살", "6개월").
    pub age: String,
    pub sex: Sex,
    pub status: AnimalStatus,
    pub image_url: String,
    #[serde(default)]
    pub shelter_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of resolving an animal's shelter reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ShelterLink {
    Resolved { id: String, name: String },
    /// The animal names a shelter id that is not in the store.
    Unresolved { id: String },
    None,
}

impl Animal {
    /// Whether this animal belongs to the shelter with the given id.
    pub fn belongs_to(&self, shelter_id: &str) -> bool {
        self.shelter_id.as_deref() == Some(shelter_id)
    }

    /// Resolves the shelter reference against a shelter collection.
    pub fn resolve_shelter<'a, I>(&self, shelters: I) -> ShelterLink
    where
        I: IntoIterator<Item = &'a Shelter>,
    {
        let Some(id) = self.shelter_id.as_deref() else {
            return ShelterLink::None;
        };

        shelters
            .into_iter()
            .find(|s| s.id == id)
            .map(|s| ShelterLink::Resolved {
                id: s.id.clone(),
                name: s.name.clone(),
            })
            .unwrap_or_else(|| ShelterLink::Unresolved { id: id.to_string() })
    }
}
