//! Domain entity representing an animal shelter.

use serde::{Deserialize, Serialize};

/// Number of tags a shelter card shows at most.
pub const MAX_DISPLAYED_TAGS: usize = 3;

/// An organization housing rescued animals.
///
/// Shelters are the primary browsable entity. They are loaded once from the
/// seed document and never modified; the user's favorite flag lives in the
/// session (see [`crate::domain::favorites::FavoriteSet`]), `is_favorite` here
/// only seeds its initial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelter {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub distance: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub today_slots: Option<u32>,
    #[serde(default)]
    pub animal_count: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Shelter {
    /// Creates a shelter with only the required fields set.
    pub fn new(id: impl Into<String>, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            distance: None,
            image_url: String::new(),
            today_slots: None,
            animal_count: None,
            is_favorite: false,
            tags: Vec::new(),
        }
    }

    /// Tags shown on the shelter card, capped at [`MAX_DISPLAYED_TAGS`].
    pub fn displayed_tags(&self) -> &[String] {
        let end = self.tags.len().min(MAX_DISPLAYED_TAGS);
        &self.tags[..end]
    }

    /// Whether the shelter advertises at least one volunteer slot today.
    pub fn has_slots_today(&self) -> bool {
        self.today_slots.is_some_and(|n| n > 0)
    }
}
