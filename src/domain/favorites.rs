//! Per-session favorite shelters.

use std::collections::HashSet;

use crate::domain::entities::Shelter;

/// Set of shelter ids the user marked as favorite.
///
/// Lives only as long as the session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    /// Initial favorites taken from the seed's `is_favorite` flags.
    pub fn from_seed<'a>(shelters: impl IntoIterator<Item = &'a Shelter>) -> Self {
        Self {
            ids: shelters
                .into_iter()
                .filter(|s| s.is_favorite)
                .map(|s| s.id.clone())
                .collect(),
        }
    }

    /// Flips the flag for one shelter and returns the new value.
    pub fn toggle(&mut self, shelter_id: &str) -> bool {
        if self.ids.remove(shelter_id) {
            false
        } else {
            self.ids.insert(shelter_id.to_string());
            true
        }
    }

    pub fn contains(&self, shelter_id: &str) -> bool {
        self.ids.contains(shelter_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite shelters from `shelters`, keeping their order.
    pub fn select<'a>(&self, shelters: &'a [Shelter]) -> Vec<&'a Shelter> {
        shelters.iter().filter(|s| self.contains(&s.id)).collect()
    }
}
