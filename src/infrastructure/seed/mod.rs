//! Seed document: the static data every screen reads.
//!
//! The default document is compiled into the binary; `SEED_PATH` points the
//! service at another file with the same shape. A document is validated once
//! at load and never written afterwards.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

use crate::domain::entities::{
    Account, Animal, Application, Post, RegionMap, Role, Shelter, VolunteerSlot,
};

const EMBEDDED_SEED: &str = include_str!("../../../data/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed seed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate {collection} id '{id}'")]
    DuplicateId { collection: &'static str, id: String },
    #[error("{collection} '{id}' references unknown shelter '{shelter_id}'")]
    UnknownShelter {
        collection: &'static str,
        id: String,
        shelter_id: String,
    },
    #[error("application '{id}' references unknown slot '{slot_id}'")]
    UnknownSlot { id: String, slot_id: String },
    #[error("slot '{id}' has {current} applicants but capacity {capacity}")]
    OverCapacity { id: String, current: u32, capacity: u32 },
    #[error("region map is empty")]
    EmptyRegions,
    #[error("province '{0}' has no districts")]
    EmptyProvince(String),
    #[error("province '{0}' appears more than once")]
    DuplicateProvince(String),
    #[error("shelter admin '{0}' does not manage a known shelter")]
    AdminWithoutShelter(String),
    #[error("duplicate account email '{0}'")]
    DuplicateEmail(String),
}

/// All seed collections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    pub regions: RegionMap,
    #[serde(default)]
    pub shelters: Vec<Shelter>,
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub slots: Vec<VolunteerSlot>,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl SeedData {
    /// The document compiled into the binary.
    ///
    /// # Errors
    ///
    /// Fails only if the embedded document is malformed or inconsistent.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Reads, parses and validates a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads from `path` when given, otherwise the embedded document.
    pub fn load(path: Option<&str>) -> Result<Self, SeedError> {
        match path {
            Some(p) => {
                tracing::info!(path = p, "Loading seed file");
                Self::from_path(p)
            }
            None => Self::embedded(),
        }
    }

    /// Checks referential integrity and the slot capacity invariant.
    ///
    /// Animals pointing at an unknown shelter are allowed; they resolve to
    /// an unresolved link and are only logged.
    pub fn validate(&self) -> Result<(), SeedError> {
        unique_ids("shelter", self.shelters.iter().map(|s| s.id.as_str()))?;
        unique_ids("animal", self.animals.iter().map(|a| a.id.as_str()))?;
        unique_ids("slot", self.slots.iter().map(|s| s.id.as_str()))?;
        unique_ids("application", self.applications.iter().map(|a| a.id.as_str()))?;
        unique_ids("post", self.posts.iter().map(|p| p.id.as_str()))?;
        unique_ids("account", self.accounts.iter().map(|a| a.id.as_str()))?;

        let shelter_ids: HashSet<&str> = self.shelters.iter().map(|s| s.id.as_str()).collect();
        let slot_ids: HashSet<&str> = self.slots.iter().map(|s| s.id.as_str()).collect();

        for slot in &self.slots {
            if !shelter_ids.contains(slot.shelter_id.as_str()) {
                return Err(SeedError::UnknownShelter {
                    collection: "slot",
                    id: slot.id.clone(),
                    shelter_id: slot.shelter_id.clone(),
                });
            }
            if slot.current_applicants > slot.capacity {
                return Err(SeedError::OverCapacity {
                    id: slot.id.clone(),
                    current: slot.current_applicants,
                    capacity: slot.capacity,
                });
            }
        }

        for app in &self.applications {
            if !shelter_ids.contains(app.shelter_id.as_str()) {
                return Err(SeedError::UnknownShelter {
                    collection: "application",
                    id: app.id.clone(),
                    shelter_id: app.shelter_id.clone(),
                });
            }
            if let Some(slot_id) = &app.slot_id
                && !slot_ids.contains(slot_id.as_str())
            {
                return Err(SeedError::UnknownSlot {
                    id: app.id.clone(),
                    slot_id: slot_id.clone(),
                });
            }
        }

        for post in &self.posts {
            if let Some(shelter_id) = &post.shelter_id
                && !shelter_ids.contains(shelter_id.as_str())
            {
                return Err(SeedError::UnknownShelter {
                    collection: "post",
                    id: post.id.clone(),
                    shelter_id: shelter_id.clone(),
                });
            }
        }

        for animal in &self.animals {
            if let Some(shelter_id) = &animal.shelter_id
                && !shelter_ids.contains(shelter_id.as_str())
            {
                tracing::warn!(
                    animal = %animal.id,
                    shelter = %shelter_id,
                    "Animal references an unknown shelter"
                );
            }
        }

        self.validate_regions()?;
        self.validate_accounts(&shelter_ids)?;

        Ok(())
    }

    fn validate_regions(&self) -> Result<(), SeedError> {
        if self.regions.is_empty() {
            return Err(SeedError::EmptyRegions);
        }

        let mut seen = HashSet::new();
        for region in self.regions.regions() {
            if !seen.insert(region.province.as_str()) {
                return Err(SeedError::DuplicateProvince(region.province.clone()));
            }
            if region.districts.is_empty() {
                return Err(SeedError::EmptyProvince(region.province.clone()));
            }
        }

        Ok(())
    }

    fn validate_accounts(&self, shelter_ids: &HashSet<&str>) -> Result<(), SeedError> {
        let mut emails = HashSet::new();
        for account in &self.accounts {
            if !emails.insert(account.email.to_lowercase()) {
                return Err(SeedError::DuplicateEmail(account.email.clone()));
            }

            if account.role == Role::ShelterAdmin {
                let manages_known = account
                    .shelter_id
                    .as_deref()
                    .is_some_and(|id| shelter_ids.contains(id));
                if !manages_known {
                    return Err(SeedError::AdminWithoutShelter(account.id.clone()));
                }
            }
        }

        Ok(())
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), SeedError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SeedError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
