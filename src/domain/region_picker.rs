//! Two-level location picker: province first, then district.
//!
//! ```text
//!            select_province(p')                 select_district(d)
//!   ┌──────────────────────────────┐     ProvinceChosen(p) ─────────▶ LocationFinalized(p, d)
//!   └──▶ ProvinceChosen(p) ────────┘              ▲                            │
//!                                                 └──────── reopen() ──────────┘
//! ```
//!
//! The district list always belongs to the highlighted province. The visible
//! location only changes when a district is chosen.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::entities::RegionMap;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("unknown province '{0}'")]
    UnknownProvince(String),
    #[error("district '{district}' is not part of '{province}'")]
    UnknownDistrict { province: String, district: String },
    #[error("location picker is closed")]
    PickerClosed,
}

/// A finalized "province district" location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub province: String,
    pub district: String,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.province, self.district)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PickerState {
    ProvinceChosen { province: String },
    LocationFinalized { province: String, district: String },
}

/// Cascade selector over a [`RegionMap`].
#[derive(Debug, Clone)]
pub struct RegionPicker {
    regions: Arc<RegionMap>,
    state: PickerState,
    location: Location,
}

impl RegionPicker {
    /// Starts with `location` as the visible location and its province highlighted.
    ///
    /// # Errors
    ///
    /// Fails when the location is not part of the region map.
    pub fn new(regions: Arc<RegionMap>, location: Location) -> Result<Self, RegionError> {
        let districts = regions
            .districts(&location.province)
            .ok_or_else(|| RegionError::UnknownProvince(location.province.clone()))?;

        if !districts.iter().any(|d| *d == location.district) {
            return Err(RegionError::UnknownDistrict {
                province: location.province,
                district: location.district,
            });
        }

        Ok(Self {
            state: PickerState::ProvinceChosen {
                province: location.province.clone(),
            },
            regions,
            location,
        })
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// The last finalized location.
    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, PickerState::ProvinceChosen { .. })
    }

    pub fn highlighted_province(&self) -> &str {
        match &self.state {
            PickerState::ProvinceChosen { province }
            | PickerState::LocationFinalized { province, .. } => province,
        }
    }

    /// Districts of the highlighted province.
    pub fn districts(&self) -> &[String] {
        self.regions
            .districts(self.highlighted_province())
            .unwrap_or_default()
    }

    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    /// Highlights another province. The visible location is untouched.
    ///
    /// # Errors
    ///
    /// [`RegionError::UnknownProvince`] leaves the state unchanged.
    /// [`RegionError::PickerClosed`] when the picker was not reopened.
    pub fn select_province(&mut self, province: &str) -> Result<&[String], RegionError> {
        if !self.is_open() {
            return Err(RegionError::PickerClosed);
        }
        if self.regions.districts(province).is_none() {
            return Err(RegionError::UnknownProvince(province.to_string()));
        }

        self.state = PickerState::ProvinceChosen {
            province: province.to_string(),
        };
        Ok(self.districts())
    }

    /// Picks a district of the highlighted province, finalizing the location
    /// and closing the picker.
    ///
    /// # Errors
    ///
    /// [`RegionError::UnknownDistrict`] when the district belongs to another
    /// province. [`RegionError::PickerClosed`] when the picker was not reopened.
    pub fn select_district(&mut self, district: &str) -> Result<&Location, RegionError> {
        let province = match &self.state {
            PickerState::ProvinceChosen { province } => province.clone(),
            PickerState::LocationFinalized { .. } => return Err(RegionError::PickerClosed),
        };

        if !self.regions.contains(&province, district) {
            return Err(RegionError::UnknownDistrict {
                province,
                district: district.to_string(),
            });
        }

        self.location = Location {
            province: province.clone(),
            district: district.to_string(),
        };
        self.state = PickerState::LocationFinalized {
            province,
            district: district.to_string(),
        };
        Ok(&self.location)
    }

    /// Opens the picker again on the province of the current location.
    pub fn reopen(&mut self) {
        self.state = PickerState::ProvinceChosen {
            province: self.location.province.clone(),
        };
    }
}
