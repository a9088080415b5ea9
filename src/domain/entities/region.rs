//! Province → district hierarchy driving the location picker.

use serde::{Deserialize, Serialize};

/// A top-level region and its ordered districts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub province: String,
    pub districts: Vec<String>,
}

/// Ordered mapping from province name to district names.
///
/// Serialized as a list so the seed order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionMap(Vec<Region>);

impl RegionMap {
    pub fn new(regions: Vec<Region>) -> Self {
        Self(regions)
    }

    /// Province names in seed order.
    pub fn provinces(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|r| r.province.as_str())
    }

    /// Districts mapped to `province`, or `None` for an unknown province.
    pub fn districts(&self, province: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|r| r.province == province)
            .map(|r| r.districts.as_slice())
    }

    pub fn contains(&self, province: &str, district: &str) -> bool {
        self.districts(province)
            .is_some_and(|ds| ds.iter().any(|d| d == district))
    }

    pub fn regions(&self) -> &[Region] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for RegionMap {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(province, districts)| Region {
                    province,
                    districts,
                })
                .collect(),
        )
    }
}
