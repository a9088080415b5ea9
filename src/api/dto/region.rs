//! DTOs for region data and the per-session location picker.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::region_picker::{PickerState, RegionPicker};

#[derive(Debug, Serialize)]
pub struct ProvincesResponse {
    pub provinces: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DistrictsResponse {
    pub province: String,
    pub districts: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SelectProvinceRequest {
    #[validate(length(min = 1, message = "Province must not be empty"))]
    pub province: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SelectDistrictRequest {
    #[validate(length(min = 1, message = "District must not be empty"))]
    pub district: String,
}

/// Picker snapshot. `location` is the composed "province district" string.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub location: String,
    pub province: String,
    pub district: String,
    pub picker: PickerView,
}

#[derive(Debug, Serialize)]
pub struct PickerView {
    pub open: bool,
    pub state: PickerState,
    pub highlighted_province: String,
    pub districts: Vec<String>,
}

impl From<&RegionPicker> for LocationResponse {
    fn from(picker: &RegionPicker) -> Self {
        let location = picker.location();
        Self {
            location: location.to_string(),
            province: location.province.clone(),
            district: location.district.clone(),
            picker: PickerView {
                open: picker.is_open(),
                state: picker.state().clone(),
                highlighted_province: picker.highlighted_province().to_string(),
                districts: picker.districts().to_vec(),
            },
        }
    }
}
