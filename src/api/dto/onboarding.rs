//! DTOs for the onboarding form.

use serde::{Deserialize, Serialize};

use crate::application::services::OnboardingForm;
use crate::domain::entities::{Profile, Role};

/// Onboarding submission. Checks run in the service so that failures are
/// reported in form order.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    pub role: Role,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub agree_terms: bool,
    #[serde(default)]
    pub agree_privacy: bool,
}

impl From<OnboardingRequest> for OnboardingForm {
    fn from(req: OnboardingRequest) -> Self {
        Self {
            role: req.role,
            name: req.name,
            phone: req.phone,
            agree_terms: req.agree_terms,
            agree_privacy: req.agree_privacy,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub profile: Profile,
    pub role_label: &'static str,
}
