//! User accounts that can sign in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Volunteer,
    ShelterAdmin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::Volunteer => "봉사자",
            Self::ShelterAdmin => "보호소 운영자",
        }
    }
}

/// A registered account.
///
/// Shelter admins manage exactly one shelter (`shelter_id`). The password is
/// only stored as a hex-encoded SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub shelter_id: Option<String>,
    pub password_sha256: String,
}

/// Profile details collected by onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub role: Role,
    pub name: String,
    pub phone: String,
}
