//! DTOs for sign-in endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Role;
use crate::domain::session::Session;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Issued once per sign-in; the client sends `token` as a Bearer credential.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountSummary,
}

#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub role_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shelter_id: Option<String>,
}

impl From<&Session> for AccountSummary {
    fn from(session: &Session) -> Self {
        Self {
            id: session.account_id.clone(),
            name: session.account_name.clone(),
            role: session.role,
            role_label: session.role.label(),
            shelter_id: session.shelter_id.clone(),
        }
    }
}
