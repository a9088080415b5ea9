//! Signed-in session and the transient UI state it carries.

use chrono::{DateTime, TimeDelta, Utc};
use std::time::Duration;

use crate::domain::entities::{Profile, Role};
use crate::domain::favorites::FavoriteSet;
use crate::domain::region_picker::RegionPicker;

/// State kept for one bearer token. Dropped on logout or restart.
#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: String,
    pub account_name: String,
    pub role: Role,
    /// Shelter managed by a shelter admin.
    pub shelter_id: Option<String>,
    pub favorites: FavoriteSet,
    pub picker: RegionPicker,
    pub profile: Option<Profile>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether the session is older than `ttl` at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        TimeDelta::from_std(ttl).is_ok_and(|ttl| now - self.created_at > ttl)
    }
}

/// An authenticated request: the session plus the key it is stored under.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub token_hash: String,
    pub session: Session,
}

impl AuthContext {
    pub fn account_id(&self) -> &str {
        &self.session.account_id
    }

    pub fn role(&self) -> Role {
        self.session.role
    }
}
