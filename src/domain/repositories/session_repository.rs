//! Repository trait for signed-in sessions.

use crate::domain::session::Session;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// In-place change to a stored session.
///
/// Runs while the store holds its write lock. An `Err` leaves the stored
/// session untouched.
pub type SessionEdit = Box<dyn FnOnce(&mut Session) -> Result<(), AppError> + Send>;

/// Storage for sessions keyed by the HMAC digest of their bearer token.
///
/// This is the only writable store; it holds transient UI state and is
/// never persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session, replacing any previous value for the key.
    async fn save(&self, token_hash: &str, session: Session) -> Result<(), AppError>;

    /// Loads a session. A miss is `Ok(None)`.
    async fn find(&self, token_hash: &str) -> Result<Option<Session>, AppError>;

    /// Applies `edit` to the live session and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the session is gone (signed out
    /// or expired), or whatever `edit` returns.
    async fn update(&self, token_hash: &str, edit: SessionEdit) -> Result<Session, AppError>;

    /// Removes a session. Returns whether it existed.
    async fn remove(&self, token_hash: &str) -> Result<bool, AppError>;

    /// Drops every session created before `cutoff`. Returns how many.
    async fn remove_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, AppError>;

    /// Number of live sessions.
    async fn count(&self) -> Result<usize, AppError>;
}
