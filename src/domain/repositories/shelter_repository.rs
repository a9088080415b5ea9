//! Repository trait for shelters.

use crate::domain::entities::Shelter;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the shelter collection.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryShelterRepository`] - seed-backed implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShelterRepository: Send + Sync {
    /// Lists all shelters in seed order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn list(&self) -> Result<Vec<Shelter>, AppError>;

    /// Finds a shelter by its identifier. A miss is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn find_by_id(&self, id: &str) -> Result<Option<Shelter>, AppError>;
}
