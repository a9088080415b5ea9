//! Repository trait for animals.

use crate::domain::entities::Animal;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the animal collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnimalRepository: Send + Sync {
    /// Lists all animals in seed order.
    async fn list(&self) -> Result<Vec<Animal>, AppError>;

    /// Finds an animal by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Animal>, AppError>;

    /// Animals whose shelter reference is `shelter_id`, in seed order.
    async fn find_by_shelter(&self, shelter_id: &str) -> Result<Vec<Animal>, AppError>;
}
