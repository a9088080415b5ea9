//! Repository trait for volunteer slots.

use crate::domain::entities::VolunteerSlot;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to volunteer slots.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Lists all slots in seed order.
    async fn list(&self) -> Result<Vec<VolunteerSlot>, AppError>;

    /// Finds a slot by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<VolunteerSlot>, AppError>;

    /// Slots owned by `shelter_id`, in seed order (unsorted by date).
    async fn find_by_shelter(&self, shelter_id: &str) -> Result<Vec<VolunteerSlot>, AppError>;
}
