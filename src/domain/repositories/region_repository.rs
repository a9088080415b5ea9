//! Repository trait for the region hierarchy.

use crate::domain::entities::RegionMap;
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// The full province → district mapping.
    async fn regions(&self) -> Result<Arc<RegionMap>, AppError>;
}
