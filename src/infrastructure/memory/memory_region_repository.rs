//! Region hierarchy held in memory.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::RegionMap;
use crate::domain::repositories::RegionRepository;
use crate::error::AppError;

/// Holds its own `Arc` so pickers can share the map without cloning it.
pub struct MemoryRegionRepository {
    regions: Arc<RegionMap>,
}

impl MemoryRegionRepository {
    pub fn new(regions: RegionMap) -> Self {
        Self {
            regions: Arc::new(regions),
        }
    }
}

#[async_trait]
impl RegionRepository for MemoryRegionRepository {
    async fn regions(&self) -> Result<Arc<RegionMap>, AppError> {
        Ok(Arc::clone(&self.regions))
    }
}
