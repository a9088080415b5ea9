//! Seed-backed shelter repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::Shelter;
use crate::domain::repositories::ShelterRepository;
use crate::error::AppError;
use crate::infrastructure::seed::SeedData;

pub struct MemoryShelterRepository {
    seed: Arc<SeedData>,
}

impl MemoryShelterRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl ShelterRepository for MemoryShelterRepository {
    async fn list(&self) -> Result<Vec<Shelter>, AppError> {
        Ok(self.seed.shelters.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Shelter>, AppError> {
        Ok(self.seed.shelters.iter().find(|s| s.id == id).cloned())
    }
}
