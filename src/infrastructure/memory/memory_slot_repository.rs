//! Seed-backed volunteer slot repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::VolunteerSlot;
use crate::domain::repositories::SlotRepository;
use crate::error::AppError;
use crate::infrastructure::seed::SeedData;

pub struct MemorySlotRepository {
    seed: Arc<SeedData>,
}

impl MemorySlotRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl SlotRepository for MemorySlotRepository {
    async fn list(&self) -> Result<Vec<VolunteerSlot>, AppError> {
        Ok(self.seed.slots.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<VolunteerSlot>, AppError> {
        Ok(self.seed.slots.iter().find(|s| s.id == id).cloned())
    }

    async fn find_by_shelter(&self, shelter_id: &str) -> Result<Vec<VolunteerSlot>, AppError> {
        Ok(self
            .seed
            .slots
            .iter()
            .filter(|s| s.shelter_id == shelter_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_shelter_preserves_order() {
        let repo = MemorySlotRepository::new(Arc::new(SeedData::embedded().unwrap()));

        let slots = repo.find_by_shelter("1").await.unwrap();
        let ids: Vec<&str> = slots.iter().map(|s| s.id.as_str()).collect();

        assert_eq!(ids, vec!["s1", "s2", "s3", "s4"]);
    }
}
