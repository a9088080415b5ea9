//! Seed-backed animal repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::Animal;
use crate::domain::repositories::AnimalRepository;
use crate::error::AppError;
use crate::infrastructure::seed::SeedData;

pub struct MemoryAnimalRepository {
    seed: Arc<SeedData>,
}

impl MemoryAnimalRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl AnimalRepository for MemoryAnimalRepository {
    async fn list(&self) -> Result<Vec<Animal>, AppError> {
        Ok(self.seed.animals.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Animal>, AppError> {
        Ok(self.seed.animals.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_shelter(&self, shelter_id: &str) -> Result<Vec<Animal>, AppError> {
        Ok(self
            .seed
            .animals
            .iter()
            .filter(|a| a.belongs_to(shelter_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_shelter_only_returns_owned_animals() {
        let repo = MemoryAnimalRepository::new(Arc::new(SeedData::embedded().unwrap()));

        let animals = repo.find_by_shelter("2").await.unwrap();

        assert!(!animals.is_empty());
        assert!(animals.iter().all(|a| a.belongs_to("2")));
    }

    #[tokio::test]
    async fn test_unknown_shelter_yields_empty() {
        let repo = MemoryAnimalRepository::new(Arc::new(SeedData::embedded().unwrap()));
        assert!(repo.find_by_shelter("999").await.unwrap().is_empty());
    }
}
