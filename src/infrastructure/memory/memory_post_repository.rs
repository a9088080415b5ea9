//! Seed-backed shelter news repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::infrastructure::seed::SeedData;

pub struct MemoryPostRepository {
    seed: Arc<SeedData>,
}

impl MemoryPostRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl PostRepository for MemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.seed.posts.clone())
    }

    /// Posts owned by the shelter plus global posts.
    async fn find_for_shelter(&self, shelter_id: &str) -> Result<Vec<Post>, AppError> {
        Ok(self
            .seed
            .posts
            .iter()
            .filter(|p| p.visible_for(shelter_id))
            .cloned()
            .collect())
    }
}
