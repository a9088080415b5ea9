//! Seed-backed application repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::Application;
use crate::domain::repositories::ApplicationRepository;
use crate::error::AppError;
use crate::infrastructure::seed::SeedData;

pub struct MemoryApplicationRepository {
    seed: Arc<SeedData>,
}

impl MemoryApplicationRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self { seed }
    }

    fn filtered(&self, pred: impl Fn(&Application) -> bool) -> Vec<Application> {
        self.seed
            .applications
            .iter()
            .filter(|a| pred(a))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ApplicationRepository for MemoryApplicationRepository {
    async fn list(&self) -> Result<Vec<Application>, AppError> {
        Ok(self.seed.applications.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Application>, AppError> {
        Ok(self.seed.applications.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_applicant(&self, account_id: &str) -> Result<Vec<Application>, AppError> {
        Ok(self.filtered(|a| a.applicant_id == account_id))
    }

    async fn find_by_shelter(&self, shelter_id: &str) -> Result<Vec<Application>, AppError> {
        Ok(self.filtered(|a| a.shelter_id == shelter_id))
    }
}
