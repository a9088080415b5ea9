//! Seed-backed account repository.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use crate::infrastructure::seed::SeedData;

pub struct MemoryAccountRepository {
    seed: Arc<SeedData>,
}

impl MemoryAccountRepository {
    pub fn new(seed: Arc<SeedData>) -> Self {
        Self { seed }
    }
}

#[async_trait]
impl AccountRepository for MemoryAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let email = email.trim();
        Ok(self
            .seed
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, AppError> {
        Ok(self.seed.accounts.iter().find(|a| a.id == id).cloned())
    }
}
