//! Repository trait for sign-in accounts.

use crate::domain::entities::Account;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Finds an account by email, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    /// Finds an account by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Account>, AppError>;
}
