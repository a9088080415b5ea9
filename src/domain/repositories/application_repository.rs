//! Repository trait for volunteer applications.

use crate::domain::entities::Application;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to applications.
///
/// Status changes are acknowledged by the service layer but never written,
/// so the trait has no update operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Lists all applications in seed order.
    async fn list(&self) -> Result<Vec<Application>, AppError>;

    /// Finds an application by its identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Application>, AppError>;

    /// Applications submitted by one account.
    async fn find_by_applicant(&self, account_id: &str) -> Result<Vec<Application>, AppError>;

    /// Applications addressed to one shelter.
    async fn find_by_shelter(&self, shelter_id: &str) -> Result<Vec<Application>, AppError>;
}
