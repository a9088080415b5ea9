//! Repository trait for shelter news posts.

use crate::domain::entities::Post;
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists all posts in seed order.
    async fn list(&self) -> Result<Vec<Post>, AppError>;

    /// Posts shown for a shelter: its own posts plus global notices.
    async fn find_for_shelter(&self, shelter_id: &str) -> Result<Vec<Post>, AppError>;
}
