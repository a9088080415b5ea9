//! DTO for shelter news posts.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::{Post, PostType};

#[derive(Debug, Serialize)]
pub struct PostItem {
    pub id: String,
    pub post_type: PostType,
    pub type_label: &'static str,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDate,
}

impl From<&Post> for PostItem {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            post_type: post.post_type,
            type_label: post.post_type.label(),
            title: post.title.clone(),
            body: post.body.clone(),
            created_at: post.created_at,
        }
    }
}
