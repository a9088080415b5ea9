//! Domain entity representing a shelter news post.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    Notice,
    Adoption,
    Review,
}

impl PostType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Notice => "공지",
            Self::Adoption => "입양",
            Self::Review => "후기",
        }
    }
}

/// A news item. Posts without a shelter are global notices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub shelter_id: Option<String>,
    pub post_type: PostType,
    pub title: String,
    pub body: String,
    pub created_at: NaiveDate,
}

impl Post {
    /// Whether the post is shown on the given shelter's news tab.
    pub fn visible_for(&self, shelter_id: &str) -> bool {
        match self.shelter_id.as_deref() {
            Some(id) => id == shelter_id,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(shelter_id: Option<&str>) -> Post {
        Post {
            id: "p1".to_string(),
            shelter_id: shelter_id.map(str::to_string),
            post_type: PostType::Notice,
            title: "t".to_string(),
            body: "b".to_string(),
            created_at: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_global_post_visible_everywhere() {
        assert!(post(None).visible_for("1"));
        assert!(post(None).visible_for("2"));
    }

    #[test]
    fn test_shelter_post_visible_only_for_owner() {
        assert!(post(Some("1")).visible_for("1"));
        assert!(!post(Some("1")).visible_for("2"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(PostType::Notice.label(), "공지");
        assert_eq!(PostType::Adoption.label(), "입양");
        assert_eq!(PostType::Review.label(), "후기");
    }
}
