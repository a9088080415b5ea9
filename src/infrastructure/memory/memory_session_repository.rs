//! In-memory session store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::repositories::{SessionEdit, SessionRepository};
use crate::domain::session::Session;
use crate::error::AppError;

#[derive(Default)]
pub struct MemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn save(&self, token_hash: &str, session: Session) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .insert(token_hash.to_string(), session);
        Ok(())
    }

    async fn find(&self, token_hash: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.read().await.get(token_hash).cloned())
    }

    async fn update(&self, token_hash: &str, edit: SessionEdit) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        let stored = sessions.get_mut(token_hash).ok_or_else(|| {
            AppError::unauthorized("Unauthorized", json!({ "reason": "Session has ended" }))
        })?;

        // Edit a copy so a failed edit leaves the stored session as it was.
        let mut session = stored.clone();
        edit(&mut session)?;
        *stored = session.clone();

        Ok(session)
    }

    async fn remove(&self, token_hash: &str) -> Result<bool, AppError> {
        Ok(self.sessions.write().await.remove(token_hash).is_some())
    }

    async fn remove_created_before(&self, cutoff: DateTime<Utc>) -> Result<usize, AppError> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.created_at >= cutoff);
        Ok(before - sessions.len())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.sessions.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{RegionMap, Role};
    use crate::domain::favorites::FavoriteSet;
    use crate::domain::region_picker::{Location, RegionPicker};
    use chrono::TimeDelta;
    use std::sync::Arc;

    fn session(created_at: DateTime<Utc>) -> Session {
        let regions = Arc::new(RegionMap::from_iter([(
            "서울".to_string(),
            vec!["강남구".to_string(), "마포구".to_string()],
        )]));
        let picker = RegionPicker::new(
            regions,
            Location {
                province: "서울".to_string(),
                district: "강남구".to_string(),
            },
        )
        .unwrap();

        Session {
            account_id: "u1".to_string(),
            account_name: "김철수".to_string(),
            role: Role::Volunteer,
            shelter_id: None,
            favorites: FavoriteSet::default(),
            picker,
            profile: None,
            created_at,
        }
    }

    fn toggle(id: &'static str) -> SessionEdit {
        Box::new(move |session: &mut Session| -> Result<(), AppError> {
            session.favorites.toggle(id);
            Ok(())
        })
    }

    #[tokio::test]
    async fn test_update_applies_in_order() {
        let repo = MemorySessionRepository::new();
        repo.save("hash", session(Utc::now())).await.unwrap();

        repo.update("hash", toggle("1")).await.unwrap();
        let updated = repo.update("hash", toggle("2")).await.unwrap();

        assert!(updated.favorites.contains("1"));
        assert!(updated.favorites.contains("2"));

        let stored = repo.find("hash").await.unwrap().unwrap();
        assert!(stored.favorites.contains("1"));
        assert!(stored.favorites.contains("2"));
    }

    #[tokio::test]
    async fn test_update_after_remove_does_not_revive() {
        let repo = MemorySessionRepository::new();
        repo.save("hash", session(Utc::now())).await.unwrap();
        assert!(repo.remove("hash").await.unwrap());

        let err = repo.update("hash", toggle("1")).await.unwrap_err();

        assert!(matches!(err, AppError::Unauthorized { .. }));
        assert!(repo.find("hash").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_failed_update_keeps_session() {
        let repo = MemorySessionRepository::new();
        repo.save("hash", session(Utc::now())).await.unwrap();

        let err = repo
            .update(
                "hash",
                Box::new(|session: &mut Session| -> Result<(), AppError> {
                    session.favorites.toggle("1");
                    session.picker.select_province("제주")?;
                    Ok(())
                }),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        let stored = repo.find("hash").await.unwrap().unwrap();
        assert!(!stored.favorites.contains("1"));
    }

    #[tokio::test]
    async fn test_concurrent_updates_are_not_lost() {
        let repo = Arc::new(MemorySessionRepository::new());
        repo.save("hash", session(Utc::now())).await.unwrap();

        let handles: Vec<_> = ["1", "2", "3", "4"]
            .into_iter()
            .map(|id| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.update("hash", toggle(id)).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = repo.find("hash").await.unwrap().unwrap();
        for id in ["1", "2", "3", "4"] {
            assert!(stored.favorites.contains(id));
        }
    }

    #[tokio::test]
    async fn test_remove_created_before() {
        let repo = MemorySessionRepository::new();
        let now = Utc::now();
        repo.save("old", session(now - TimeDelta::hours(30)))
            .await
            .unwrap();
        repo.save("fresh", session(now)).await.unwrap();

        let removed = repo
            .remove_created_before(now - TimeDelta::hours(24))
            .await
            .unwrap();

        assert_eq!(removed, 1);
        assert!(repo.find("old").await.unwrap().is_none());
        assert!(repo.find("fresh").await.unwrap().is_some());
    }
}
