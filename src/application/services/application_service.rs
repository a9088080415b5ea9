//! Volunteer application status views and actions.
//!
//! Cancel, approve and reject are acknowledged but never written back; the
//! seed collection stays as loaded.

use serde_json::json;
use std::sync::Arc;

use super::acknowledgement::Acknowledgement;
use crate::domain::entities::Application;
use crate::domain::repositories::ApplicationRepository;
use crate::error::AppError;

pub const CANCEL_MESSAGE: &str = "신청이 취소되었습니다";
pub const APPROVE_MESSAGE: &str = "신청을 승인했습니다";
pub const REJECT_MESSAGE: &str = "신청을 거절했습니다";

pub struct ApplicationService<R: ApplicationRepository> {
    repository: Arc<R>,
}

impl<R: ApplicationRepository> ApplicationService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Applications submitted by `account_id`, in seed order.
    pub async fn my_applications(&self, account_id: &str) -> Result<Vec<Application>, AppError> {
        self.repository.find_by_applicant(account_id).await
    }

    /// Pending applications addressed to a shelter.
    pub async fn pending_for_shelter(&self, shelter_id: &str) -> Result<Vec<Application>, AppError> {
        let mut apps = self.repository.find_by_shelter(shelter_id).await?;
        apps.retain(|a| a.status.is_pending());
        Ok(apps)
    }

    /// # Errors
    ///
    /// [`AppError::NotFound`] when the application does not belong to the
    /// caller, [`AppError::Conflict`] when it is no longer pending.
    pub async fn cancel(&self, account_id: &str, id: &str) -> Result<Acknowledgement, AppError> {
        let app = self
            .find_where(id, |a| a.applicant_id == account_id)
            .await?;
        ensure_pending(&app)?;

        tracing::info!(application = %app.id, account = account_id, "Application cancel acknowledged");
        Ok(Acknowledgement::new(CANCEL_MESSAGE, app.id))
    }

    /// Acknowledges approval by the shelter's admin.
    pub async fn approve(&self, shelter_id: &str, id: &str) -> Result<Acknowledgement, AppError> {
        let app = self.for_admin(shelter_id, id).await?;
        tracing::info!(application = %app.id, shelter = shelter_id, "Application approval acknowledged");
        Ok(Acknowledgement::new(APPROVE_MESSAGE, app.id))
    }

    /// Acknowledges rejection by the shelter's admin.
    pub async fn reject(&self, shelter_id: &str, id: &str) -> Result<Acknowledgement, AppError> {
        let app = self.for_admin(shelter_id, id).await?;
        tracing::info!(application = %app.id, shelter = shelter_id, "Application rejection acknowledged");
        Ok(Acknowledgement::new(REJECT_MESSAGE, app.id))
    }

    async fn for_admin(&self, shelter_id: &str, id: &str) -> Result<Application, AppError> {
        let app = self.find_where(id, |a| a.shelter_id == shelter_id).await?;
        ensure_pending(&app)?;
        Ok(app)
    }

    /// Looks up an application visible to the caller. Applications outside
    /// the caller's scope are reported as missing.
    async fn find_where(
        &self,
        id: &str,
        visible: impl Fn(&Application) -> bool,
    ) -> Result<Application, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .filter(|a| visible(a))
            .ok_or_else(|| AppError::not_found("Application not found", json!({ "id": id })))
    }
}

fn ensure_pending(app: &Application) -> Result<(), AppError> {
    if app.status.is_pending() {
        return Ok(());
    }
    Err(AppError::conflict(
        "Application is no longer pending",
        json!({ "id": app.id, "status": app.status }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ApplicationStatus, SlotType};
    use crate::domain::repositories::MockApplicationRepository;
    use chrono::{NaiveDate, Utc};

    fn application(id: &str, applicant: &str, shelter: &str, status: ApplicationStatus) -> Application {
        Application {
            id: id.to_string(),
            shelter_id: shelter.to_string(),
            shelter_name: "강남 행복 보호소".to_string(),
            slot_id: None,
            applicant_id: applicant.to_string(),
            applicant_name: "김철수".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            time: "10:00 - 12:00".to_string(),
            slot_type: SlotType::Walk,
            status,
            applied_at: Utc::now(),
        }
    }

    fn repo_with(app: Application) -> MockApplicationRepository {
        let mut repo = MockApplicationRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(app.clone())));
        repo
    }

    #[tokio::test]
    async fn test_cancel_own_pending() {
        let repo = repo_with(application("ap1", "u1", "1", ApplicationStatus::Pending));
        let svc = ApplicationService::new(Arc::new(repo));

        let ack = svc.cancel("u1", "ap1").await.unwrap();
        assert_eq!(ack.message, CANCEL_MESSAGE);
    }

    #[tokio::test]
    async fn test_cancel_someone_elses_is_not_found() {
        let repo = repo_with(application("ap4", "u3", "1", ApplicationStatus::Pending));
        let svc = ApplicationService::new(Arc::new(repo));

        assert!(matches!(
            svc.cancel("u1", "ap4").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_approved_conflicts() {
        let repo = repo_with(application("ap2", "u1", "2", ApplicationStatus::Approved));
        let svc = ApplicationService::new(Arc::new(repo));

        assert!(matches!(
            svc.cancel("u1", "ap2").await,
            Err(AppError::Conflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_approve_and_reject_messages() {
        let repo = repo_with(application("ap4", "u3", "1", ApplicationStatus::Pending));
        let svc = ApplicationService::new(Arc::new(repo));

        assert_eq!(svc.approve("1", "ap4").await.unwrap().message, APPROVE_MESSAGE);
        assert_eq!(svc.reject("1", "ap4").await.unwrap().message, REJECT_MESSAGE);
    }

    #[tokio::test]
    async fn test_approve_other_shelter_is_not_found() {
        let repo = repo_with(application("ap4", "u3", "1", ApplicationStatus::Pending));
        let svc = ApplicationService::new(Arc::new(repo));

        assert!(matches!(
            svc.approve("2", "ap4").await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_pending_for_shelter_filters_status() {
        let mut repo = MockApplicationRepository::new();
        repo.expect_find_by_shelter().returning(|shelter| {
            Ok(vec![
                application("a", "u1", shelter, ApplicationStatus::Pending),
                application("b", "u2", shelter, ApplicationStatus::Rejected),
                application("c", "u3", shelter, ApplicationStatus::Pending),
            ])
        });
        let svc = ApplicationService::new(Arc::new(repo));

        let pending = svc.pending_for_shelter("1").await.unwrap();
        let ids: Vec<&str> = pending.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
