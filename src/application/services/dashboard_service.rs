//! Shelter admin dashboard, scoped to the admin's own shelter.

use std::sync::Arc;

use super::shelter_service::shelter_not_found;
use crate::domain::entities::{Animal, AnimalStatus, Application, Post, Shelter};
use crate::domain::repositories::{
    AnimalRepository, ApplicationRepository, PostRepository, ShelterRepository, SlotRepository,
};
use crate::domain::schedule::{DateGroup, group_by_date};
use crate::error::AppError;

/// Headline numbers on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOverview {
    pub shelter: Shelter,
    pub pending_applications: usize,
    pub slots: usize,
    pub animals_in_care: usize,
    pub posts: usize,
}

pub struct DashboardService<S, A, L, R, P>
where
    S: ShelterRepository,
    A: AnimalRepository,
    L: SlotRepository,
    R: ApplicationRepository,
    P: PostRepository,
{
    shelters: Arc<S>,
    animals: Arc<A>,
    slots: Arc<L>,
    applications: Arc<R>,
    posts: Arc<P>,
}

impl<S, A, L, R, P> DashboardService<S, A, L, R, P>
where
    S: ShelterRepository,
    A: AnimalRepository,
    L: SlotRepository,
    R: ApplicationRepository,
    P: PostRepository,
{
    pub fn new(
        shelters: Arc<S>,
        animals: Arc<A>,
        slots: Arc<L>,
        applications: Arc<R>,
        posts: Arc<P>,
    ) -> Self {
        Self {
            shelters,
            animals,
            slots,
            applications,
            posts,
        }
    }

    pub async fn overview(&self, shelter_id: &str) -> Result<DashboardOverview, AppError> {
        let shelter = self
            .shelters
            .find_by_id(shelter_id)
            .await?
            .ok_or_else(|| shelter_not_found(shelter_id))?;

        let pending_applications = self
            .applications
            .find_by_shelter(shelter_id)
            .await?
            .iter()
            .filter(|a| a.status.is_pending())
            .count();
        let slots = self.slots.find_by_shelter(shelter_id).await?.len();
        let animals_in_care = self
            .animals
            .find_by_shelter(shelter_id)
            .await?
            .iter()
            .filter(|a| a.status == AnimalStatus::Care)
            .count();
        let posts = self.posts.find_for_shelter(shelter_id).await?.len();

        Ok(DashboardOverview {
            shelter,
            pending_applications,
            slots,
            animals_in_care,
            posts,
        })
    }

    /// All applications addressed to the shelter, pending first.
    pub async fn applications(&self, shelter_id: &str) -> Result<Vec<Application>, AppError> {
        let mut apps = self.applications.find_by_shelter(shelter_id).await?;
        // stable: seed order kept within each group
        apps.sort_by_key(|a| !a.status.is_pending());
        Ok(apps)
    }

    pub async fn schedule(&self, shelter_id: &str) -> Result<Vec<DateGroup>, AppError> {
        let slots = self.slots.find_by_shelter(shelter_id).await?;
        Ok(group_by_date(slots))
    }

    pub async fn animals(&self, shelter_id: &str) -> Result<Vec<Animal>, AppError> {
        self.animals.find_by_shelter(shelter_id).await
    }

    pub async fn posts(&self, shelter_id: &str) -> Result<Vec<Post>, AppError> {
        self.posts.find_for_shelter(shelter_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ApplicationStatus, Sex, SlotType, Species};
    use crate::domain::repositories::{
        MockAnimalRepository, MockApplicationRepository, MockPostRepository,
        MockShelterRepository, MockSlotRepository,
    };
    use chrono::{NaiveDate, Utc};

    fn application(id: &str, status: ApplicationStatus) -> Application {
        Application {
            id: id.to_string(),
            shelter_id: "1".to_string(),
            shelter_name: "강남 행복 보호소".to_string(),
            slot_id: None,
            applicant_id: "u".to_string(),
            applicant_name: "n".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            time: "10:00 - 12:00".to_string(),
            slot_type: SlotType::Walk,
            status,
            applied_at: Utc::now(),
        }
    }

    fn animal(id: &str, status: AnimalStatus) -> Animal {
        Animal {
            id: id.to_string(),
            name: id.to_string(),
            species: Species::Dog,
            age: "3살".to_string(),
            sex: Sex::Male,
            status,
            image_url: String::new(),
            shelter_id: Some("1".to_string()),
            description: None,
        }
    }

    fn applications_repo() -> MockApplicationRepository {
        let mut repo = MockApplicationRepository::new();
        repo.expect_find_by_shelter().returning(|_| {
            Ok(vec![
                application("a", ApplicationStatus::Approved),
                application("b", ApplicationStatus::Pending),
                application("c", ApplicationStatus::Rejected),
                application("d", ApplicationStatus::Pending),
            ])
        });
        repo
    }

    #[tokio::test]
    async fn test_overview_counts() {
        let mut shelters = MockShelterRepository::new();
        shelters
            .expect_find_by_id()
            .returning(|id| Ok(Some(Shelter::new(id, "강남 행복 보호소", "서울"))));
        let mut animals = MockAnimalRepository::new();
        animals.expect_find_by_shelter().returning(|_| {
            Ok(vec![
                animal("x", AnimalStatus::Care),
                animal("y", AnimalStatus::Adopted),
            ])
        });
        let mut slots = MockSlotRepository::new();
        slots.expect_find_by_shelter().returning(|_| Ok(vec![]));
        let mut posts = MockPostRepository::new();
        posts.expect_find_for_shelter().returning(|_| Ok(vec![]));

        let svc = DashboardService::new(
            Arc::new(shelters),
            Arc::new(animals),
            Arc::new(slots),
            Arc::new(applications_repo()),
            Arc::new(posts),
        );

        let overview = svc.overview("1").await.unwrap();
        assert_eq!(overview.pending_applications, 2);
        assert_eq!(overview.animals_in_care, 1);
        assert_eq!(overview.slots, 0);
    }

    #[tokio::test]
    async fn test_applications_pending_first() {
        let svc = DashboardService::new(
            Arc::new(MockShelterRepository::new()),
            Arc::new(MockAnimalRepository::new()),
            Arc::new(MockSlotRepository::new()),
            Arc::new(applications_repo()),
            Arc::new(MockPostRepository::new()),
        );

        let apps = svc.applications("1").await.unwrap();
        let ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);
    }

    #[tokio::test]
    async fn test_overview_unknown_shelter() {
        let mut shelters = MockShelterRepository::new();
        shelters.expect_find_by_id().returning(|_| Ok(None));

        let svc = DashboardService::new(
            Arc::new(shelters),
            Arc::new(MockAnimalRepository::new()),
            Arc::new(MockSlotRepository::new()),
            Arc::new(MockApplicationRepository::new()),
            Arc::new(MockPostRepository::new()),
        );

        assert!(matches!(
            svc.overview("9").await,
            Err(AppError::NotFound { .. })
        ));
    }
}
