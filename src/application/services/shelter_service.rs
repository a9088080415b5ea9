//! Shelter browsing: search, detail and home views.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{Animal, Post, Shelter, ShelterLink};
use crate::domain::repositories::{
    AnimalRepository, PostRepository, ShelterRepository, SlotRepository,
};
use crate::domain::schedule::{DateGroup, group_by_date};
use crate::domain::search::{ShelterFilter, filter_by_query};
use crate::error::AppError;

/// Animals shown on a shelter's detail page.
pub const DETAIL_ANIMAL_LIMIT: usize = 4;
/// Shelters in the home screen's "nearby" strip.
pub const HOME_SHELTER_LIMIT: usize = 3;
/// Animals in the home screen's "popular" grid.
pub const HOME_ANIMAL_LIMIT: usize = 6;

/// Everything the shelter detail page renders.
#[derive(Debug, Clone)]
pub struct ShelterDetail {
    pub shelter: Shelter,
    pub animals: Vec<Animal>,
    pub slot_count: usize,
    pub schedule: Vec<DateGroup>,
    pub posts: Vec<Post>,
}

/// An animal together with its resolved shelter reference.
#[derive(Debug, Clone)]
pub struct AnimalView {
    pub animal: Animal,
    pub shelter: ShelterLink,
}

#[derive(Debug, Clone)]
pub struct HomeView {
    pub nearby: Vec<Shelter>,
    pub popular: Vec<Animal>,
}

/// Read-side service for shelters and their animals.
pub struct ShelterService<S, A, L, P>
where
    S: ShelterRepository,
    A: AnimalRepository,
    L: SlotRepository,
    P: PostRepository,
{
    shelters: Arc<S>,
    animals: Arc<A>,
    slots: Arc<L>,
    posts: Arc<P>,
}

impl<S, A, L, P> ShelterService<S, A, L, P>
where
    S: ShelterRepository,
    A: AnimalRepository,
    L: SlotRepository,
    P: PostRepository,
{
    pub fn new(shelters: Arc<S>, animals: Arc<A>, slots: Arc<L>, posts: Arc<P>) -> Self {
        Self {
            shelters,
            animals,
            slots,
            posts,
        }
    }

    /// Text search followed by a filter chip.
    ///
    /// An empty query with [`ShelterFilter::All`] returns every shelter in seed
    /// order. No match is an empty list, not an error.
    pub async fn search(&self, query: &str, filter: ShelterFilter) -> Result<Vec<Shelter>, AppError> {
        metrics::counter!("shelter_searches_total").increment(1);

        let shelters = self.shelters.list().await?;
        let slots = match filter {
            ShelterFilter::All | ShelterFilter::Today => Vec::new(),
            _ => self.slots.list().await?,
        };

        let matched = filter_by_query(&shelters, query);
        let result: Vec<Shelter> = filter.apply(matched, &slots).into_iter().cloned().collect();

        tracing::debug!(query, %filter, count = result.len(), "Shelter search");

        Ok(result)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no shelter has this id.
    pub async fn get_shelter(&self, id: &str) -> Result<Shelter, AppError> {
        self.shelters
            .find_by_id(id)
            .await?
            .ok_or_else(|| shelter_not_found(id))
    }

    /// Detail page data. Only animals belonging to the shelter are listed;
    /// a shelter without animals gets an empty list.
    pub async fn detail(&self, id: &str) -> Result<ShelterDetail, AppError> {
        let shelter = self.get_shelter(id).await?;

        let mut animals = self.animals.find_by_shelter(id).await?;
        animals.truncate(DETAIL_ANIMAL_LIMIT);

        let slots = self.slots.find_by_shelter(id).await?;
        let slot_count = slots.len();
        let schedule = group_by_date(slots);

        let posts = self.posts.find_for_shelter(id).await?;

        Ok(ShelterDetail {
            shelter,
            animals,
            slot_count,
            schedule,
            posts,
        })
    }

    /// All animals of a shelter.
    pub async fn shelter_animals(&self, id: &str) -> Result<Vec<Animal>, AppError> {
        self.get_shelter(id).await?;
        self.animals.find_by_shelter(id).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no animal has this id. An animal
    /// whose shelter is missing is still returned, with an unresolved link.
    pub async fn get_animal(&self, id: &str) -> Result<AnimalView, AppError> {
        let animal = self
            .animals
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Animal not found", json!({ "id": id })))?;

        let shelter = match animal.shelter_id.as_deref() {
            Some(shelter_id) => {
                let found = self.shelters.find_by_id(shelter_id).await?;
                animal.resolve_shelter(found.iter())
            }
            None => ShelterLink::None,
        };

        Ok(AnimalView { animal, shelter })
    }

    pub async fn home(&self) -> Result<HomeView, AppError> {
        let mut nearby = self.shelters.list().await?;
        nearby.truncate(HOME_SHELTER_LIMIT);

        let mut popular = self.animals.list().await?;
        popular.truncate(HOME_ANIMAL_LIMIT);

        Ok(HomeView { nearby, popular })
    }
}

pub(crate) fn shelter_not_found(id: &str) -> AppError {
    AppError::not_found("Shelter not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AnimalStatus, Sex, SlotType, Species, VolunteerSlot};
    use crate::domain::repositories::{
        MockAnimalRepository, MockPostRepository, MockShelterRepository, MockSlotRepository,
    };
    use chrono::NaiveDate;

    type TestService = ShelterService<
        MockShelterRepository,
        MockAnimalRepository,
        MockSlotRepository,
        MockPostRepository,
    >;

    fn service(
        shelters: MockShelterRepository,
        animals: MockAnimalRepository,
        slots: MockSlotRepository,
        posts: MockPostRepository,
    ) -> TestService {
        ShelterService::new(
            Arc::new(shelters),
            Arc::new(animals),
            Arc::new(slots),
            Arc::new(posts),
        )
    }

    fn two_shelters() -> Vec<Shelter> {
        vec![
            Shelter::new("1", "Gangnam Shelter", "Seoul Gangnam-gu"),
            Shelter::new("2", "Mapo Shelter", "Seoul Mapo-gu"),
        ]
    }

    fn animal(id: &str, shelter_id: Option<&str>) -> Animal {
        Animal {
            id: id.to_string(),
            name: format!("animal-{id}"),
            species: Species::Cat,
            age: "1살".to_string(),
            sex: Sex::Female,
            status: AnimalStatus::Care,
            image_url: String::new(),
            shelter_id: shelter_id.map(str::to_string),
            description: None,
        }
    }

    fn slot(id: &str, shelter_id: &str, date: &str, slot_type: SlotType) -> VolunteerSlot {
        VolunteerSlot {
            id: id.to_string(),
            shelter_id: shelter_id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            start_time: "10:00".to_string(),
            end_time: "12:00".to_string(),
            capacity: 4,
            current_applicants: 1,
            slot_type,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_search_by_query_case_insensitive() {
        let mut shelters = MockShelterRepository::new();
        shelters.expect_list().returning(|| Ok(two_shelters()));

        let svc = service(
            shelters,
            MockAnimalRepository::new(),
            MockSlotRepository::new(),
            MockPostRepository::new(),
        );

        let result = svc.search("MAPO", ShelterFilter::All).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[tokio::test]
    async fn test_search_all_skips_slot_lookup() {
        let mut shelters = MockShelterRepository::new();
        shelters.expect_list().returning(|| Ok(two_shelters()));
        let mut slots = MockSlotRepository::new();
        slots.expect_list().never();

        let svc = service(
            shelters,
            MockAnimalRepository::new(),
            slots,
            MockPostRepository::new(),
        );

        let result = svc.search("", ShelterFilter::All).await.unwrap();
        assert_eq!(result, two_shelters());
    }

    #[tokio::test]
    async fn test_search_activity_chip_uses_slots() {
        let mut shelters = MockShelterRepository::new();
        shelters.expect_list().returning(|| Ok(two_shelters()));
        let mut slots = MockSlotRepository::new();
        slots
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![slot("s1", "2", "2026-01-10", SlotType::Bath)]));

        let svc = service(
            shelters,
            MockAnimalRepository::new(),
            slots,
            MockPostRepository::new(),
        );

        let result = svc.search("seoul", ShelterFilter::Bath).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[tokio::test]
    async fn test_get_shelter_miss_is_not_found() {
        let mut shelters = MockShelterRepository::new();
        shelters.expect_find_by_id().returning(|_| Ok(None));

        let svc = service(
            shelters,
            MockAnimalRepository::new(),
            MockSlotRepository::new(),
            MockPostRepository::new(),
        );

        let err = svc.get_shelter("999").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_detail_caps_animals_and_groups_schedule() {
        let mut shelters = MockShelterRepository::new();
        shelters
            .expect_find_by_id()
            .returning(|_| Ok(Some(Shelter::new("1", "Gangnam Shelter", "Seoul"))));

        let mut animals = MockAnimalRepository::new();
        animals.expect_find_by_shelter().returning(|id| {
            Ok((1..=6)
                .map(|n| animal(&format!("a{n}"), Some(id)))
                .collect())
        });

        let mut slots = MockSlotRepository::new();
        slots.expect_find_by_shelter().returning(|id| {
            Ok(vec![
                slot("a", id, "2026-01-10", SlotType::Walk),
                slot("b", id, "2026-01-11", SlotType::Clean),
                slot("c", id, "2026-01-10", SlotType::Bath),
            ])
        });

        let mut posts = MockPostRepository::new();
        posts.expect_find_for_shelter().returning(|_| Ok(vec![]));

        let svc = service(shelters, animals, slots, posts);

        let detail = svc.detail("1").await.unwrap();

        assert_eq!(detail.animals.len(), DETAIL_ANIMAL_LIMIT);
        assert_eq!(detail.slot_count, 3);
        assert_eq!(detail.schedule.len(), 2);
        let first: Vec<&str> = detail.schedule[0]
            .slots
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(first, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_detail_without_animals_is_empty() {
        let mut shelters = MockShelterRepository::new();
        shelters
            .expect_find_by_id()
            .returning(|_| Ok(Some(Shelter::new("5", "Empty", "Busan"))));
        let mut animals = MockAnimalRepository::new();
        animals.expect_find_by_shelter().returning(|_| Ok(vec![]));
        let mut slots = MockSlotRepository::new();
        slots.expect_find_by_shelter().returning(|_| Ok(vec![]));
        let mut posts = MockPostRepository::new();
        posts.expect_find_for_shelter().returning(|_| Ok(vec![]));

        let svc = service(shelters, animals, slots, posts);

        let detail = svc.detail("5").await.unwrap();
        assert!(detail.animals.is_empty());
        assert!(detail.schedule.is_empty());
    }

    #[tokio::test]
    async fn test_get_animal_with_unknown_shelter_is_unresolved() {
        let mut animals = MockAnimalRepository::new();
        animals
            .expect_find_by_id()
            .returning(|id| Ok(Some(animal(id, Some("404")))));
        let mut shelters = MockShelterRepository::new();
        shelters.expect_find_by_id().returning(|_| Ok(None));

        let svc = service(
            shelters,
            animals,
            MockSlotRepository::new(),
            MockPostRepository::new(),
        );

        let view = svc.get_animal("a1").await.unwrap();
        assert_eq!(
            view.shelter,
            ShelterLink::Unresolved {
                id: "404".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_get_animal_without_shelter() {
        let mut animals = MockAnimalRepository::new();
        animals
            .expect_find_by_id()
            .returning(|id| Ok(Some(animal(id, None))));
        let mut shelters = MockShelterRepository::new();
        shelters.expect_find_by_id().never();

        let svc = service(
            shelters,
            animals,
            MockSlotRepository::new(),
            MockPostRepository::new(),
        );

        let view = svc.get_animal("a1").await.unwrap();
        assert_eq!(view.shelter, ShelterLink::None);
    }

    #[tokio::test]
    async fn test_get_animal_miss() {
        let mut animals = MockAnimalRepository::new();
        animals.expect_find_by_id().returning(|_| Ok(None));

        let svc = service(
            MockShelterRepository::new(),
            animals,
            MockSlotRepository::new(),
            MockPostRepository::new(),
        );

        assert!(matches!(
            svc.get_animal("zz").await,
            Err(AppError::NotFound { .. })
        ));
    }
}
