//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    ApplicationService, AuthService, AuthSettings, DashboardService, OnboardingService,
    PreferenceService, ScheduleService, ShelterService,
};
use crate::infrastructure::memory::{
    MemoryAccountRepository, MemoryAnimalRepository, MemoryApplicationRepository,
    MemoryPostRepository, MemoryRegionRepository, MemorySessionRepository,
    MemoryShelterRepository, MemorySlotRepository,
};
use crate::infrastructure::seed::SeedData;

pub type Shelters = ShelterService<
    MemoryShelterRepository,
    MemoryAnimalRepository,
    MemorySlotRepository,
    MemoryPostRepository,
>;
pub type Schedules = ScheduleService<MemoryShelterRepository, MemorySlotRepository>;
pub type Applications = ApplicationService<MemoryApplicationRepository>;
pub type Auth = AuthService<
    MemoryAccountRepository,
    MemorySessionRepository,
    MemoryShelterRepository,
    MemoryRegionRepository,
>;
pub type Preferences =
    PreferenceService<MemoryShelterRepository, MemoryRegionRepository, MemorySessionRepository>;
pub type Onboarding = OnboardingService<MemorySessionRepository>;
pub type Dashboard = DashboardService<
    MemoryShelterRepository,
    MemoryAnimalRepository,
    MemorySlotRepository,
    MemoryApplicationRepository,
    MemoryPostRepository,
>;

/// Record counts reported by the health endpoint.
#[derive(Debug, Clone, Copy)]
pub struct SeedCounts {
    pub shelters: usize,
    pub animals: usize,
    pub slots: usize,
    pub applications: usize,
    pub provinces: usize,
}

#[derive(Clone)]
pub struct AppState {
    pub shelter_service: Arc<Shelters>,
    pub schedule_service: Arc<Schedules>,
    pub application_service: Arc<Applications>,
    pub auth_service: Arc<Auth>,
    pub preference_service: Arc<Preferences>,
    pub onboarding_service: Arc<Onboarding>,
    pub dashboard_service: Arc<Dashboard>,
    pub seed_counts: SeedCounts,
}

impl AppState {
    /// Builds every repository and service over one validated seed document.
    pub fn from_seed(seed: SeedData, settings: AuthSettings) -> Self {
        let seed_counts = SeedCounts {
            shelters: seed.shelters.len(),
            animals: seed.animals.len(),
            slots: seed.slots.len(),
            applications: seed.applications.len(),
            provinces: seed.regions.len(),
        };

        let regions = Arc::new(MemoryRegionRepository::new(seed.regions.clone()));
        let seed = Arc::new(seed);

        let shelters = Arc::new(MemoryShelterRepository::new(seed.clone()));
        let animals = Arc::new(MemoryAnimalRepository::new(seed.clone()));
        let slots = Arc::new(MemorySlotRepository::new(seed.clone()));
        let applications = Arc::new(MemoryApplicationRepository::new(seed.clone()));
        let posts = Arc::new(MemoryPostRepository::new(seed.clone()));
        let accounts = Arc::new(MemoryAccountRepository::new(seed));
        let sessions = Arc::new(MemorySessionRepository::new());

        let latency = settings.latency;
        let timeout = settings.timeout;

        Self {
            shelter_service: Arc::new(ShelterService::new(
                shelters.clone(),
                animals.clone(),
                slots.clone(),
                posts.clone(),
            )),
            schedule_service: Arc::new(ScheduleService::new(shelters.clone(), slots.clone())),
            application_service: Arc::new(ApplicationService::new(applications.clone())),
            auth_service: Arc::new(AuthService::new(
                accounts,
                sessions.clone(),
                shelters.clone(),
                regions.clone(),
                settings,
            )),
            preference_service: Arc::new(PreferenceService::new(
                shelters.clone(),
                regions,
                sessions.clone(),
            )),
            onboarding_service: Arc::new(OnboardingService::new(sessions, latency, timeout)),
            dashboard_service: Arc::new(DashboardService::new(
                shelters,
                animals,
                slots,
                applications,
                posts,
            )),
            seed_counts,
        }
    }
}
