//! Business logic services for the application layer.

pub mod acknowledgement;
pub mod application_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod onboarding_service;
pub mod preference_service;
pub mod schedule_service;
pub mod shelter_service;

pub use acknowledgement::Acknowledgement;
pub use application_service::ApplicationService;
pub use auth_service::{AuthError, AuthService, AuthSettings, LoginOutcome};
pub use dashboard_service::{DashboardOverview, DashboardService};
pub use onboarding_service::{OnboardingForm, OnboardingService};
pub use preference_service::PreferenceService;
pub use schedule_service::ScheduleService;
pub use shelter_service::{AnimalView, HomeView, ShelterDetail, ShelterService};
