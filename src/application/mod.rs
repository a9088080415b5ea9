//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shelter_service::ShelterService`] - Shelter search, detail and home views
//! - [`services::schedule_service::ScheduleService`] - Volunteer schedule and slot sign-up
//! - [`services::application_service::ApplicationService`] - Application status actions
//! - [`services::auth_service::AuthService`] - Sign-in and session authentication
//! - [`services::preference_service::PreferenceService`] - Favorites and location picker
//! - [`services::onboarding_service::OnboardingService`] - First-run profile setup
//! - [`services::dashboard_service::DashboardService`] - Shelter admin dashboard

pub mod services;
