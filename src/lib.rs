//! # PawConnect
//!
//! Shelter browsing and volunteer matching, served as a JSON API over a static
//! seed document.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, search/schedule/picker logic and repository traits
//! - **Application Layer** ([`application`]) - Services that combine repositories into use cases
//! - **Infrastructure Layer** ([`infrastructure`]) - Seed loading and in-memory repositories
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Shelter search with activity filter chips
//! - Volunteer slots grouped by date
//! - Two-level region picker for the user's location
//! - Simulated sign-in, onboarding and session-scoped favorites
//! - Shelter admin dashboard
//!
//! ## Quick Start
//!
//! ```bash
//! export SESSION_SIGNING_SECRET="change-me"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, AuthSettings, ShelterService};
    pub use crate::domain::entities::{Animal, Application, Shelter, VolunteerSlot};
    pub use crate::error::AppError;
    pub use crate::infrastructure::seed::SeedData;
    pub use crate::state::AppState;
}
