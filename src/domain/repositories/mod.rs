//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! following the Repository pattern. Seed collections are read-only; sessions are
//! the only store that accepts writes.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShelterRepository`] - Shelters
//! - [`AnimalRepository`] - Animals
//! - [`SlotRepository`] - Volunteer slots
//! - [`ApplicationRepository`] - Volunteer applications
//! - [`PostRepository`] - Shelter news
//! - [`RegionRepository`] - Province → district hierarchy
//! - [`AccountRepository`] - Sign-in accounts
//! - [`SessionRepository`] - Signed-in sessions

pub mod account_repository;
pub mod animal_repository;
pub mod application_repository;
pub mod post_repository;
pub mod region_repository;
pub mod session_repository;
pub mod shelter_repository;
pub mod slot_repository;

pub use account_repository::AccountRepository;
pub use animal_repository::AnimalRepository;
pub use application_repository::ApplicationRepository;
pub use post_repository::PostRepository;
pub use region_repository::RegionRepository;
pub use session_repository::{SessionEdit, SessionRepository};
pub use shelter_repository::ShelterRepository;
pub use slot_repository::SlotRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use animal_repository::MockAnimalRepository;
#[cfg(test)]
pub use application_repository::MockApplicationRepository;
#[cfg(test)]
pub use post_repository::MockPostRepository;
#[cfg(test)]
pub use region_repository::MockRegionRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use shelter_repository::MockShelterRepository;
#[cfg(test)]
pub use slot_repository::MockSlotRepository;
