//! In-memory repository implementations.
//!
//! Seed-backed repositories share one [`SeedData`](crate::infrastructure::seed::SeedData)
//! behind an `Arc` and clone records out on every read. Sessions live in a
//! `tokio::sync::RwLock` map and vanish on restart.
//!
//! # Repositories
//!
//! - [`MemoryShelterRepository`] - Shelters
//! - [`MemoryAnimalRepository`] - Animals
//! - [`MemorySlotRepository`] - Volunteer slots
//! - [`MemoryApplicationRepository`] - Applications
//! - [`MemoryPostRepository`] - Shelter news
//! - [`MemoryRegionRepository`] - Region hierarchy
//! - [`MemoryAccountRepository`] - Sign-in accounts
//! - [`MemorySessionRepository`] - Signed-in sessions

pub mod memory_account_repository;
pub mod memory_animal_repository;
pub mod memory_application_repository;
pub mod memory_post_repository;
pub mod memory_region_repository;
pub mod memory_session_repository;
pub mod memory_shelter_repository;
pub mod memory_slot_repository;

pub use memory_account_repository::MemoryAccountRepository;
pub use memory_animal_repository::MemoryAnimalRepository;
pub use memory_application_repository::MemoryApplicationRepository;
pub use memory_post_repository::MemoryPostRepository;
pub use memory_region_repository::MemoryRegionRepository;
pub use memory_session_repository::MemorySessionRepository;
pub use memory_shelter_repository::MemoryShelterRepository;
pub use memory_slot_repository::MemorySlotRepository;
