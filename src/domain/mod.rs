//! Domain layer containing business entities and logic.
//!
//! Everything here is synchronous and free of I/O. Services in
//! [`crate::application::services`] feed it records from the repositories.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`search`] - Shelter text search and filter chips
//! - [`schedule`] - Volunteer slot grouping by date
//! - [`region_picker`] - Province → district cascade selector
//! - [`favorites`] - Per-session favorite shelters
//! - [`session`] - Signed-in session state
//!
//! # Data Flow
//!
//! 1. Seed records are read through [`repositories`]
//! 2. Derived views are recomputed from them plus session state on every request
//! 3. Nothing is written back; sessions are the only mutable state

pub mod entities;
pub mod favorites;
pub mod region_picker;
pub mod repositories;
pub mod schedule;
pub mod search;
pub mod session;
