//! Infrastructure layer for data access.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete storage over the seed document.
//!
//! # Modules
//!
//! - [`seed`] - Seed document loading and validation
//! - [`memory`] - In-memory repository implementations

pub mod memory;
pub mod seed;
