//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Response DTOs carry the display labels the client
//! renders as-is.

pub mod admin;
pub mod animal;
pub mod application;
pub mod auth;
pub mod health;
pub mod home;
pub mod my;
pub mod onboarding;
pub mod post;
pub mod region;
pub mod shelter;
pub mod slot;
