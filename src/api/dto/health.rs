//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with seed statistics.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub seed: SeedStats,
    pub sessions: usize,
}

/// Record counts of the loaded seed document.
#[derive(Debug, Serialize)]
pub struct SeedStats {
    pub shelters: usize,
    pub animals: usize,
    pub slots: usize,
    pub applications: usize,
    pub provinces: usize,
}
