//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{HealthResponse, SeedStats};
use crate::state::AppState;

/// Returns service status and the size of the loaded seed.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Seed loaded and session store reachable
/// - **503 Service Unavailable**: Session store failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "seed": { "shelters": 5, "animals": 10, "slots": 8, "applications": 5, "provinces": 5 },
///   "sessions": 0
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let sessions = state.auth_service.session_count().await;
    let healthy = sessions.is_ok();

    if let Err(e) = &sessions {
        tracing::error!(error = %e, "Session store check failed");
    }

    let counts = state.seed_counts;
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        seed: SeedStats {
            shelters: counts.shelters,
            animals: counts.animals,
            slots: counts.slots,
            applications: counts.applications,
            provinces: counts.provinces,
        },
        sessions: sessions.unwrap_or_default(),
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}
