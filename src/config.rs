//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `SESSION_SIGNING_SECRET` - HMAC key for session token digests (non-empty)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `SEED_PATH` - Seed document to load instead of the embedded one
//! - `AUTH_LATENCY_MS` - Simulated sign-in round-trip (default: 1000)
//! - `AUTH_TIMEOUT_MS` - Sign-in and onboarding timeout (default: 5000)
//! - `SESSION_TTL_SECS` - Lifetime of a session token (default: 86400)
//! - `DEFAULT_PROVINCE` / `DEFAULT_DISTRICT` - Starting location of new
//!   sessions (default: `서울` / `강남구`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::domain::entities::RegionMap;
use crate::domain::region_picker::Location;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub seed_path: Option<String>,
    /// HMAC signing secret used to hash session tokens.
    /// Loaded from `SESSION_SIGNING_SECRET`. Must be non-empty.
    pub session_signing_secret: String,
    pub auth_latency_ms: u64,
    pub auth_timeout_ms: u64,
    /// Seconds a session token stays valid after sign-in.
    pub session_ttl_secs: u64,
    pub default_province: String,
    pub default_district: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SESSION_SIGNING_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let seed_path = env::var("SEED_PATH").ok().filter(|p| !p.trim().is_empty());

        let session_signing_secret =
            env::var("SESSION_SIGNING_SECRET").context("SESSION_SIGNING_SECRET must be set")?;

        let auth_latency_ms = env::var("AUTH_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1000);

        let auth_timeout_ms = env::var("AUTH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        let session_ttl_secs = env::var("SESSION_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let default_province =
            env::var("DEFAULT_PROVINCE").unwrap_or_else(|_| "서울".to_string());
        let default_district =
            env::var("DEFAULT_DISTRICT").unwrap_or_else(|_| "강남구".to_string());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            seed_path,
            session_signing_secret,
            auth_latency_ms,
            auth_timeout_ms,
            session_ttl_secs,
            default_province,
            default_district,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `session_signing_secret` is empty
    /// - `auth_timeout_ms` or `session_ttl_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.session_signing_secret.is_empty() {
            anyhow::bail!("SESSION_SIGNING_SECRET must not be empty");
        }

        if self.auth_timeout_ms == 0 {
            anyhow::bail!("AUTH_TIMEOUT_MS must be greater than 0");
        }

        if self.session_ttl_secs == 0 {
            anyhow::bail!("SESSION_TTL_SECS must be greater than 0");
        }

        if self.default_province.trim().is_empty() || self.default_district.trim().is_empty() {
            anyhow::bail!("DEFAULT_PROVINCE and DEFAULT_DISTRICT must not be empty");
        }

        Ok(())
    }

    /// Checks the default location against the loaded region map.
    ///
    /// # Errors
    ///
    /// Returns an error if the province or the district is not in the map.
    pub fn validate_location(&self, regions: &RegionMap) -> Result<()> {
        if !regions.contains(&self.default_province, &self.default_district) {
            anyhow::bail!(
                "DEFAULT_PROVINCE/DEFAULT_DISTRICT '{}' is not part of the region map",
                self.default_location()
            );
        }
        Ok(())
    }

    pub fn default_location(&self) -> Location {
        Location {
            province: self.default_province.clone(),
            district: self.default_district.clone(),
        }
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn auth_timeout(&self) -> Duration {
        Duration::from_millis(self.auth_timeout_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Seed: {}",
            self.seed_path.as_deref().unwrap_or("embedded")
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Auth latency/timeout: {}ms / {}ms",
            self.auth_latency_ms,
            self.auth_timeout_ms
        );
        tracing::info!("  Session TTL: {}s", self.session_ttl_secs);
        tracing::info!("  Default location: {}", self.default_location());
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
