//! Sign-in and bearer-session authentication.

use chrono::{TimeDelta, Utc};
use hmac::{Hmac, Mac};
use rand::Rng;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::domain::entities::Account;
use crate::domain::favorites::FavoriteSet;
use crate::domain::region_picker::{Location, RegionPicker};
use crate::domain::repositories::{
    AccountRepository, RegionRepository, SessionRepository, ShelterRepository,
};
use crate::domain::session::{AuthContext, Session};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

const TOKEN_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const TOKEN_LEN: usize = 48;

/// Social providers offered on the login screen.
pub const SOCIAL_PROVIDERS: [&str; 2] = ["google", "kakao"];

/// Typed login failure.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("sign-in timed out")]
    TimedOut,
    #[error("sign-in provider '{0}' is unavailable")]
    ProviderUnavailable(String),
    #[error("unknown sign-in provider '{0}'")]
    UnknownProvider(String),
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    /// Label used for the `logins_total` counter.
    pub fn outcome(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::TimedOut => "timed_out",
            Self::ProviderUnavailable(_) | Self::UnknownProvider(_) => "provider_unavailable",
            Self::Store(_) => "error",
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidCredentials => AppError::unauthorized(
                "이메일 또는 비밀번호가 올바르지 않습니다",
                json!({ "reason": "invalid_credentials" }),
            ),
            AuthError::TimedOut => AppError::timeout(
                "로그인 요청 시간이 초과되었습니다",
                json!({ "reason": "timed_out" }),
            ),
            AuthError::ProviderUnavailable(provider) => AppError::unavailable(
                "소셜 로그인을 사용할 수 없습니다",
                json!({ "provider": provider }),
            ),
            AuthError::UnknownProvider(provider) => AppError::not_found(
                "Unknown sign-in provider",
                json!({ "provider": provider, "supported": SOCIAL_PROVIDERS }),
            ),
            AuthError::Store(e) => e,
        }
    }
}

/// Timing and keying parameters for sign-in.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// HMAC key for session token digests.
    pub signing_secret: String,
    /// Simulated round-trip of the sign-in backend.
    pub latency: Duration,
    /// Upper bound for a sign-in or onboarding call.
    pub timeout: Duration,
    /// Age after which a session token stops authenticating.
    pub session_ttl: Duration,
    /// Location new sessions start with.
    pub default_location: Location,
}

/// Successful sign-in: the raw token is returned to the client once.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub token: String,
    pub session: Session,
}

/// Service for signing in and authenticating requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before they
/// are used as session keys, so the store never holds a usable token.
pub struct AuthService<A, X, S, R>
where
    A: AccountRepository,
    X: SessionRepository,
    S: ShelterRepository,
    R: RegionRepository,
{
    accounts: Arc<A>,
    sessions: Arc<X>,
    shelters: Arc<S>,
    regions: Arc<R>,
    settings: AuthSettings,
}

impl<A, X, S, R> AuthService<A, X, S, R>
where
    A: AccountRepository,
    X: SessionRepository,
    S: ShelterRepository,
    R: RegionRepository,
{
    pub fn new(
        accounts: Arc<A>,
        sessions: Arc<X>,
        shelters: Arc<S>,
        regions: Arc<R>,
        settings: AuthSettings,
    ) -> Self {
        Self {
            accounts,
            sessions,
            shelters,
            regions,
            settings,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.settings.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Email/password sign-in.
    ///
    /// The backend round-trip is simulated by waiting `latency`; the whole
    /// call is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidCredentials`] for an unknown email or wrong password
    /// - [`AuthError::TimedOut`] when the call outlives the timeout
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let result = tokio::time::timeout(self.settings.timeout, self.verify(email, password))
            .await
            .unwrap_or(Err(AuthError::TimedOut));

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => e.outcome(),
        };
        metrics::counter!("logins_total", "outcome" => outcome).increment(1);

        match &result {
            Ok(login) => tracing::info!(account = %login.session.account_id, "Signed in"),
            Err(e) => tracing::warn!(error = %e, "Sign-in failed"),
        }

        result
    }

    /// Social sign-in. No OAuth backend exists, so known providers always
    /// report [`AuthError::ProviderUnavailable`].
    pub async fn social_login(&self, provider: &str) -> Result<LoginOutcome, AuthError> {
        let provider = provider.to_lowercase();
        let err = if SOCIAL_PROVIDERS.contains(&provider.as_str()) {
            AuthError::ProviderUnavailable(provider)
        } else {
            AuthError::UnknownProvider(provider)
        };

        metrics::counter!("logins_total", "outcome" => err.outcome()).increment(1);
        Err(err)
    }

    async fn verify(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        tokio::time::sleep(self.settings.latency).await;

        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if password_digest(password) != account.password_sha256.to_lowercase() {
            return Err(AuthError::InvalidCredentials);
        }

        self.prune_expired().await?;

        let session = self.new_session(&account).await?;
        let token = generate_token();
        self.sessions
            .save(&self.hash_token(&token), session.clone())
            .await?;

        Ok(LoginOutcome { token, session })
    }

    async fn new_session(&self, account: &Account) -> Result<Session, AppError> {
        let shelters = self.shelters.list().await?;
        let regions = self.regions.regions().await?;

        let picker = RegionPicker::new(regions, self.settings.default_location.clone())
            .map_err(|e| {
                AppError::internal(
                    "Default location is not part of the region map",
                    json!({ "reason": e.to_string() }),
                )
            })?;

        Ok(Session {
            account_id: account.id.clone(),
            account_name: account.name.clone(),
            role: account.role,
            shelter_id: account.shelter_id.clone(),
            favorites: FavoriteSet::from_seed(&shelters),
            picker,
            profile: None,
            created_at: Utc::now(),
        })
    }

    /// Resolves a raw bearer token to its session.
    ///
    /// A session older than `session_ttl` is removed on sight.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if no live session exists for the token.
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext, AppError> {
        let token_hash = self.hash_token(token);
        let rejected = || {
            AppError::unauthorized(
                "Unauthorized",
                json!({"reason": "Invalid or expired session token"}),
            )
        };

        let session = self.sessions.find(&token_hash).await?.ok_or_else(rejected)?;

        if session.is_expired(Utc::now(), self.settings.session_ttl) {
            self.sessions.remove(&token_hash).await?;
            tracing::info!(account = %session.account_id, "Session expired");
            return Err(rejected());
        }

        Ok(AuthContext {
            token_hash,
            session,
        })
    }

    /// Drops the session. Logging out twice is not an error.
    pub async fn logout(&self, ctx: &AuthContext) -> Result<(), AppError> {
        let existed = self.sessions.remove(&ctx.token_hash).await?;
        tracing::info!(account = %ctx.account_id(), existed, "Signed out");
        Ok(())
    }

    async fn prune_expired(&self) -> Result<(), AppError> {
        let cutoff = TimeDelta::from_std(self.settings.session_ttl)
            .ok()
            .and_then(|ttl| Utc::now().checked_sub_signed(ttl));
        let Some(cutoff) = cutoff else {
            return Ok(());
        };

        let removed = self.sessions.remove_created_before(cutoff).await?;
        if removed > 0 {
            tracing::debug!(removed, "Pruned expired sessions");
        }
        Ok(())
    }

    pub async fn session_count(&self) -> Result<usize, AppError> {
        self.sessions.count().await
    }
}

/// Lowercase hex SHA-256 of a password, the form stored in the seed.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 48 random alphanumeric characters.
fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_CHARSET.len());
            TOKEN_CHARSET[idx] as char
        })
        .collect()
}
