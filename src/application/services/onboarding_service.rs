//! First-run profile setup after sign-in.

use regex::Regex;
use serde_json::json;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use crate::domain::entities::{Profile, Role};
use crate::domain::repositories::SessionRepository;
use crate::domain::session::{AuthContext, Session};
use crate::error::AppError;

pub const CONSENT_REQUIRED: &str = "필수 약관에 동의해주세요";
pub const INVALID_PHONE: &str = "올바른 전화번호를 입력해주세요";
pub const NAME_REQUIRED: &str = "이름을 입력해주세요";

/// Minimum phone length, separators included.
pub const MIN_PHONE_LEN: usize = 10;

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9][0-9 -]*$").unwrap());

/// Submitted onboarding form.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub agree_terms: bool,
    pub agree_privacy: bool,
}

pub struct OnboardingService<X: SessionRepository> {
    sessions: Arc<X>,
    latency: Duration,
    timeout: Duration,
}

impl<X: SessionRepository> OnboardingService<X> {
    pub fn new(sessions: Arc<X>, latency: Duration, timeout: Duration) -> Self {
        Self {
            sessions,
            latency,
            timeout,
        }
    }

    /// Validates the form and stores the profile on the caller's session.
    ///
    /// Checks run in order: consents, phone, name. The first failure is
    /// returned. Only the profile is written; favorites and the picker keep
    /// whatever the session holds once the simulated submission finishes.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] when a check fails
    /// - [`AppError::Timeout`] when the simulated submission outlives the timeout
    /// - [`AppError::Unauthorized`] when the session ended while submitting
    pub async fn complete(&self, ctx: &AuthContext, form: OnboardingForm) -> Result<Profile, AppError> {
        validate(&form)?;

        let profile = Profile {
            role: form.role,
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
        };

        let stored = profile.clone();
        let submit = async {
            tokio::time::sleep(self.latency).await;
            self.sessions
                .update(
                    &ctx.token_hash,
                    Box::new(move |session: &mut Session| -> Result<(), AppError> {
                        session.profile = Some(stored);
                        Ok(())
                    }),
                )
                .await
        };

        tokio::time::timeout(self.timeout, submit)
            .await
            .map_err(|_| {
                AppError::timeout(
                    "요청 시간이 초과되었습니다",
                    json!({ "reason": "onboarding_timed_out" }),
                )
            })??;

        tracing::info!(account = %ctx.account_id(), role = profile.role.label(), "Onboarding completed");
        Ok(profile)
    }
}

fn validate(form: &OnboardingForm) -> Result<(), AppError> {
    if !(form.agree_terms && form.agree_privacy) {
        return Err(AppError::bad_request(
            CONSENT_REQUIRED,
            json!({ "field": "consents" }),
        ));
    }

    let phone = form.phone.trim();
    if phone.chars().count() < MIN_PHONE_LEN || !PHONE_REGEX.is_match(phone) {
        return Err(AppError::bad_request(INVALID_PHONE, json!({ "field": "phone" })));
    }

    if form.name.trim().is_empty() {
        return Err(AppError::bad_request(NAME_REQUIRED, json!({ "field": "name" })));
    }

    Ok(())
}
