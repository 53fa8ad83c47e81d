//! Authentication form controller
//!
//! Owns the form state and orchestrates validation and submission against an
//! injected identity provider. All mutations run to completion in response to
//! a single event; only the provider call suspends, and at most one
//! submission is in flight at a time. Every failure lands in
//! `Submission::Failed` with a user-facing message and the user can edit the
//! fields and retry; there is no automatic retry.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::models::{AuthMode, EmailValidity, FormField, FormState, Identity, Submission};
use super::provider::{IdentityProvider, ProviderError, ProviderErrorCode};
use super::validators::{
    classify_password_strength, validate_email, validate_password_for_submission,
};

/// Message for an email that fails the shape check
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Message for a password that fails the submission gate
pub const WEAK_PASSWORD_MESSAGE: &str =
    "Password must be at least 8 characters with uppercase, lowercase, number and special character.";

/// Message for a sign-up confirm-password mismatch
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Prefix distinguishing federated sign-in failures from the password flow
const FEDERATED_PREFIX: &str = "Google sign-in: ";

/// Output event emitted by the controller.
///
/// Navigation after success is an explicit event rather than an embedded
/// timer, so the consumer schedules the redirect and tests assert the delay
/// without a real clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerEvent {
    NavigateAfter(Duration),
}

/// Controller tuning; the redirect delay is a UX parameter, not a
/// correctness requirement.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    pub redirect_delay: Duration,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            redirect_delay: Duration::from_millis(1800),
        }
    }
}

/// Client-side authentication form controller.
///
/// Clones share the same form state; the provider is injected so tests can
/// substitute a fake.
#[derive(Clone)]
pub struct AuthFormController<P> {
    provider: P,
    state: Arc<RwLock<FormState>>,
    config: ControllerConfig,
}

impl<P: IdentityProvider> AuthFormController<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ControllerConfig::default())
    }

    pub fn with_config(provider: P, config: ControllerConfig) -> Self {
        Self {
            provider,
            state: Arc::new(RwLock::new(FormState::new())),
            config,
        }
    }

    /// Read-only copy of the current form state for the presentation layer.
    pub async fn snapshot(&self) -> FormState {
        self.state.read().await.clone()
    }

    /// Update one field and synchronously recompute the derived state.
    pub async fn set_field(&self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        let mut state = self.state.write().await;
        match field {
            FormField::Email => {
                state.email = value;
                state.email_validity = if state.email.is_empty() {
                    EmailValidity::Unknown
                } else if validate_email(&state.email) {
                    EmailValidity::Valid
                } else {
                    EmailValidity::Invalid
                };
            }
            FormField::Password => {
                state.password = value;
                state.password_strength = classify_password_strength(&state.password);
            }
            FormField::ConfirmPassword => state.confirm_password = value,
            FormField::FullName => state.full_name = value,
        }
    }

    /// Flip between sign-in and sign-up.
    ///
    /// Field values persist across the toggle; a settled submission outcome
    /// is cleared. An in-flight attempt keeps its guard so a toggle cannot
    /// open the door to a second concurrent submission.
    pub async fn toggle_mode(&self) {
        let mut state = self.state.write().await;
        state.mode = match state.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        if !state.submission.is_in_flight() {
            state.submission = Submission::Idle;
        }
    }

    /// Validate the form and submit the credentials to the provider.
    ///
    /// A duplicate call while a submission is in flight is a no-op, not a
    /// cancel-and-retry. Validation failures never reach the provider.
    pub async fn submit(&self) -> Option<ControllerEvent> {
        let (mode, email, password) = {
            let mut state = self.state.write().await;
            if state.submission.is_in_flight() {
                log::debug!("submit ignored: a submission is already in flight");
                return None;
            }
            if let Some(reason) = first_validation_failure(&state) {
                state.submission = Submission::Failed(reason.to_string());
                return None;
            }
            state.submission = Submission::InFlight;
            (state.mode, state.email.clone(), state.password.clone())
        };

        log::debug!("submitting {} credentials", mode.as_str());
        let result = match mode {
            AuthMode::SignUp => self.provider.create_account(&email, &password).await,
            AuthMode::SignIn => self.provider.authenticate(&email, &password).await,
        };

        self.finish_attempt(result, None).await
    }

    /// Sign in through the provider's federated flow.
    ///
    /// Bypasses local field validation entirely; the provider owns the whole
    /// interaction.
    pub async fn sign_in_federated(&self) -> Option<ControllerEvent> {
        {
            let mut state = self.state.write().await;
            if state.submission.is_in_flight() {
                log::debug!("federated sign-in ignored: a submission is already in flight");
                return None;
            }
            state.submission = Submission::InFlight;
        }

        let result = self.provider.sign_in_federated().await;
        self.finish_attempt(result, Some(FEDERATED_PREFIX)).await
    }

    async fn finish_attempt(
        &self,
        result: Result<Identity, ProviderError>,
        prefix: Option<&str>,
    ) -> Option<ControllerEvent> {
        let mut state = self.state.write().await;
        match result {
            Ok(identity) => {
                log::info!("authenticated uid {}", identity.uid);
                state.submission = Submission::Succeeded;
                Some(ControllerEvent::NavigateAfter(self.config.redirect_delay))
            }
            Err(err) => {
                log::warn!("authentication failed: {err}");
                let message = friendly_message(&err);
                state.submission = Submission::Failed(match prefix {
                    Some(p) => format!("{p}{message}"),
                    None => message,
                });
                None
            }
        }
    }
}

/// Synchronous pre-flight validation, short-circuiting on the first failure.
fn first_validation_failure(state: &FormState) -> Option<&'static str> {
    if !validate_email(&state.email) {
        return Some(INVALID_EMAIL_MESSAGE);
    }
    if !validate_password_for_submission(&state.password) {
        return Some(WEAK_PASSWORD_MESSAGE);
    }
    if state.mode == AuthMode::SignUp && state.password != state.confirm_password {
        return Some(PASSWORD_MISMATCH_MESSAGE);
    }
    None
}

/// Map recognized provider error codes to friendly copy; anything else keeps
/// the provider's raw message.
fn friendly_message(err: &ProviderError) -> String {
    match err.code {
        ProviderErrorCode::EmailAlreadyInUse => "This email is already registered.".to_string(),
        ProviderErrorCode::UserNotFound => "No account found with this email.".to_string(),
        ProviderErrorCode::WrongPassword => "Incorrect password. Please try again.".to_string(),
        ProviderErrorCode::Other => err.message.clone(),
    }
}
