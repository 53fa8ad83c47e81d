//! End-to-end authentication flows through the public API, with a scripted
//! identity provider standing in for Firebase.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assert_matches::assert_matches;

use fast_exchange::auth::{
    AuthFormController, AuthMode, ControllerEvent, EmailValidity, FormField, Identity,
    IdentityProvider, PasswordStrength, ProviderError, ProviderErrorCode, Submission,
};

struct ScriptedProvider {
    calls: AtomicUsize,
    outcome: std::result::Result<Identity, ProviderError>,
}

impl ScriptedProvider {
    fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Ok(Identity {
                uid: "uid-42".to_string(),
                email: "ada@example.com".to_string(),
                display_name: Some("Ada".to_string()),
                id_token: "jwt".to_string(),
            }),
        }
    }

    fn failing(code: ProviderErrorCode, message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            outcome: Err(ProviderError::new(code, message)),
        }
    }

    async fn respond(&self) -> std::result::Result<Identity, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

impl IdentityProvider for ScriptedProvider {
    async fn create_account(
        &self,
        _email: &str,
        _password: &str,
    ) -> std::result::Result<Identity, ProviderError> {
        self.respond().await
    }

    async fn authenticate(
        &self,
        _email: &str,
        _password: &str,
    ) -> std::result::Result<Identity, ProviderError> {
        self.respond().await
    }

    async fn sign_in_federated(&self) -> std::result::Result<Identity, ProviderError> {
        self.respond().await
    }
}

#[tokio::test]
async fn test_full_signup_flow() {
    let provider = Arc::new(ScriptedProvider::succeeding());
    let controller = AuthFormController::new(provider.clone());

    // User lands on sign-in, switches to sign-up.
    controller.toggle_mode().await;
    assert_eq!(controller.snapshot().await.mode, AuthMode::SignUp);

    // Fills the form, watching the derived hints update as they type.
    controller.set_field(FormField::FullName, "Ada Lovelace").await;
    controller.set_field(FormField::Email, "ada@example.com").await;
    controller.set_field(FormField::Password, "S3cure!pw").await;
    controller.set_field(FormField::ConfirmPassword, "S3cure!pw").await;

    let state = controller.snapshot().await;
    assert_eq!(state.email_validity, EmailValidity::Valid);
    assert_eq!(state.password_strength, PasswordStrength::Strong);
    assert_eq!(state.submission, Submission::Idle);

    // Submit reaches the provider exactly once and schedules navigation.
    let event = controller.submit().await;
    assert_matches!(event, Some(ControllerEvent::NavigateAfter(_)));
    assert_eq!(controller.snapshot().await.submission, Submission::Succeeded);
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_signin_with_unknown_account() {
    let provider = Arc::new(ScriptedProvider::failing(
        ProviderErrorCode::UserNotFound,
        "EMAIL_NOT_FOUND",
    ));
    let controller = AuthFormController::new(provider);

    controller.set_field(FormField::Email, "ghost@example.com").await;
    controller.set_field(FormField::Password, "S3cure!pw").await;

    assert_eq!(controller.submit().await, None);
    assert_eq!(
        controller.snapshot().await.submission,
        Submission::Failed("No account found with this email.".to_string())
    );
}

#[tokio::test]
async fn test_validation_blocks_before_provider() {
    let provider = Arc::new(ScriptedProvider::succeeding());
    let controller = AuthFormController::new(provider.clone());

    // Sign-up with a strong password but mismatched confirmation.
    controller.toggle_mode().await;
    controller.set_field(FormField::Email, "ada@example.com").await;
    controller.set_field(FormField::Password, "S3cure!pw").await;
    controller.set_field(FormField::ConfirmPassword, "S3cure!pw2").await;

    controller.submit().await;
    assert_eq!(
        controller.snapshot().await.submission,
        Submission::Failed("Passwords do not match.".to_string())
    );
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);

    // Fixing the confirmation lets the attempt through.
    controller.set_field(FormField::ConfirmPassword, "S3cure!pw").await;
    assert_matches!(
        controller.submit().await,
        Some(ControllerEvent::NavigateAfter(_))
    );
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_federated_flow_reports_prefixed_errors() {
    let provider = Arc::new(ScriptedProvider::failing(
        ProviderErrorCode::Other,
        "access denied",
    ));
    let controller = AuthFormController::new(provider);

    assert_eq!(controller.sign_in_federated().await, None);
    assert_eq!(
        controller.snapshot().await.submission,
        Submission::Failed("Google sign-in: access denied".to_string())
    );
}
