//! Authentication module
//!
//! Client-side authentication for the landing page:
//! - Form state machine (validation, submission, error mapping)
//! - Email/password sign-in and account creation via Firebase Auth
//! - Google federated sign-in (OAuth2 code exchange + signInWithIdp)
//!
//! Credential verification and session/token lifecycle are owned by the
//! external identity provider; this module never stores credentials.

pub mod controller;
pub mod firebase;
pub mod models;
pub mod oauth;
pub mod provider;
pub mod validators;

pub use controller::{AuthFormController, ControllerConfig, ControllerEvent};
pub use firebase::{FirebaseAuthClient, FirebaseConfig};
pub use models::*;
pub use oauth::{GoogleOAuth, GoogleOAuthConfig};
pub use provider::{IdentityProvider, ProviderError, ProviderErrorCode};
pub use validators::{
    classify_password_strength, failed_password_rules, validate_email,
    validate_password_for_submission, PasswordStrength, ValidationRule, PASSWORD_RULES,
};
