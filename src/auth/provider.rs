//! Identity provider seam
//!
//! The external identity service is injected into the controller as a
//! capability, so tests substitute a fake and the production wiring picks the
//! Firebase client. Every operation resolves exactly once; there is no
//! cancellation and no controller-side timeout.

use std::future::Future;
use std::sync::Arc;

use super::models::Identity;

/// Provider error codes the controller knows how to phrase.
///
/// The enumeration is open-ended on the provider side; anything unrecognized
/// arrives as `Other` with the provider's raw message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorCode {
    EmailAlreadyInUse,
    UserNotFound,
    WrongPassword,
    Other,
}

/// Error returned by an identity provider operation
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: ProviderErrorCode,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: ProviderErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ProviderErrorCode::Other, message)
    }
}

/// External identity provider
pub trait IdentityProvider {
    /// Create a new account with email/password credentials.
    fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, ProviderError>> + Send;

    /// Sign in with email/password credentials.
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, ProviderError>> + Send;

    /// Sign in through the provider's federated flow (Google).
    fn sign_in_federated(&self) -> impl Future<Output = Result<Identity, ProviderError>> + Send;
}

impl<P: IdentityProvider + Send + Sync> IdentityProvider for Arc<P> {
    fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, ProviderError>> + Send {
        (**self).create_account(email, password)
    }

    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Identity, ProviderError>> + Send {
        (**self).authenticate(email, password)
    }

    fn sign_in_federated(&self) -> impl Future<Output = Result<Identity, ProviderError>> + Send {
        (**self).sign_in_federated()
    }
}
