//! Firebase Auth REST client
//!
//! Implements the three operations the landing page delegates to Firebase:
//! account creation (`accounts:signUp`), email/password sign-in
//! (`accounts:signInWithPassword`) and Google federated sign-in
//! (`accounts:signInWithIdp`). Firebase owns credential verification and the
//! session/token lifecycle; this client only maps its error strings onto
//! [`ProviderErrorCode`].

use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use super::models::Identity;
use super::provider::{IdentityProvider, ProviderError, ProviderErrorCode};

const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

/// Firebase project configuration
#[derive(Clone)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl FirebaseConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn from_env() -> Option<Self> {
        Some(Self {
            api_key: std::env::var("FIREBASE_API_KEY").ok()?,
            endpoint: std::env::var("FIREBASE_AUTH_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

/// Identity provider backed by the Firebase Auth REST API
pub struct FirebaseAuthClient {
    config: FirebaseConfig,
    http_client: HttpClient,
    google_token: Option<String>,
}

impl FirebaseAuthClient {
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            config,
            http_client: HttpClient::new(),
            google_token: None,
        }
    }

    /// Attach a Google OAuth access token obtained from a completed
    /// [`GoogleOAuth`](super::oauth::GoogleOAuth) flow, enabling
    /// `sign_in_federated`.
    pub fn with_google_token(mut self, token: impl Into<String>) -> Self {
        self.google_token = Some(token.into());
        self
    }

    async fn call(
        &self,
        operation: &str,
        body: serde_json::Value,
    ) -> Result<Identity, ProviderError> {
        let url = format!(
            "{}/accounts:{}?key={}",
            self.config.endpoint, operation, self.config.api_key
        );

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::other(format!("Network error: {e}")))?;

        if response.status().is_success() {
            let payload: AuthPayload = response
                .json()
                .await
                .map_err(|e| ProviderError::other(format!("Malformed provider response: {e}")))?;
            Ok(payload.into_identity())
        } else {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            log::warn!("firebase {operation} rejected: {}", body.error.message);
            Err(map_error_string(&body.error.message))
        }
    }
}

impl IdentityProvider for FirebaseAuthClient {
    async fn create_account(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.call(
            "signUp",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Identity, ProviderError> {
        self.call(
            "signInWithPassword",
            json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    async fn sign_in_federated(&self) -> Result<Identity, ProviderError> {
        let token = self
            .google_token
            .as_ref()
            .ok_or_else(|| ProviderError::other("Google sign-in is not configured"))?;

        self.call(
            "signInWithIdp",
            json!({
                "postBody": format!("access_token={token}&providerId=google.com"),
                "requestUri": "http://localhost",
                "returnSecureToken": true,
            }),
        )
        .await
    }
}

/// Successful response body shared by the three account operations
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthPayload {
    local_id: String,
    #[serde(default)]
    email: String,
    display_name: Option<String>,
    id_token: String,
}

impl AuthPayload {
    fn into_identity(self) -> Identity {
        Identity {
            uid: self.local_id,
            email: self.email,
            display_name: self.display_name,
            id_token: self.id_token,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: ErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// Map a Firebase error string onto a provider error code.
///
/// Firebase appends detail to some messages ("WEAK_PASSWORD : Password should
/// be at least 6 characters"), so only the leading token is matched.
fn map_error_string(message: &str) -> ProviderError {
    let head = message.split_whitespace().next().unwrap_or(message);
    let code = match head {
        "EMAIL_EXISTS" => ProviderErrorCode::EmailAlreadyInUse,
        "EMAIL_NOT_FOUND" => ProviderErrorCode::UserNotFound,
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => ProviderErrorCode::WrongPassword,
        _ => ProviderErrorCode::Other,
    };
    ProviderError::new(code, message)
}
