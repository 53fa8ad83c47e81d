//! Google OAuth2 flow for federated sign-in
//!
//! The browser pop-up dance belongs to the shell: it opens the authorization
//! URL, collects the redirected code and exchanges it here for an access
//! token, which then feeds `FirebaseAuthClient::with_google_token` so
//! `signInWithIdp` can complete.

use oauth2::{
    basic::BasicClient, AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use reqwest::Client as HttpClient;

use super::provider::ProviderError;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

type ConfiguredClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Google OAuth application credentials
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_base_url: String,
}

impl GoogleOAuthConfig {
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("GOOGLE_CLIENT_ID").ok(),
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET").ok(),
            redirect_base_url: std::env::var("OAUTH_REDIRECT_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.client_id.is_some() && self.client_secret.is_some()
    }
}

/// Google OAuth helper
pub struct GoogleOAuth {
    config: GoogleOAuthConfig,
    http_client: HttpClient,
}

impl GoogleOAuth {
    pub fn new(config: GoogleOAuthConfig) -> Result<Self, ProviderError> {
        // The token exchange client must not follow redirects.
        let http_client = HttpClient::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ProviderError::other(format!("HTTP client error: {e}")))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Authorization URL to open in the browser, with the CSRF token the
    /// shell must verify on the callback.
    pub fn authorize_url(&self) -> Result<(String, CsrfToken), ProviderError> {
        let client = self.create_client()?;

        let (url, csrf_token) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        Ok((url.to_string(), csrf_token))
    }

    /// Exchange the authorization code from the callback for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<String, ProviderError> {
        let client = self.create_client()?;

        let token = client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.http_client)
            .await
            .map_err(|e| ProviderError::other(format!("Token exchange failed: {e}")))?;

        Ok(token.access_token().secret().clone())
    }

    fn create_client(&self) -> Result<ConfiguredClient, ProviderError> {
        let client_id = self
            .config
            .client_id
            .as_ref()
            .ok_or_else(|| ProviderError::other("Google client ID not configured"))?;
        let client_secret = self
            .config
            .client_secret
            .as_ref()
            .ok_or_else(|| ProviderError::other("Google client secret not configured"))?;

        let redirect_url = format!("{}/auth/callback/google", self.config.redirect_base_url);

        Ok(BasicClient::new(ClientId::new(client_id.clone()))
            .set_client_secret(ClientSecret::new(client_secret.clone()))
            .set_auth_uri(
                AuthUrl::new(GOOGLE_AUTH_URL.to_string())
                    .map_err(|e| ProviderError::other(e.to_string()))?,
            )
            .set_token_uri(
                TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
                    .map_err(|e| ProviderError::other(e.to_string()))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(redirect_url).map_err(|e| ProviderError::other(e.to_string()))?,
            ))
    }
}
