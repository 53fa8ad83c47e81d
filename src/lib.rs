//! # FastExchange Client Core
//!
//! Client-side core for the FastExchange landing experience.
//!
//! ## Features
//!
//! - **Auth**: form state machine with validation, email/password sign-in and
//!   account creation via Firebase Auth, Google federated sign-in
//! - **Ticker**: live crypto quotes polled from a public price feed with a
//!   stale-read-on-error policy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fast_exchange::{
//!     auth::{AuthFormController, FirebaseAuthClient, FirebaseConfig},
//!     ticker::{CoinGeckoFeed, TickerService},
//! };
//!
//! let provider = FirebaseAuthClient::new(FirebaseConfig::new("api-key"));
//! let controller = AuthFormController::new(provider);
//! let ticker = TickerService::new(CoinGeckoFeed::new());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Authentication: validators, form controller, identity providers
pub mod auth;

/// Live price ticker: feed clients and poll service
pub mod ticker;

/// Logger initialization for the binary
pub mod logging;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the FastExchange client core
#[derive(Debug, thiserror::Error)]
pub enum FastExchangeError {
    #[error("Auth error: {0}")]
    Auth(String),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Logging error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<auth::ProviderError> for FastExchangeError {
    fn from(err: auth::ProviderError) -> Self {
        FastExchangeError::Auth(err.to_string())
    }
}

impl From<ticker::FeedError> for FastExchangeError {
    fn from(err: ticker::FeedError) -> Self {
        FastExchangeError::Feed(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FastExchangeError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
