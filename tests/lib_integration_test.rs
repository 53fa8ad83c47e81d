//! Integration tests for the FastExchange library public API

use fast_exchange::auth::{ProviderError, ProviderErrorCode};
use fast_exchange::ticker::{FeedError, TickerConfig};
use fast_exchange::{FastExchangeError, Result, DESCRIPTION, NAME, VERSION};
use std::time::Duration;

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "fast_exchange");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let auth_error = FastExchangeError::Auth("test auth error".to_string());
    assert!(matches!(auth_error, FastExchangeError::Auth(_)));

    let feed_error = FastExchangeError::Feed("test feed error".to_string());
    assert!(matches!(feed_error, FastExchangeError::Feed(_)));
}

#[test]
fn test_error_conversions() {
    let provider_err = ProviderError::new(ProviderErrorCode::UserNotFound, "EMAIL_NOT_FOUND");
    let converted: FastExchangeError = provider_err.into();
    assert!(matches!(converted, FastExchangeError::Auth(_)));
    assert_eq!(converted.to_string(), "Auth error: EMAIL_NOT_FOUND");

    let feed_err: FastExchangeError = FeedError::Empty.into();
    assert!(matches!(feed_err, FastExchangeError::Feed(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert!(success.is_ok());

    let failure: Result<i32> = Err(FastExchangeError::Auth("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_ticker_config_defaults() {
    let config = TickerConfig::default();
    assert_eq!(config.poll_interval, Duration::from_secs(4));
    assert_eq!(config.assets.len(), 8);
}
