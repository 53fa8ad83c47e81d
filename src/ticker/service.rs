//! Ticker poll service
//!
//! Shared snapshot state behind `Arc<RwLock>`; the poll loop replaces the
//! whole quote set on success and keeps the previous values on failure
//! (stale-read-on-error). Consumers only read snapshots.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::feed::{default_assets, Asset, FeedError, PriceFeed, Quote};

/// Ticker configuration
#[derive(Debug, Clone)]
pub struct TickerConfig {
    pub poll_interval: Duration,
    pub assets: Vec<Asset>,
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(4),
            assets: default_assets(),
        }
    }
}

/// Current displayed quotes; `last_updated` is None until the first
/// successful poll.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerState {
    pub quotes: HashMap<String, Quote>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl TickerState {
    /// Placeholder quotes shown until live data arrives.
    pub fn seeded() -> Self {
        let placeholders = [
            ("BTC/USD", 67_842.15, 2.4),
            ("ETH/USD", 3_254.30, 1.9),
            ("BNB/USD", 592.60, -0.5),
            ("SOL/USD", 162.45, 3.2),
            ("ADA/USD", 0.457, -1.1),
            ("XRP/USD", 0.622, 0.8),
            ("DOGE/USD", 0.152, 4.5),
            ("LTC/USD", 83.72, -0.9),
        ];

        let quotes = placeholders
            .into_iter()
            .map(|(symbol, price, change_24h)| {
                (symbol.to_string(), Quote { price, change_24h })
            })
            .collect();

        Self {
            quotes,
            last_updated: None,
        }
    }
}

/// Polls a price feed on an interval and exposes read-only snapshots.
pub struct TickerService<F> {
    feed: Arc<F>,
    state: Arc<RwLock<TickerState>>,
    config: TickerConfig,
}

impl<F> Clone for TickerService<F> {
    fn clone(&self) -> Self {
        Self {
            feed: Arc::clone(&self.feed),
            state: Arc::clone(&self.state),
            config: self.config.clone(),
        }
    }
}

impl<F: PriceFeed> TickerService<F> {
    pub fn new(feed: F) -> Self {
        Self::with_config(feed, TickerConfig::default())
    }

    pub fn with_config(feed: F, config: TickerConfig) -> Self {
        Self {
            feed: Arc::new(feed),
            state: Arc::new(RwLock::new(TickerState::seeded())),
            config,
        }
    }

    /// Read-only copy of the current quotes.
    pub async fn snapshot(&self) -> TickerState {
        self.state.read().await.clone()
    }

    /// Fetch once and replace the quote set on success. On failure the
    /// previous quotes stay in place and the error is returned.
    pub async fn poll_once(&self) -> Result<(), FeedError> {
        let quotes = self.feed.fetch_quotes(&self.config.assets).await?;
        let mut state = self.state.write().await;
        state.quotes = quotes;
        state.last_updated = Some(Utc::now());
        Ok(())
    }

    /// Poll forever on the configured interval, logging failures and keeping
    /// the last quotes on display.
    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.config.poll_interval);
        loop {
            interval.tick().await;
            if let Err(e) = self.poll_once().await {
                log::warn!("price feed poll failed ({e}), keeping last quotes");
            }
        }
    }
}
