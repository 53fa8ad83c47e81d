//! Live price ticker
//!
//! Cosmetic quotes for the landing page: a fixed asset list polled from a
//! public read-only price endpoint on a naive interval, with seeded
//! placeholder values until the first successful poll and stale reads on
//! feed failure.

pub mod feed;
pub mod service;

pub use feed::{default_assets, Asset, CoinGeckoFeed, FeedError, PriceFeed, Quote};
pub use service::{TickerConfig, TickerService, TickerState};
