//! Price feed clients
//!
//! `PriceFeed` is the seam the ticker service polls through; the production
//! implementation reads the public CoinGecko simple/price endpoint.

use std::collections::HashMap;
use std::future::Future;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

const DEFAULT_ENDPOINT: &str = "https://api.coingecko.com/api/v3";

/// Price feed errors
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("Feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed returned no usable quotes")]
    Empty,
}

/// One displayed quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price: f64,
    pub change_24h: f64,
}

/// A tracked asset: feed identifier plus the display pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub symbol: String,
}

impl Asset {
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// The eight pairs shown on the landing page ticker.
pub fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new("bitcoin", "BTC/USD"),
        Asset::new("ethereum", "ETH/USD"),
        Asset::new("binancecoin", "BNB/USD"),
        Asset::new("solana", "SOL/USD"),
        Asset::new("cardano", "ADA/USD"),
        Asset::new("ripple", "XRP/USD"),
        Asset::new("dogecoin", "DOGE/USD"),
        Asset::new("litecoin", "LTC/USD"),
    ]
}

/// Periodic pull source for quotes, keyed by display symbol
pub trait PriceFeed {
    fn fetch_quotes(
        &self,
        assets: &[Asset],
    ) -> impl Future<Output = Result<HashMap<String, Quote>, FeedError>> + Send;
}

/// CoinGecko public API feed
pub struct CoinGeckoFeed {
    endpoint: String,
    http_client: HttpClient,
}

impl CoinGeckoFeed {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: HttpClient::new(),
        }
    }
}

impl Default for CoinGeckoFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    usd: f64,
    usd_24h_change: Option<f64>,
}

impl PriceFeed for CoinGeckoFeed {
    async fn fetch_quotes(&self, assets: &[Asset]) -> Result<HashMap<String, Quote>, FeedError> {
        let ids: Vec<&str> = assets.iter().map(|a| a.id.as_str()).collect();
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.endpoint,
            ids.join(",")
        );

        let response: HashMap<String, RawQuote> = self
            .http_client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut quotes = HashMap::new();
        for asset in assets {
            match response.get(&asset.id) {
                Some(raw) => {
                    quotes.insert(
                        asset.symbol.clone(),
                        Quote {
                            price: raw.usd,
                            change_24h: raw.usd_24h_change.unwrap_or(0.0),
                        },
                    );
                }
                None => log::warn!("feed returned no quote for {}", asset.symbol),
            }
        }

        if quotes.is_empty() {
            return Err(FeedError::Empty);
        }
        Ok(quotes)
    }
}
