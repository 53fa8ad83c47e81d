use clap::Parser;
use std::time::Duration;

use fast_exchange::auth::{FirebaseAuthClient, FirebaseConfig, GoogleOAuthConfig};
use fast_exchange::logging::setup_logging;
use fast_exchange::ticker::{default_assets, CoinGeckoFeed, TickerConfig, TickerService, TickerState};

#[derive(Parser, Debug)]
#[command(name = "fast_exchange")]
struct Config {
    /// Seconds between price feed polls
    #[arg(short = 'i', long, default_value_t = 4)]
    poll_interval: u64,

    /// Poll the feed once, print the quotes and exit
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Enable the Firebase authentication client
    #[arg(long, default_value_t = true)]
    enable_auth: bool,
}

fn log_quotes(state: &TickerState) {
    for (symbol, quote) in &state.quotes {
        log::info!(
            "{} ${:.2} ({}{:.1}%)",
            symbol,
            quote.price,
            if quote.change_24h >= 0.0 { "+" } else { "" },
            quote.change_24h
        );
    }
}

#[tokio::main]
async fn main() -> fast_exchange::Result<()> {
    let config = Config::parse();

    let _logger = setup_logging("info")?;

    if config.enable_auth {
        match FirebaseConfig::from_env() {
            Some(firebase) => {
                let _client = FirebaseAuthClient::new(firebase);
                if GoogleOAuthConfig::from_env().is_configured() {
                    log::info!("🔐 Firebase auth configured (Google sign-in available)");
                } else {
                    log::info!("🔐 Firebase auth configured (email/password only)");
                }
            }
            None => log::warn!("⚠️ FIREBASE_API_KEY not set, continuing without auth"),
        }
    } else {
        log::info!("ℹ️ Authentication disabled");
    }

    let ticker_config = TickerConfig {
        poll_interval: Duration::from_secs(config.poll_interval),
        assets: default_assets(),
    };
    let ticker = TickerService::with_config(CoinGeckoFeed::new(), ticker_config);

    if config.once {
        ticker.poll_once().await?;
        log_quotes(&ticker.snapshot().await);
        return Ok(());
    }

    log::info!("📈 Ticker polling every {}s", config.poll_interval);

    let poller = ticker.clone();
    tokio::spawn(async move { poller.run().await });

    let mut display = tokio::time::interval(Duration::from_secs(config.poll_interval));
    loop {
        display.tick().await;
        log_quotes(&ticker.snapshot().await);
    }
}
