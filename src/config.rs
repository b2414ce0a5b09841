use std::env;

use crate::api::coingecko::CoinGeckoClient;

/// Runtime settings read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    /// CoinGecko pro key. `None` uses the public API.
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub chart_width: u32,
    pub chart_height: u32,
}

fn env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_u32(name: &str, default: u32) -> u32 {
    env_opt(name)
        .and_then(|s| s.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

impl Config {
    pub const DEFAULT_CHART_WIDTH: u32 = 1280;
    pub const DEFAULT_CHART_HEIGHT: u32 = 720;

    pub fn from_env() -> Self {
        Self {
            api_key: env_opt("COINGECKO_API_KEY"),
            base_url: env_opt("COINGECKO_BASE_URL"),
            chart_width: env_u32("BTC_TREND_CHART_WIDTH", Self::DEFAULT_CHART_WIDTH),
            chart_height: env_u32("BTC_TREND_CHART_HEIGHT", Self::DEFAULT_CHART_HEIGHT),
        }
    }

    /// Build the provider client these settings describe
    pub fn client(&self) -> CoinGeckoClient {
        let client = match &self.api_key {
            Some(key) => CoinGeckoClient::with_api_key(key.clone()),
            None => CoinGeckoClient::new(),
        };

        match &self.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            chart_width: Self::DEFAULT_CHART_WIDTH,
            chart_height: Self::DEFAULT_CHART_HEIGHT,
        }
    }
}
