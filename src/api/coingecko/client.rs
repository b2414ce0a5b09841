use reqwest::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use super::models::{ApiError, ErrorResponse, MarketChart};
use tracing::{debug, warn};

/// CoinGecko API client for historical market data
pub struct CoinGeckoClient {
    http_client: HttpClient,
    api_key: Option<String>,
    base_url: String,
}

impl CoinGeckoClient {
    pub const PUBLIC_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";
    pub const PRO_BASE_URL: &'static str = "https://pro-api.coingecko.com/api/v3";

    /// Create a client for the public API
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: None,
            base_url: Self::PUBLIC_BASE_URL.to_string(),
        }
    }

    /// Create a client for the pro API
    pub fn with_api_key(api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: Some(api_key),
            base_url: Self::PRO_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (for testing or proxies)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ApiError::RequestError(format!("Invalid API key header: {}", e)))?;
            headers.insert("x-cg-pro-api-key", value);
        }

        Ok(headers)
    }

    /// URL for GET /coins/{id}/market_chart/range
    pub fn market_chart_range_url(&self, coin_id: &str, vs_currency: &str, from: i64, to: i64) -> String {
        format!(
            "{}/coins/{}/market_chart/range?vs_currency={}&from={}&to={}",
            self.base_url, coin_id, vs_currency, from, to
        )
    }

    /// Map a non-success response to an `ApiError`
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());
        let body_text = response.text().await.unwrap_or_default();
        Self::map_error(status_code, retry_after, body_text)
    }

    /// Turn a status code, `Retry-After` seconds and raw body into an `ApiError`
    fn map_error(status_code: u16, retry_after: Option<u64>, body_text: String) -> ApiError {
        let message = serde_json::from_str::<ErrorResponse>(&body_text)
            .ok()
            .and_then(|err| err.message().map(str::to_string))
            .unwrap_or(body_text);

        match status_code {
            400 => ApiError::BadRequest(message),
            401 | 403 => ApiError::Unauthorized(message),
            404 => ApiError::NotFound(message),
            429 => {
                warn!("Rate limited by CoinGecko, retry after {:?} s", retry_after);
                ApiError::RateLimited { retry_after }
            }
            500..=599 => {
                warn!("Server error {}: {}", status_code, message);
                ApiError::ServerError(status_code as i32, message)
            }
            _ => ApiError::HttpError(status_code as i32, message),
        }
    }

    /// GET /coins/{id}/market_chart/range
    ///
    /// Retrieves price, market cap and volume history between two Unix timestamps.
    /// CoinGecko picks the granularity from the range length: hourly points for
    /// 1-90 days, daily points at 00:00 UTC beyond that.
    ///
    /// # Arguments
    /// * `coin_id` - CoinGecko coin id, e.g. `bitcoin`
    /// * `vs_currency` - Reference currency, e.g. `eur`
    /// * `from` - Range start in epoch seconds
    /// * `to` - Range end in epoch seconds
    pub async fn get_market_chart_range(
        &self,
        coin_id: &str,
        vs_currency: &str,
        from: i64,
        to: i64,
    ) -> Result<MarketChart, ApiError> {
        let url = self.market_chart_range_url(coin_id, vs_currency, from, to);
        let headers = self.create_headers()?;
        debug!("GET {}", url);

        let response = self.http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<MarketChart>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}
