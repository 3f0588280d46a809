//! HTTP client for the dashboard's lookup endpoints.
//!
//! One request per search, no retries, no persistence. Responses are checked
//! in a fixed order: status, content type, JSON body, `error` field, shape.

use async_trait::async_trait;
use tracing::{debug, error};
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::LookupError;
use crate::models::{FundSearchResponse, LookupResult, StockInfoResponse};
use crate::resolver::DEFAULT_EXCHANGE;

const STOCK_INFO_PATH: &str = "/api/get_stock_info";
const FUND_SEARCH_PATH: &str = "/api/mutual-fund/search";

/// Looks up current prices and NAVs.
#[async_trait]
pub trait PriceLookupTrait: Send + Sync {
    /// Latest quote for `symbol` on `exchange` (blank means NSE).
    async fn search_equity(&self, symbol: &str, exchange: &str)
        -> Result<LookupResult, LookupError>;

    /// Latest NAV for a mutual fund scheme.
    async fn search_fund(&self, scheme_code: &str) -> Result<LookupResult, LookupError>;
}

/// [`PriceLookupTrait`] over the backend's HTTP endpoints.
#[derive(Clone)]
pub struct HttpLookupClient {
    client: Client,
    base_url: String,
}

impl HttpLookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn an endpoint response into `T`, or the matching [`LookupError`].
async fn decode_response<T: DeserializeOwned>(
    response: Response,
    not_found_message: impl FnOnce() -> String,
) -> Result<T, LookupError> {
    let status = response.status();
    if !status.is_success() {
        return Err(match status {
            StatusCode::NOT_FOUND => LookupError::NotFound(not_found_message()),
            StatusCode::INTERNAL_SERVER_ERROR => LookupError::Server,
            other => LookupError::Status(other.as_u16()),
        });
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    if !is_json {
        return Err(LookupError::NonJson);
    }

    let text = response.text().await?;
    let body: Value = serde_json::from_str(&text).map_err(|_| LookupError::NonJson)?;

    if let Some(message) = body.get("error") {
        let message = match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        return Err(LookupError::Logical(message));
    }

    serde_json::from_value(body).map_err(|e| LookupError::InvalidPayload(e.to_string()))
}

#[async_trait]
impl PriceLookupTrait for HttpLookupClient {
    async fn search_equity(
        &self,
        symbol: &str,
        exchange: &str,
    ) -> Result<LookupResult, LookupError> {
        let exchange = if exchange.trim().is_empty() {
            DEFAULT_EXCHANGE
        } else {
            exchange.trim()
        };
        debug!("Looking up stock {} on {}", symbol, exchange);

        let response = self
            .client
            .get(self.url(STOCK_INFO_PATH))
            .query(&[("symbol", symbol), ("exchange", exchange)])
            .send()
            .await?;

        let body: StockInfoResponse = decode_response(response, || {
            format!("Stock symbol {} not found on {}.", symbol, exchange)
        })
        .await
        .map_err(|e| {
            error!("Stock lookup for {} failed: {}", symbol, e);
            e
        })?;

        Ok(body.into())
    }

    async fn search_fund(&self, scheme_code: &str) -> Result<LookupResult, LookupError> {
        debug!("Looking up mutual fund scheme {}", scheme_code);

        let response = self
            .client
            .get(self.url(FUND_SEARCH_PATH))
            .query(&[("scheme_code", scheme_code)])
            .send()
            .await?;

        let body: FundSearchResponse = decode_response(response, || {
            format!("Scheme code {} not found.", scheme_code)
        })
        .await
        .map_err(|e| {
            error!("Fund lookup for {} failed: {}", scheme_code, e);
            e
        })?;

        Ok(body.into())
    }
}
