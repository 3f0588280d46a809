//! Yahoo Finance equity quote provider.
//!
//! Quotes come from the quoteSummary `price` module, which needs a
//! cookie/crumb pair. When that path fails the chart API (through the
//! `yahoo_finance_api` connector) still yields a price, without names.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use lazy_static::lazy_static;
use reqwest::header;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::EquityQuote;
use crate::provider::EquityQuoteProvider;

use models::{YahooPriceDetail, YahooQuoteSummaryResponse};

const PROVIDER_ID: &str = "YAHOO";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

fn provider_error(message: String) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

fn to_decimal(detail: Option<&YahooPriceDetail>) -> Option<Decimal> {
    detail
        .and_then(|d| d.raw)
        .and_then(Decimal::from_f64_retain)
        .map(|d| d.round_dp(4))
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance equity quote provider.
pub struct YahooProvider {
    client: reqwest::Client,
    connector: yahoo::YahooConnector,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| provider_error(format!("Failed to initialize Yahoo connector: {}", e)))?;
        Ok(Self {
            client: reqwest::Client::new(),
            connector,
        })
    }

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Ok(guard) = YAHOO_CRUMB.read() {
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }
        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| provider_error("Failed to parse Yahoo cookie".to_string()))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| provider_error(format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }
        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    /// Fetch the quote from the quoteSummary `price` module.
    async fn fetch_price_summary(&self, ticker: &str) -> Result<EquityQuote, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price&crumb={}",
            encode(ticker),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Quote request failed: {}", e)))?;

        match response.status() {
            reqwest::StatusCode::UNAUTHORIZED => {
                self.clear_crumb();
                return Err(provider_error("Yahoo authentication expired".to_string()));
            }
            reqwest::StatusCode::NOT_FOUND => {
                return Err(MarketDataError::SymbolNotFound(ticker.to_string()));
            }
            _ => {}
        }

        let data: YahooQuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("Failed to parse quote response: {}", e)))?;

        let price = data
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|r| r.price)
            .ok_or_else(|| MarketDataError::SymbolNotFound(ticker.to_string()))?;

        let market_price = to_decimal(price.regular_market_price.as_ref())
            .ok_or_else(|| MarketDataError::SymbolNotFound(ticker.to_string()))?;

        Ok(EquityQuote {
            ticker: ticker.to_string(),
            long_name: price.long_name.map(|n| n.replace("&amp;", "&")),
            short_name: price.short_name,
            price: market_price,
            day_high: to_decimal(price.regular_market_day_high.as_ref()),
            day_low: to_decimal(price.regular_market_day_low.as_ref()),
            previous_close: to_decimal(price.regular_market_previous_close.as_ref()),
        })
    }

    /// Fetch the last daily bar through the chart API.
    async fn fetch_chart_quote(&self, ticker: &str) -> Result<EquityQuote, MarketDataError> {
        let response = self
            .connector
            .get_latest_quotes(ticker, "1d")
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(ticker.to_string())
                } else {
                    provider_error(e.to_string())
                }
            })?;

        let bar = response.last_quote().map_err(|e| {
            warn!("No quotes returned for {}: {}", ticker, e);
            MarketDataError::SymbolNotFound(ticker.to_string())
        })?;

        let close = Decimal::from_f64_retain(bar.close)
            .map(|d| d.round_dp(4))
            .ok_or_else(|| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to convert close price {} to Decimal", bar.close),
            })?;

        Ok(EquityQuote {
            ticker: ticker.to_string(),
            long_name: None,
            short_name: None,
            price: close,
            day_high: Decimal::from_f64_retain(bar.high).map(|d| d.round_dp(4)),
            day_low: Decimal::from_f64_retain(bar.low).map(|d| d.round_dp(4)),
            previous_close: None,
        })
    }
}

#[async_trait]
impl EquityQuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_quote(&self, ticker: &str) -> Result<EquityQuote, MarketDataError> {
        debug!("Fetching latest quote for {} from Yahoo", ticker);

        match self.fetch_price_summary(ticker).await {
            Ok(quote) => return Ok(quote),
            Err(MarketDataError::SymbolNotFound(symbol)) => {
                return Err(MarketDataError::SymbolNotFound(symbol));
            }
            Err(e) => {
                debug!(
                    "quoteSummary fetch failed for {}: {}, trying chart API",
                    ticker, e
                );
            }
        }

        self.fetch_chart_quote(ticker).await
    }
}
