//! mfapi.in mutual fund NAV provider.
//!
//! Endpoint: `GET {base}/mf/{scheme_code}`. The response carries scheme
//! metadata and the NAV history, newest entry first.

mod models;

use std::str::FromStr;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::FundNav;
use crate::provider::FundNavProvider;

use models::MfApiResponse;

const PROVIDER_ID: &str = "MFAPI";

/// Default mfapi.in base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.mfapi.in";

/// mfapi.in NAV provider.
pub struct MfApiProvider {
    client: Client,
    base_url: String,
}

impl MfApiProvider {
    /// Create a provider against the public mfapi.in service.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against another base URL (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn invalid(message: impl Into<String>) -> MarketDataError {
        MarketDataError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: message.into(),
        }
    }
}

impl Default for MfApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FundNavProvider for MfApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_nav(&self, scheme_code: &str) -> Result<FundNav, MarketDataError> {
        let url = format!(
            "{}/mf/{}",
            self.base_url,
            urlencoding::encode(scheme_code)
        );
        debug!("Fetching NAV for scheme {} from {}", scheme_code, url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).map_err(|e| {
            let preview: String = text.chars().take(100).collect();
            warn!("mfapi.in returned non-JSON body: {} ({})", e, preview);
            Self::invalid(format!("Invalid JSON: {}", e))
        })?;

        if let Some(error) = body.get("error") {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(MarketDataError::Rejected {
                provider: PROVIDER_ID.to_string(),
                message,
            });
        }

        let parsed: MfApiResponse =
            serde_json::from_value(body).map_err(|e| Self::invalid(e.to_string()))?;

        let latest = parsed
            .data
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(scheme_code.to_string()))?;

        let nav = Decimal::from_str(latest.nav.trim())
            .map_err(|e| Self::invalid(format!("Invalid NAV '{}': {}", latest.nav, e)))?;

        let meta = parsed.meta;
        Ok(FundNav {
            scheme_code: scheme_code.to_string(),
            scheme_name: meta.scheme_name.unwrap_or_else(|| "Unknown".to_string()),
            fund_type: meta.scheme_type.unwrap_or_else(|| "Unknown".to_string()),
            fund_category: meta.scheme_category.unwrap_or_default(),
            nav,
            date: latest.date,
        })
    }
}
