use std::sync::Arc;
use std::time::Duration;

use holdfolio_market_data::{EquityQuoteProvider, FundNavProvider, MfApiProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{Config, IdentityClientConfig};

pub struct AppState {
    pub equity_provider: Arc<dyn EquityQuoteProvider>,
    pub fund_provider: Arc<dyn FundNavProvider>,
    pub identity: IdentityClientConfig,
    pub quote_timeout: Duration,
}

pub fn init_tracing() {
    let log_format = std::env::var("HF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let equity_provider: Arc<dyn EquityQuoteProvider> = Arc::new(YahooProvider::new()?);
    let fund_provider: Arc<dyn FundNavProvider> =
        Arc::new(MfApiProvider::with_base_url(config.mfapi_base_url.clone()));
    tracing::info!(
        "Lookup providers: equities={}, funds={} ({})",
        equity_provider.id(),
        fund_provider.id(),
        config.mfapi_base_url
    );

    Ok(Arc::new(AppState {
        equity_provider,
        fund_provider,
        identity: config.identity.clone(),
        quote_timeout: config.quote_timeout,
    }))
}
