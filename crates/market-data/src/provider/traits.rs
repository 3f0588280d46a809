//! Provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{EquityQuote, FundNav};

/// Source of latest equity quotes.
///
/// Implementations receive a provider ticker that already carries the
/// exchange suffix (see [`crate::resolver::to_yahoo_ticker`]).
#[async_trait]
pub trait EquityQuoteProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for `ticker`.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the provider has no
    /// market price for the ticker.
    async fn latest_quote(&self, ticker: &str) -> Result<EquityQuote, MarketDataError>;
}

/// Source of mutual fund NAVs.
#[async_trait]
pub trait FundNavProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the most recent NAV for `scheme_code`.
    async fn latest_nav(&self, scheme_code: &str) -> Result<FundNav, MarketDataError>;
}
