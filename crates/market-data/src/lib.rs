//! Holdfolio Market Data Crate
//!
//! Price and NAV lookups for the Holdfolio dashboard.
//!
//! # Overview
//!
//! Two sides of the same lookup contract live here:
//! - The **lookup client** ([`HttpLookupClient`]) used by the dashboard views.
//!   It calls the backend lookup endpoints and normalizes their responses into
//!   a [`LookupResult`].
//! - The **upstream providers** ([`YahooProvider`], [`MfApiProvider`]) used by
//!   the backend to answer those endpoints.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +--------------------+     +------------------+
//! |  Holdings view   | --> |  HttpLookupClient  | --> |  lookup endpoint |
//! +------------------+     +--------------------+     +------------------+
//!                                                              |
//!                                         +--------------------+-----------------+
//!                                         v                                      v
//!                                 +---------------+                      +---------------+
//!                                 | YahooProvider |  (equities)          | MfApiProvider |  (funds)
//!                                 +---------------+                      +---------------+
//! ```

pub mod client;
pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

pub use client::{HttpLookupClient, PriceLookupTrait};
pub use errors::{LookupError, MarketDataError};
pub use models::{EquityQuote, FundNav, LookupResult};
pub use provider::mfapi::MfApiProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::{EquityQuoteProvider, FundNavProvider};
pub use resolver::{to_yahoo_ticker, Exchange, DEFAULT_EXCHANGE};
