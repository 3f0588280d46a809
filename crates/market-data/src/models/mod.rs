//! Market data models
//!
//! - `quote` - Upstream provider results (EquityQuote, FundNav)
//! - `lookup` - Lookup endpoint wire shapes and the normalized LookupResult

mod lookup;
mod quote;

pub use lookup::{FundSearchResponse, LookupResult, StockInfoResponse, StockSearchResponse};
pub use quote::{EquityQuote, FundNav};
