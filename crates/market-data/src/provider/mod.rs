//! Upstream price and NAV providers.
//!
//! This module contains:
//! - The [`EquityQuoteProvider`] and [`FundNavProvider`] traits
//! - Concrete implementations: Yahoo Finance for equities, mfapi.in for
//!   Indian mutual fund NAVs

mod traits;

pub mod mfapi;
pub mod yahoo;

pub use traits::{EquityQuoteProvider, FundNavProvider};
