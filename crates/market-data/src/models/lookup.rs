//! Wire shapes of the lookup endpoints and the normalized lookup result.
//!
//! The backend serializes these structs; the lookup client deserializes them.
//! Missing optional prices are sent as `0`, which the client reads back as
//! "not available".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `GET /api/get_stock_info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockInfoResponse {
    #[serde(default)]
    pub name: String,
    pub symbol: String,
    pub current_price: Decimal,
    #[serde(default)]
    pub day_high: Decimal,
    #[serde(default)]
    pub day_low: Decimal,
    #[serde(default)]
    pub previous_close: Decimal,
    #[serde(default)]
    pub exchange: String,
}

/// Body of `GET /api/stock/search` (legacy shape).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSearchResponse {
    pub symbol: String,
    pub company_name: String,
    pub current_price: Decimal,
    pub exchange: String,
    #[serde(default)]
    pub day_high: Decimal,
    #[serde(default)]
    pub day_low: Decimal,
    #[serde(default)]
    pub previous_close: Decimal,
}

/// Body of `GET /api/mutual-fund/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundSearchResponse {
    #[serde(default)]
    pub scheme_code: String,
    pub scheme_name: String,
    #[serde(rename = "currentNAV")]
    pub current_nav: Decimal,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub fund_type: String,
    #[serde(default)]
    pub fund_category: String,
}

/// Normalized result of a successful lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub symbol: Option<String>,
    pub display_name: String,
    pub current_value: Decimal,
    pub day_high: Option<Decimal>,
    pub day_low: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    /// As-of date of the value, when the source reports one
    pub as_of: Option<String>,
    pub fund_type: Option<String>,
    pub fund_category: Option<String>,
}

impl LookupResult {
    /// Day range and previous close, only when all three are known.
    pub fn day_range(&self) -> Option<(Decimal, Decimal, Decimal)> {
        match (self.day_low, self.day_high, self.previous_close) {
            (Some(low), Some(high), Some(close)) => Some((low, high, close)),
            _ => None,
        }
    }

    /// `type - category`, or just the type when there is no category.
    pub fn fund_type_label(&self) -> Option<String> {
        let fund_type = self.fund_type.as_deref()?;
        match self.fund_category.as_deref() {
            Some(category) => Some(format!("{} - {}", fund_type, category)),
            None => Some(fund_type.to_string()),
        }
    }
}

fn non_zero(value: Decimal) -> Option<Decimal> {
    if value.is_zero() {
        None
    } else {
        Some(value)
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl From<StockInfoResponse> for LookupResult {
    fn from(body: StockInfoResponse) -> Self {
        Self {
            symbol: non_empty(body.symbol),
            display_name: body.name,
            current_value: body.current_price,
            day_high: non_zero(body.day_high),
            day_low: non_zero(body.day_low),
            previous_close: non_zero(body.previous_close),
            as_of: None,
            fund_type: None,
            fund_category: None,
        }
    }
}

impl From<StockSearchResponse> for LookupResult {
    fn from(body: StockSearchResponse) -> Self {
        Self {
            symbol: non_empty(body.symbol),
            display_name: body.company_name,
            current_value: body.current_price,
            day_high: non_zero(body.day_high),
            day_low: non_zero(body.day_low),
            previous_close: non_zero(body.previous_close),
            as_of: None,
            fund_type: None,
            fund_category: None,
        }
    }
}

impl From<FundSearchResponse> for LookupResult {
    fn from(body: FundSearchResponse) -> Self {
        Self {
            symbol: non_empty(body.scheme_code),
            display_name: body.scheme_name,
            current_value: body.current_nav,
            day_high: None,
            day_low: None,
            previous_close: None,
            as_of: non_empty(body.date),
            fund_type: non_empty(body.fund_type),
            fund_category: non_empty(body.fund_category),
        }
    }
}
