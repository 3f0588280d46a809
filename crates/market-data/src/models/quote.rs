use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest equity quote as reported by an upstream provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityQuote {
    /// Provider ticker the quote was fetched for (e.g. `TCS.NS`)
    pub ticker: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Regular market price
    pub price: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_high: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_low: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,
}

impl EquityQuote {
    /// Long name first, then short name, then an empty string.
    pub fn long_display_name(&self) -> String {
        self.long_name
            .clone()
            .or_else(|| self.short_name.clone())
            .unwrap_or_default()
    }

    /// Short name first, then long name, then `Unknown`.
    pub fn short_display_name(&self) -> String {
        self.short_name
            .clone()
            .or_else(|| self.long_name.clone())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

/// Latest NAV of a mutual fund scheme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundNav {
    pub scheme_code: String,
    pub scheme_name: String,
    pub fund_type: String,
    pub fund_category: String,
    pub nav: Decimal,
    /// As-of date, in the provider's format (`dd-mm-yyyy` for mfapi.in)
    pub date: String,
}
