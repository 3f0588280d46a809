use std::time::Duration;

use serde::Serialize;

pub const EMPTY_SYMBOL_MESSAGE: &str = "Please enter a stock symbol";
pub const EMPTY_SCHEME_CODE_MESSAGE: &str = "Please enter a scheme code";
pub const STOCK_SEARCHING_MESSAGE: &str = "Searching for stock information...";
pub const FUND_SEARCHING_MESSAGE: &str = "Searching for mutual fund information...";
pub const FUND_SEARCH_ERROR_MESSAGE: &str =
    "Error searching for mutual fund. Please check the scheme code and try again.";

/// Shown in place of a day-range figure the source did not report
pub const MISSING_PRICE_PLACEHOLDER: &str = "-";

pub const STOCK_SUCCESS_VISIBLE_FOR: Duration = Duration::from_secs(7);
pub const FUND_SUCCESS_VISIBLE_FOR: Duration = Duration::from_secs(5);

/// Alert styling of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Danger,
}

impl AlertLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Danger => "alert alert-danger",
        }
    }
}

/// Status line under the search control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatus {
    pub level: AlertLevel,
    /// HTML; may contain a `<br>` line break. Text from lookups is escaped.
    pub message: String,
    /// Hide again after this long
    pub auto_hide: Option<Duration>,
}

impl SearchStatus {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Info,
            message: message.into(),
            auto_hide: None,
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Danger,
            message: message.into(),
            auto_hide: None,
        }
    }

    pub fn success(message: impl Into<String>, visible_for: Duration) -> Self {
        Self {
            level: AlertLevel::Success,
            message: message.into(),
            auto_hide: Some(visible_for),
        }
    }
}

/// Add-dialog inputs a lookup may fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CompanyName,
    CurrentPrice,
    DayHigh,
    DayLow,
    PreviousClose,
    FundName,
    FundType,
    CurrentNav,
    NavDate,
}
