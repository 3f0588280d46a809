use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{Result, ValidationError};
use crate::holdings::Holding;
use crate::utils::html::escape_html;
use crate::valuation::format_summary_money;

pub const SUMMARY_LOADING_MESSAGE: &str = "Loading portfolio data...";
pub const SUMMARY_ERROR_MESSAGE: &str = "Error loading portfolio data.";

/// Count and total value of one asset class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTotals {
    pub count: usize,
    pub value: Decimal,
}

impl ClassTotals {
    /// Totals over `holdings`, valuing each at current value × quantity.
    ///
    /// An absent or zero current value falls back to the purchase value.
    pub fn from_holdings(holdings: &[Holding]) -> Result<Self> {
        let mut value = Decimal::ZERO;
        for holding in holdings {
            value = value
                .checked_add(holding.total_value()?)
                .ok_or_else(|| ValidationError::Overflow("class total".to_string()))?;
        }
        Ok(Self {
            count: holdings.len(),
            value,
        })
    }
}

/// Dashboard totals. Recomputed on every load, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub stocks: ClassTotals,
    pub funds: ClassTotals,
    pub total: Decimal,
}

impl PortfolioSummary {
    pub fn new(stocks: ClassTotals, funds: ClassTotals) -> Result<Self> {
        let total = stocks
            .value
            .checked_add(funds.value)
            .ok_or_else(|| ValidationError::Overflow("portfolio total".to_string()))?;
        Ok(Self {
            stocks,
            funds,
            total,
        })
    }

    /// `3 stocks | $1200.00`
    pub fn stocks_line(&self) -> String {
        format!(
            "{} stocks | {}",
            self.stocks.count,
            format_summary_money(self.stocks.value)
        )
    }

    /// `2 funds | $30.00`
    pub fn funds_line(&self) -> String {
        format!(
            "{} funds | {}",
            self.funds.count,
            format_summary_money(self.funds.value)
        )
    }

    pub fn total_line(&self) -> String {
        format_summary_money(self.total)
    }

    pub fn to_html(&self) -> String {
        let panel = |title: &str, line: String, emphasis: &str| {
            format!(
                r#"<div class="col-md-4 mb-3"><h6>{}</h6><p class="mb-0{}">{}</p></div>"#,
                title,
                emphasis,
                escape_html(&line)
            )
        };
        format!(
            r#"<div class="row">{}{}{}</div>"#,
            panel("Stocks", self.stocks_line(), ""),
            panel("Mutual Funds", self.funds_line(), ""),
            panel("Total Portfolio Value", self.total_line(), " fw-bold"),
        )
    }
}

/// What the summary region shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SummaryPanel {
    Loading,
    Ready(PortfolioSummary),
    Error,
}

impl SummaryPanel {
    pub fn to_html(&self) -> String {
        match self {
            Self::Loading => SUMMARY_LOADING_MESSAGE.to_string(),
            Self::Ready(summary) => summary.to_html(),
            Self::Error => format!(
                r#"<div class="alert alert-danger">{}</div>"#,
                SUMMARY_ERROR_MESSAGE
            ),
        }
    }
}
