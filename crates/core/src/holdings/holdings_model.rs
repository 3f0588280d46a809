//! Holding domain models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_constants::*;
use crate::constants::DEFAULT_EXCHANGE;
use crate::errors::{Result, ValidationError};
use crate::valuation::{effective_current_value, Valuation};

/// Parses a stored decimal string, accepting scientific notation.
///
/// Unparseable input is logged and read as zero, so one corrupt row cannot
/// take down a whole listing.
pub fn parse_decimal_string_tolerant(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value_str) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// The two portfolio asset classes. Each one is a separate per-user collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetClass {
    Stocks,
    MutualFunds,
}

impl AssetClass {
    pub fn collection_name(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCKS_COLLECTION,
            AssetClass::MutualFunds => MUTUAL_FUNDS_COLLECTION,
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            AssetClass::Stocks => STOCKS_TABLE_COLUMNS,
            AssetClass::MutualFunds => FUNDS_TABLE_COLUMNS,
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCKS_LOADING_MESSAGE,
            AssetClass::MutualFunds => FUNDS_LOADING_MESSAGE,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCKS_EMPTY_MESSAGE,
            AssetClass::MutualFunds => FUNDS_EMPTY_MESSAGE,
        }
    }

    pub fn load_error_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCKS_LOAD_ERROR_MESSAGE,
            AssetClass::MutualFunds => FUNDS_LOAD_ERROR_MESSAGE,
        }
    }

    pub fn add_error_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCK_ADD_ERROR_MESSAGE,
            AssetClass::MutualFunds => FUND_ADD_ERROR_MESSAGE,
        }
    }

    pub fn delete_confirm_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCK_DELETE_CONFIRM_MESSAGE,
            AssetClass::MutualFunds => FUND_DELETE_CONFIRM_MESSAGE,
        }
    }

    pub fn delete_error_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCK_DELETE_ERROR_MESSAGE,
            AssetClass::MutualFunds => FUND_DELETE_ERROR_MESSAGE,
        }
    }

    /// Alert shown when the lookup behind a refresh fails.
    ///
    /// Stocks surface the lookup's own message; funds use a fixed one.
    pub fn refresh_error_message(&self, cause: &dyn fmt::Display) -> String {
        match self {
            AssetClass::Stocks => format!("Error refreshing stock price: {}", cause),
            AssetClass::MutualFunds => FUND_REFRESH_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn update_error_message(&self) -> &'static str {
        match self {
            AssetClass::Stocks => STOCK_UPDATE_ERROR_MESSAGE,
            AssetClass::MutualFunds => FUND_UPDATE_ERROR_MESSAGE,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection_name())
    }
}

/// Equity-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityDetails {
    pub symbol: String,
    pub exchange: Option<String>,
    pub company_name: String,
}

/// Mutual-fund-specific fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundDetails {
    pub scheme_code: Option<String>,
    pub fund_name: String,
    /// e.g. "Open Ended Schemes - Equity Scheme - Large Cap Fund"
    pub fund_type: Option<String>,
    /// As-of date of the current NAV, as reported by the NAV source
    pub nav_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HoldingDetails {
    Equity(EquityDetails),
    Fund(FundDetails),
}

impl HoldingDetails {
    pub fn asset_class(&self) -> AssetClass {
        match self {
            HoldingDetails::Equity(_) => AssetClass::Stocks,
            HoldingDetails::Fund(_) => AssetClass::MutualFunds,
        }
    }
}

/// Key used to look up a holding's current price or NAV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LookupKey {
    Equity { symbol: String, exchange: String },
    Fund { scheme_code: String },
}

impl LookupKey {
    pub fn asset_class(&self) -> AssetClass {
        match self {
            LookupKey::Equity { .. } => AssetClass::Stocks,
            LookupKey::Fund { .. } => AssetClass::MutualFunds,
        }
    }
}

/// A single tracked position owned by one user.
///
/// `quantity` is shares for equities and units for funds; the purchase and
/// current values are per share (price) or per unit (NAV).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub user_id: String,
    pub details: HoldingDetails,
    pub quantity: Decimal,
    pub purchase_value: Decimal,
    pub current_value: Option<Decimal>,
    pub added_at: NaiveDateTime,
    pub last_updated: NaiveDateTime,
}

impl Holding {
    pub fn asset_class(&self) -> AssetClass {
        self.details.asset_class()
    }

    pub fn display_name(&self) -> &str {
        match &self.details {
            HoldingDetails::Equity(e) => &e.company_name,
            HoldingDetails::Fund(f) => &f.fund_name,
        }
    }

    /// Key for refreshing this holding, when it has one.
    ///
    /// Stocks always have one (exchange defaults to NSE); funds only when a
    /// scheme code was recorded.
    pub fn lookup_key(&self) -> Option<LookupKey> {
        match &self.details {
            HoldingDetails::Equity(e) => Some(LookupKey::Equity {
                symbol: e.symbol.clone(),
                exchange: e
                    .exchange
                    .clone()
                    .filter(|x| !x.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string()),
            }),
            HoldingDetails::Fund(f) => f
                .scheme_code
                .as_ref()
                .filter(|code| !code.trim().is_empty())
                .map(|code| LookupKey::Fund {
                    scheme_code: code.clone(),
                }),
        }
    }

    /// Current value × quantity, with the purchase-value fallback.
    pub fn total_value(&self) -> Result<Decimal> {
        effective_current_value(self.purchase_value, self.current_value)
            .checked_mul(self.quantity)
            .ok_or_else(|| ValidationError::Overflow("total value".to_string()).into())
    }

    pub fn valuation(&self) -> Result<Valuation> {
        Valuation::compute(self.quantity, self.purchase_value, self.current_value)
    }
}

/// Input model for a new holding. Ids and timestamps are assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub details: HoldingDetails,
    pub quantity: Decimal,
    pub purchase_value: Decimal,
    pub current_value: Decimal,
}

impl NewHolding {
    pub fn asset_class(&self) -> AssetClass {
        self.details.asset_class()
    }

    /// Validates the new holding data.
    pub fn validate(&self) -> Result<()> {
        match &self.details {
            HoldingDetails::Equity(e) => {
                if e.symbol.trim().is_empty() {
                    return Err(ValidationError::MissingField("symbol".to_string()).into());
                }
                if e.company_name.trim().is_empty() {
                    return Err(ValidationError::MissingField("companyName".to_string()).into());
                }
            }
            HoldingDetails::Fund(f) => {
                if f.fund_name.trim().is_empty() {
                    return Err(ValidationError::MissingField("fundName".to_string()).into());
                }
            }
        }
        if self.quantity <= Decimal::ZERO {
            return Err(ValidationError::NotPositive("quantity".to_string()).into());
        }
        if self.purchase_value <= Decimal::ZERO {
            return Err(ValidationError::NotPositive("purchase value".to_string()).into());
        }
        if self.current_value < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "current value cannot be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

/// Partial update written by a refresh: only these fields and the
/// last-updated timestamp change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentValueUpdate {
    pub current_value: Decimal,
    /// Funds only
    pub nav_date: Option<String>,
}
