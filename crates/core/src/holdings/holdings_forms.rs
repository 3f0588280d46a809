//! Raw add-form input and its validation into a [`NewHolding`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_constants::NAV_DATE_PREFIX;
use super::holdings_model::{AssetClass, EquityDetails, FundDetails, HoldingDetails, NewHolding};
use crate::errors::{Result, ValidationError};

/// Add-stock form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStockForm {
    pub symbol: String,
    pub exchange: String,
    pub company_name: String,
    pub quantity: String,
    pub purchase_price: String,
    /// Blank means "same as purchase price"
    pub current_price: String,
}

/// Add-fund form fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFundForm {
    pub scheme_code: String,
    pub fund_name: String,
    pub fund_type: String,
    pub units: String,
    pub purchase_nav: String,
    /// Blank means "same as purchase NAV"
    pub current_nav: String,
    /// Filled by a successful scheme search, with or without the
    /// "NAV as of " label
    pub nav_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AddHoldingForm {
    Stock(AddStockForm),
    Fund(AddFundForm),
}

fn parse_number(raw: &str, field: &str) -> Result<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| ValidationError::InvalidInput(format!("{} is not a number", field)).into())
}

fn parse_positive(raw: &str, field: &str) -> Result<Decimal> {
    let value = parse_number(raw, field)?;
    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive(field.to_string()).into());
    }
    Ok(value)
}

fn parse_current_or(raw: &str, field: &str, fallback: Decimal) -> Result<Decimal> {
    if raw.trim().is_empty() {
        Ok(fallback)
    } else {
        parse_number(raw, field)
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl AddHoldingForm {
    pub fn asset_class(&self) -> AssetClass {
        match self {
            AddHoldingForm::Stock(_) => AssetClass::Stocks,
            AddHoldingForm::Fund(_) => AssetClass::MutualFunds,
        }
    }

    /// Validates the form and builds the holding to insert.
    ///
    /// No storage call is made on failure.
    pub fn to_new_holding(&self) -> Result<NewHolding> {
        let new_holding = match self {
            AddHoldingForm::Stock(form) => {
                let quantity = parse_positive(&form.quantity, "quantity")?;
                let purchase_value = parse_positive(&form.purchase_price, "purchasePrice")?;
                let current_value =
                    parse_current_or(&form.current_price, "currentPrice", purchase_value)?;
                NewHolding {
                    details: HoldingDetails::Equity(EquityDetails {
                        symbol: form.symbol.trim().to_uppercase(),
                        exchange: optional(&form.exchange),
                        company_name: form.company_name.trim().to_string(),
                    }),
                    quantity,
                    purchase_value,
                    current_value,
                }
            }
            AddHoldingForm::Fund(form) => {
                let quantity = parse_positive(&form.units, "units")?;
                let purchase_value = parse_positive(&form.purchase_nav, "purchaseNAV")?;
                let current_value =
                    parse_current_or(&form.current_nav, "currentNAV", purchase_value)?;
                NewHolding {
                    details: HoldingDetails::Fund(FundDetails {
                        scheme_code: optional(&form.scheme_code),
                        fund_name: form.fund_name.trim().to_string(),
                        fund_type: optional(&form.fund_type),
                        nav_date: optional(form.nav_date.trim().trim_start_matches(NAV_DATE_PREFIX)),
                    }),
                    quantity,
                    purchase_value,
                    current_value,
                }
            }
        };
        new_holding.validate()?;
        Ok(new_holding)
    }
}
