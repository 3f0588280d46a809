//! Per-holding valuation.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::PERCENT_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// Whether a holding is in profit or at a loss. Break-even counts as profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfitClass {
    Profit,
    Loss,
}

impl ProfitClass {
    /// CSS class of the profit/loss cell
    pub fn css_class(&self) -> &'static str {
        match self {
            ProfitClass::Profit => "profit",
            ProfitClass::Loss => "loss",
        }
    }
}

/// Derived valuation of a single holding. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valuation {
    /// Current value actually used (purchase value when none was recorded)
    pub current_value: Decimal,
    /// current value × quantity
    pub total_value: Decimal,
    /// purchase value × quantity
    pub cost_basis: Decimal,
    /// total value − cost basis
    pub profit_loss: Decimal,
    /// (current − purchase) / purchase × 100, rounded to 2 places
    pub profit_loss_percent: Decimal,
}

/// Current value to value a holding at: absent or zero falls back to the purchase value.
pub fn effective_current_value(purchase_value: Decimal, current_value: Option<Decimal>) -> Decimal {
    match current_value {
        Some(value) if !value.is_zero() => value,
        _ => purchase_value,
    }
}

fn overflow(what: &str) -> ValidationError {
    ValidationError::Overflow(what.to_string())
}

impl Valuation {
    /// Values `quantity` units bought at `purchase_value` and now worth `current_value`.
    ///
    /// Fails when `purchase_value` is not positive or the arithmetic overflows.
    pub fn compute(
        quantity: Decimal,
        purchase_value: Decimal,
        current_value: Option<Decimal>,
    ) -> Result<Self> {
        if purchase_value <= Decimal::ZERO {
            return Err(ValidationError::NotPositive("purchase value".to_string()).into());
        }

        let current_value = effective_current_value(purchase_value, current_value);

        let total_value = current_value
            .checked_mul(quantity)
            .ok_or_else(|| overflow("total value"))?;
        let cost_basis = purchase_value
            .checked_mul(quantity)
            .ok_or_else(|| overflow("cost basis"))?;
        let profit_loss = total_value
            .checked_sub(cost_basis)
            .ok_or_else(|| overflow("profit/loss"))?;

        let profit_loss_percent = current_value
            .checked_sub(purchase_value)
            .and_then(|delta| delta.checked_div(purchase_value))
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or_else(|| overflow("profit/loss percent"))?
            .round_dp_with_strategy(PERCENT_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);

        Ok(Self {
            current_value,
            total_value,
            cost_basis,
            profit_loss,
            profit_loss_percent,
        })
    }

    pub fn profit_class(&self) -> ProfitClass {
        if self.profit_loss >= Decimal::ZERO {
            ProfitClass::Profit
        } else {
            ProfitClass::Loss
        }
    }
}
