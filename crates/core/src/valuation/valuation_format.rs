//! Display formatting for money, units and profit/loss.

use rust_decimal::{Decimal, RoundingStrategy};

use super::valuation_model::Valuation;
use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, HOLDING_CURRENCY_SYMBOL, SUMMARY_CURRENCY_SYMBOL,
};

/// Rounds half away from zero and pads to exactly `dp` places.
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}

/// `₹1234.50`
pub fn format_holding_money(value: Decimal) -> String {
    format!(
        "{}{}",
        HOLDING_CURRENCY_SYMBOL,
        format_fixed(value, DISPLAY_DECIMAL_PRECISION)
    )
}

/// `$1234.50`
pub fn format_summary_money(value: Decimal) -> String {
    format!(
        "{}{}",
        SUMMARY_CURRENCY_SYMBOL,
        format_fixed(value, DISPLAY_DECIMAL_PRECISION)
    )
}

/// Shortest plain rendering of a decimal (`10`, `3512.4`).
pub fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Profit/loss cell text: `₹<abs> (<sign><abs pct>%)`.
pub fn format_profit_loss(valuation: &Valuation) -> String {
    let sign = if valuation.profit_loss >= Decimal::ZERO {
        '+'
    } else {
        '-'
    };
    format!(
        "{} ({}{}%)",
        format_holding_money(valuation.profit_loss.abs()),
        sign,
        format_fixed(valuation.profit_loss_percent.abs(), DISPLAY_DECIMAL_PRECISION)
    )
}
