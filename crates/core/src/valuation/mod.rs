//! Valuation module - profit/loss math and its display formatting.

mod valuation_format;
mod valuation_model;

#[cfg(test)]
mod valuation_model_tests;

pub use valuation_format::{
    format_fixed, format_holding_money, format_plain, format_profit_loss, format_summary_money,
};
pub use valuation_model::{effective_current_value, ProfitClass, Valuation};
