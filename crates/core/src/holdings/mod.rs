//! Holdings module - domain models, the holdings table view, and traits.

mod holdings_constants;
mod holdings_forms;
mod holdings_model;
mod holdings_table;
mod holdings_traits;
mod holdings_view;


#[cfg(test)]
mod holdings_view_tests;

pub use holdings_constants::*;
pub use holdings_forms::{AddFundForm, AddHoldingForm, AddStockForm};
pub use holdings_model::{
    parse_decimal_string_tolerant, AssetClass, CurrentValueUpdate, EquityDetails, FundDetails,
    Holding, HoldingDetails, LookupKey, NewHolding,
};
pub use holdings_table::{HoldingRow, RowAction, RowActionKind, TableBody};
pub use holdings_traits::{HoldingRepositoryTrait, HoldingsSurface};
pub use holdings_view::{ActionOutcome, HoldingsView, LoadOutcome, RowActionState};
