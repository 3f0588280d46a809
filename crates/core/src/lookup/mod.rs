//! Lookup search forms - fill the add-holding dialog from a price or NAV lookup.

mod lookup_forms;
mod lookup_model;
mod lookup_traits;


pub use lookup_forms::{FundSearchForm, SearchOutcome, StockSearchForm};
pub use lookup_model::*;
pub use lookup_traits::SearchFormSurface;
