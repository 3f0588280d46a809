//! Portfolio summary - per-class counts and values for the dashboard.

mod summary_model;
mod summary_traits;
mod summary_view;


pub use summary_model::{
    ClassTotals, PortfolioSummary, SummaryPanel, SUMMARY_ERROR_MESSAGE, SUMMARY_LOADING_MESSAGE,
};
pub use summary_traits::SummarySurface;
pub use summary_view::{PortfolioSummaryView, SummaryOutcome};
