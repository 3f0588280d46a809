//! Holdfolio Core - Domain entities, views, and traits.
//!
//! This crate contains the dashboard logic for Holdfolio: holding models and
//! valuation, the session gate, the holdings and summary views, and the
//! lookup search forms. It is database- and transport-agnostic; storage,
//! identity and page rendering are collaborators injected through traits.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod lookup;
pub mod page;
pub mod session;
pub mod summary;
pub mod utils;
pub mod valuation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
