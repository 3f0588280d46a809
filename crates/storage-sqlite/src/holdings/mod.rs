//! SQLite storage implementation for stock and mutual fund holdings.

mod model;
mod repository;

pub use model::{MutualFundDB, StockDB};
pub use repository::HoldingRepository;
