//! Symbol resolution for the Yahoo provider.
//!
//! Dashboard users enter a bare ticker plus an Indian exchange code. Yahoo
//! identifies the listing through a suffix instead:
//!
//! | Exchange | Yahoo suffix | Example |
//! |----------|--------------|---------|
//! | NSE      | `.NS`        | `TCS.NS` |
//! | BSE      | `.BO`        | `TCS.BO` |
//! | other    | none         | `AAPL` |

mod exchange_suffixes;

pub use exchange_suffixes::{to_yahoo_ticker, Exchange, DEFAULT_EXCHANGE};
