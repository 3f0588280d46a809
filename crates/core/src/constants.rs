/// Exchange assumed for stocks stored without one
pub const DEFAULT_EXCHANGE: &str = holdfolio_market_data::DEFAULT_EXCHANGE;

/// Decimal places for money amounts in tables and summaries
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal places for mutual fund units
pub const UNITS_DECIMAL_PRECISION: u32 = 3;

/// Decimal places for profit/loss percentages
pub const PERCENT_DECIMAL_PRECISION: u32 = 2;

/// Currency symbol used for holding values
pub const HOLDING_CURRENCY_SYMBOL: &str = "₹";

/// Currency symbol used by the dashboard summary
pub const SUMMARY_CURRENCY_SYMBOL: &str = "$";

/// Home route
pub const HOME_PATH: &str = "/";

/// Login route
pub const LOGIN_PATH: &str = "/login";
