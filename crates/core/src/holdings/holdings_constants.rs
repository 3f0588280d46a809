/// Collection holding a user's equities
pub const STOCKS_COLLECTION: &str = "stocks";

/// Collection holding a user's mutual funds
pub const MUTUAL_FUNDS_COLLECTION: &str = "mutualFunds";

/// Columns in the stocks table: symbol, company, exchange, quantity,
/// purchase, current, total, profit/loss, actions
pub const STOCKS_TABLE_COLUMNS: usize = 9;

/// Columns in the funds table: scheme code, fund, units, purchase NAV,
/// current NAV, total, profit/loss, actions
pub const FUNDS_TABLE_COLUMNS: usize = 8;

/// Placeholder for an identifying field that was never recorded
pub const MISSING_FIELD_PLACEHOLDER: &str = "N/A";

/// Label in front of the NAV date shown under the fund form
pub const NAV_DATE_PREFIX: &str = "NAV as of ";

pub const INVALID_FORM_MESSAGE: &str = "Please fill all fields with valid values.";

pub const STOCKS_LOADING_MESSAGE: &str = "Loading stocks...";
pub const STOCKS_EMPTY_MESSAGE: &str = "No stocks found. Add your first stock investment.";
pub const STOCKS_LOAD_ERROR_MESSAGE: &str = "Error loading stocks data.";
pub const STOCK_ADD_ERROR_MESSAGE: &str = "Error adding stock. Please try again.";
pub const STOCK_DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this stock?";
pub const STOCK_DELETE_ERROR_MESSAGE: &str = "Error deleting stock. Please try again.";
pub const STOCK_UPDATE_ERROR_MESSAGE: &str =
    "Error updating stock price in database. Please try again.";

pub const FUNDS_LOADING_MESSAGE: &str = "Loading mutual funds...";
pub const FUNDS_EMPTY_MESSAGE: &str =
    "No mutual funds found. Add your first mutual fund investment.";
pub const FUNDS_LOAD_ERROR_MESSAGE: &str = "Error loading mutual funds data.";
pub const FUND_ADD_ERROR_MESSAGE: &str = "Error adding mutual fund. Please try again.";
pub const FUND_DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this mutual fund?";
pub const FUND_DELETE_ERROR_MESSAGE: &str = "Error deleting mutual fund. Please try again.";
pub const FUND_REFRESH_ERROR_MESSAGE: &str = "Error refreshing NAV. Please try again.";
pub const FUND_UPDATE_ERROR_MESSAGE: &str = "Error updating NAV. Please try again.";
