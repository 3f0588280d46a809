use std::fmt;

/// Exchange used when the caller does not name one.
pub const DEFAULT_EXCHANGE: &str = "NSE";

/// Exchange a dashboard holding is listed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Exchange {
    /// National Stock Exchange of India
    Nse,
    /// Bombay Stock Exchange
    Bse,
    /// Any other venue; the ticker is passed to Yahoo unchanged.
    Other(String),
}

impl Exchange {
    /// Parse an exchange code, case-insensitively. Blank input means NSE.
    pub fn parse(code: &str) -> Self {
        let code = code.trim();
        if code.is_empty() || code.eq_ignore_ascii_case("NSE") {
            Exchange::Nse
        } else if code.eq_ignore_ascii_case("BSE") {
            Exchange::Bse
        } else {
            Exchange::Other(code.to_string())
        }
    }

    /// Yahoo suffix for this exchange, if any.
    pub fn yahoo_suffix(&self) -> Option<&'static str> {
        match self {
            Exchange::Nse => Some(".NS"),
            Exchange::Bse => Some(".BO"),
            Exchange::Other(_) => None,
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Nse => write!(f, "NSE"),
            Exchange::Bse => write!(f, "BSE"),
            Exchange::Other(code) => write!(f, "{}", code),
        }
    }
}

/// Build the Yahoo ticker for `symbol` listed on `exchange`.
///
/// The symbol is upper-cased and the exchange suffix is appended unless it
/// is already present.
pub fn to_yahoo_ticker(symbol: &str, exchange: &Exchange) -> String {
    let symbol = symbol.trim().to_uppercase();
    match exchange.yahoo_suffix() {
        Some(suffix) if !symbol.ends_with(suffix) => format!("{}{}", symbol, suffix),
        _ => symbol,
    }
}
