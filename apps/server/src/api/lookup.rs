//! Price and NAV lookup endpoints.
//!
//! Upstream failures are mapped to the status codes and messages the
//! dashboard's lookup client understands. All error bodies are
//! `{"error": "<message>"}`.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use holdfolio_market_data::models::{FundSearchResponse, StockInfoResponse, StockSearchResponse};
use holdfolio_market_data::{
    to_yahoo_ticker, EquityQuote, Exchange, MarketDataError, DEFAULT_EXCHANGE,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

pub const QUOTE_TIMEOUT_MESSAGE: &str =
    "Request timed out. The stock data service is not responding.";
pub const STOCK_NOT_FOUND_MESSAGE: &str = "Stock not found or not available";
pub const SYMBOL_REQUIRED_MESSAGE: &str = "Symbol parameter is required";
pub const QUERY_REQUIRED_MESSAGE: &str = "Query parameter is required";
pub const SCHEME_CODE_REQUIRED_MESSAGE: &str = "Scheme code parameter is required";
pub const INVALID_UPSTREAM_JSON_MESSAGE: &str = "Invalid JSON response from external API";

#[derive(Debug, Default, Deserialize)]
struct StockInfoQuery {
    #[serde(default)]
    symbol: String,
    exchange: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StockSearchQuery {
    #[serde(default)]
    query: String,
    exchange: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FundSearchQuery {
    #[serde(default)]
    scheme_code: String,
}

/// The exchange code as given, or the default when absent or blank.
fn exchange_or_default(exchange: Option<String>) -> String {
    exchange
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| DEFAULT_EXCHANGE.to_string())
}

/// Fetches a quote, giving up after the configured quote timeout.
async fn fetch_quote(state: &AppState, ticker: &str) -> Result<EquityQuote, MarketDataError> {
    let provider = state.equity_provider.clone();
    match tokio::time::timeout(state.quote_timeout, provider.latest_quote(ticker)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Timeout getting quote for {}", ticker);
            Err(MarketDataError::Timeout {
                provider: provider.id().to_string(),
            })
        }
    }
}

/// `GET /api/get_stock_info?symbol=&exchange=`
async fn get_stock_info(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockInfoQuery>,
) -> ApiResult<Json<StockInfoResponse>> {
    let symbol = query.symbol.trim();
    if symbol.is_empty() {
        return Err(ApiError::BadRequest(SYMBOL_REQUIRED_MESSAGE.to_string()));
    }
    let exchange = exchange_or_default(query.exchange);
    let ticker = to_yahoo_ticker(symbol, &Exchange::parse(&exchange));

    let quote = fetch_quote(&state, &ticker).await.map_err(|e| match e {
        MarketDataError::Timeout { .. } => ApiError::Timeout(QUOTE_TIMEOUT_MESSAGE.to_string()),
        MarketDataError::SymbolNotFound(_) => {
            ApiError::NotFound(STOCK_NOT_FOUND_MESSAGE.to_string())
        }
        other => ApiError::Internal(other.to_string()),
    })?;

    Ok(Json(StockInfoResponse {
        name: quote.long_display_name(),
        symbol: symbol.to_uppercase(),
        current_price: quote.price,
        day_high: quote.day_high.unwrap_or_default(),
        day_low: quote.day_low.unwrap_or_default(),
        previous_close: quote.previous_close.unwrap_or_default(),
        exchange,
    }))
}

/// `GET /api/stock/search?query=&exchange=`, the older response shape.
async fn search_stock(
    State(state): State<Arc<AppState>>,
    Query(query): Query<StockSearchQuery>,
) -> ApiResult<Json<StockSearchResponse>> {
    let symbol = query.query.trim();
    if symbol.is_empty() {
        return Err(ApiError::BadRequest(QUERY_REQUIRED_MESSAGE.to_string()));
    }
    let exchange = exchange_or_default(query.exchange);
    let ticker = to_yahoo_ticker(symbol, &Exchange::parse(&exchange));

    let quote = fetch_quote(&state, &ticker).await.map_err(|e| match e {
        MarketDataError::Timeout { .. } => ApiError::Timeout(QUOTE_TIMEOUT_MESSAGE.to_string()),
        MarketDataError::SymbolNotFound(_) => {
            ApiError::NotFound(format!("No data found for symbol {}", ticker))
        }
        other => ApiError::Internal(format!("Server error: {}", other)),
    })?;

    Ok(Json(StockSearchResponse {
        symbol: symbol.to_uppercase(),
        company_name: quote.short_display_name(),
        current_price: quote.price,
        exchange,
        day_high: quote.day_high.unwrap_or_default(),
        day_low: quote.day_low.unwrap_or_default(),
        previous_close: quote.previous_close.unwrap_or_default(),
    }))
}

/// `GET /api/mutual-fund/search?scheme_code=`
async fn search_mutual_fund(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FundSearchQuery>,
) -> ApiResult<Json<FundSearchResponse>> {
    let scheme_code = query.scheme_code.trim();
    if scheme_code.is_empty() {
        return Err(ApiError::BadRequest(
            SCHEME_CODE_REQUIRED_MESSAGE.to_string(),
        ));
    }

    let nav = state
        .fund_provider
        .latest_nav(scheme_code)
        .await
        .map_err(|e| match e {
            MarketDataError::UpstreamStatus { status, .. } => ApiError::Upstream {
                status,
                message: format!("API returned status code {}", status),
            },
            MarketDataError::InvalidResponse { .. } => {
                ApiError::Internal(INVALID_UPSTREAM_JSON_MESSAGE.to_string())
            }
            MarketDataError::Rejected { message, .. } => ApiError::NotFound(message),
            MarketDataError::SymbolNotFound(code) => {
                ApiError::NotFound(format!("No NAV data found for scheme code {}", code))
            }
            MarketDataError::Network(e) => {
                ApiError::Internal(format!("Failed to connect to external API: {}", e))
            }
            other => ApiError::Internal(format!("Server error: {}", other)),
        })?;

    Ok(Json(FundSearchResponse {
        scheme_code: scheme_code.to_string(),
        scheme_name: nav.scheme_name,
        current_nav: nav.nav,
        date: nav.date,
        fund_type: nav.fund_type,
        fund_category: nav.fund_category,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/get_stock_info", get(get_stock_info))
        .route("/stock/search", get(search_stock))
        .route("/mutual-fund/search", get(search_mutual_fund))
}
