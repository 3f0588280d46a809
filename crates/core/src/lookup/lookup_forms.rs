use std::sync::Arc;

use log::error;

use holdfolio_market_data::{LookupError, LookupResult, PriceLookupTrait};

use super::lookup_model::*;
use super::lookup_traits::SearchFormSurface;
use crate::constants::DEFAULT_EXCHANGE;
use crate::holdings::NAV_DATE_PREFIX;
use crate::utils::html::escape_html;
use crate::valuation::{format_holding_money, format_plain};

/// Result of a search form submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Nothing to search for; no request was made
    Empty,
    Found(LookupResult),
    /// The message shown to the user
    Failed(String),
}

/// Fills the add-stock dialog from a symbol lookup.
pub struct StockSearchForm {
    lookup: Arc<dyn PriceLookupTrait>,
    surface: Arc<dyn SearchFormSurface>,
}

impl StockSearchForm {
    pub fn new(lookup: Arc<dyn PriceLookupTrait>, surface: Arc<dyn SearchFormSurface>) -> Self {
        Self { lookup, surface }
    }

    pub async fn search(&self, symbol: &str, exchange: &str) -> SearchOutcome {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            self.surface.show_status(&SearchStatus::danger(EMPTY_SYMBOL_MESSAGE));
            return SearchOutcome::Empty;
        }
        let exchange = match exchange.trim() {
            "" => DEFAULT_EXCHANGE,
            other => other,
        };

        self.surface.set_busy(true);
        self.surface.show_status(&SearchStatus::info(STOCK_SEARCHING_MESSAGE));
        self.surface.set_details_visible(false);

        let result = self.lookup.search_equity(symbol, exchange).await;
        self.surface.set_busy(false);

        match result {
            Ok(result) => {
                self.fill(symbol, &result);
                SearchOutcome::Found(result)
            }
            Err(e) => {
                error!("Error searching for stock: {}", e);
                let message = format!("Error: {}", e);
                self.surface
                    .show_status(&SearchStatus::danger(escape_html(&message)));
                SearchOutcome::Failed(message)
            }
        }
    }

    fn fill(&self, symbol: &str, result: &LookupResult) {
        self.surface
            .set_field(FormField::CompanyName, &result.display_name);
        self.surface
            .set_field(FormField::CurrentPrice, &format_plain(result.current_value));

        let mut message = format!(
            "Successfully found {} ({}) with current price ₹{}",
            escape_html(&result.display_name),
            escape_html(result.symbol.as_deref().unwrap_or(symbol)),
            format_plain(result.current_value)
        );

        let has_any_detail =
            result.day_high.is_some() || result.day_low.is_some() || result.previous_close.is_some();
        if has_any_detail {
            self.surface.set_details_visible(true);
            for (field, value) in [
                (FormField::DayHigh, result.day_high),
                (FormField::DayLow, result.day_low),
                (FormField::PreviousClose, result.previous_close),
            ] {
                let text = value
                    .map(format_holding_money)
                    .unwrap_or_else(|| MISSING_PRICE_PLACEHOLDER.to_string());
                self.surface.set_field(field, &text);
            }
        }

        if let Some((low, high, close)) = result.day_range() {
            message.push_str(&format!(
                "<br>Day Range: {} - {} | Previous Close: {}",
                format_holding_money(low),
                format_holding_money(high),
                format_holding_money(close)
            ));
        }

        self.surface
            .show_status(&SearchStatus::success(message, STOCK_SUCCESS_VISIBLE_FOR));
    }
}

/// Fills the add-fund dialog from a scheme-code lookup.
pub struct FundSearchForm {
    lookup: Arc<dyn PriceLookupTrait>,
    surface: Arc<dyn SearchFormSurface>,
}

impl FundSearchForm {
    pub fn new(lookup: Arc<dyn PriceLookupTrait>, surface: Arc<dyn SearchFormSurface>) -> Self {
        Self { lookup, surface }
    }

    pub async fn search(&self, scheme_code: &str) -> SearchOutcome {
        let scheme_code = scheme_code.trim();
        if scheme_code.is_empty() {
            self.surface
                .show_status(&SearchStatus::danger(EMPTY_SCHEME_CODE_MESSAGE));
            return SearchOutcome::Empty;
        }

        self.surface.set_busy(true);
        self.surface.show_status(&SearchStatus::info(FUND_SEARCHING_MESSAGE));

        let result = self.lookup.search_fund(scheme_code).await;
        self.surface.set_busy(false);

        match result {
            Ok(result) => {
                self.fill(&result);
                SearchOutcome::Found(result)
            }
            Err(e) => {
                error!("Error searching for mutual fund: {}", e);
                let message = fund_error_message(&e);
                self.surface
                    .show_status(&SearchStatus::danger(escape_html(&message)));
                SearchOutcome::Failed(message)
            }
        }
    }

    fn fill(&self, result: &LookupResult) {
        let nav = format_plain(result.current_value);
        self.surface.set_field(FormField::FundName, &result.display_name);
        self.surface.set_field(
            FormField::FundType,
            &result.fund_type_label().unwrap_or_default(),
        );
        self.surface.set_field(FormField::CurrentNav, &nav);
        self.surface.set_field(
            FormField::NavDate,
            &format!("{}{}", NAV_DATE_PREFIX, result.as_of.as_deref().unwrap_or("")),
        );

        let message = format!(
            "Successfully found {} with current NAV ₹{}",
            escape_html(&result.display_name),
            nav
        );
        self.surface
            .show_status(&SearchStatus::success(message, FUND_SUCCESS_VISIBLE_FOR));
    }
}

/// Source-reported failures are shown verbatim; transport failures get the generic message.
fn fund_error_message(error: &LookupError) -> String {
    if error.is_not_found() {
        format!("Error: {}", error)
    } else {
        FUND_SEARCH_ERROR_MESSAGE.to_string()
    }
}
