//! Database models for holdings.
//!
//! Quantities and money are stored as decimal strings.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use holdfolio_core::holdings::{
    parse_decimal_string_tolerant, EquityDetails, FundDetails, Holding, HoldingDetails,
};

/// Database model for a stock holding
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::stocks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct StockDB {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub exchange: Option<String>,
    pub company_name: String,
    pub quantity: String,
    pub purchase_price: String,
    pub current_price: Option<String>,
    pub added_date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
}

/// Database model for a mutual fund holding
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::mutual_funds)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct MutualFundDB {
    pub id: String,
    pub user_id: String,
    pub scheme_code: Option<String>,
    pub fund_name: String,
    pub fund_type: Option<String>,
    pub units: String,
    pub purchase_nav: String,
    pub current_nav: Option<String>,
    pub nav_date: Option<String>,
    pub added_date: NaiveDateTime,
    pub last_updated: NaiveDateTime,
}

impl From<StockDB> for Holding {
    fn from(db: StockDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            details: HoldingDetails::Equity(EquityDetails {
                symbol: db.symbol,
                exchange: db.exchange,
                company_name: db.company_name,
            }),
            quantity: parse_decimal_string_tolerant(&db.quantity, "quantity"),
            purchase_value: parse_decimal_string_tolerant(&db.purchase_price, "purchase_price"),
            current_value: db
                .current_price
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "current_price")),
            added_at: db.added_date,
            last_updated: db.last_updated,
        }
    }
}

impl From<MutualFundDB> for Holding {
    fn from(db: MutualFundDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            details: HoldingDetails::Fund(FundDetails {
                scheme_code: db.scheme_code,
                fund_name: db.fund_name,
                fund_type: db.fund_type,
                nav_date: db.nav_date,
            }),
            quantity: parse_decimal_string_tolerant(&db.units, "units"),
            purchase_value: parse_decimal_string_tolerant(&db.purchase_nav, "purchase_nav"),
            current_value: db
                .current_nav
                .as_deref()
                .map(|s| parse_decimal_string_tolerant(s, "current_nav")),
            added_at: db.added_date,
            last_updated: db.last_updated,
        }
    }
}
