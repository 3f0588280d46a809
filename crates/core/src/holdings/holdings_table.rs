//! Table rows for the holdings views.
//!
//! The whole table body is rebuilt from the collection on every load; there
//! is no incremental patching.

use serde::Serialize;

use super::holdings_constants::MISSING_FIELD_PLACEHOLDER;
use super::holdings_model::{AssetClass, Holding, HoldingDetails, LookupKey};
use crate::constants::UNITS_DECIMAL_PRECISION;
use crate::errors::Result;
use crate::utils::html::{escape_html, message_row};
use crate::valuation::{
    format_fixed, format_holding_money, format_plain, format_profit_loss, ProfitClass,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowActionKind {
    Delete,
    Refresh { key: LookupKey },
}

/// A control bound to one rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowAction {
    pub holding_id: String,
    pub kind: RowActionKind,
}

/// One rendered holding, with every cell already formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    pub holding_id: String,
    pub asset_class: AssetClass,
    /// Stocks: symbol, company, exchange. Funds: scheme code, fund name.
    pub identity: Vec<String>,
    pub quantity: String,
    pub purchase_value: String,
    pub current_value: String,
    pub total_value: String,
    pub profit_loss: String,
    pub profit_class: ProfitClass,
    /// Present only when the holding can be refreshed
    pub refresh_key: Option<LookupKey>,
}

impl HoldingRow {
    pub fn from_holding(holding: &Holding) -> Result<Self> {
        let valuation = holding.valuation()?;

        let (identity, quantity) = match &holding.details {
            HoldingDetails::Equity(e) => (
                vec![
                    e.symbol.clone(),
                    e.company_name.clone(),
                    e.exchange
                        .clone()
                        .unwrap_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string()),
                ],
                format_plain(holding.quantity),
            ),
            HoldingDetails::Fund(f) => (
                vec![
                    f.scheme_code
                        .clone()
                        .unwrap_or_else(|| MISSING_FIELD_PLACEHOLDER.to_string()),
                    f.fund_name.clone(),
                ],
                format_fixed(holding.quantity, UNITS_DECIMAL_PRECISION),
            ),
        };

        Ok(Self {
            holding_id: holding.id.clone(),
            asset_class: holding.asset_class(),
            identity,
            quantity,
            purchase_value: format_holding_money(holding.purchase_value),
            current_value: format_holding_money(valuation.current_value),
            total_value: format_holding_money(valuation.total_value),
            profit_loss: format_profit_loss(&valuation),
            profit_class: valuation.profit_class(),
            refresh_key: holding.lookup_key(),
        })
    }

    /// Delete always, refresh only when there is a lookup key.
    pub fn actions(&self) -> Vec<RowAction> {
        let mut actions = vec![RowAction {
            holding_id: self.holding_id.clone(),
            kind: RowActionKind::Delete,
        }];
        if let Some(key) = &self.refresh_key {
            actions.push(RowAction {
                holding_id: self.holding_id.clone(),
                kind: RowActionKind::Refresh { key: key.clone() },
            });
        }
        actions
    }

    pub fn to_html(&self) -> String {
        let id = escape_html(&self.holding_id);
        let (id_attr, delete_class) = match self.asset_class {
            AssetClass::Stocks => ("data-stock-id", "delete-stock"),
            AssetClass::MutualFunds => ("data-fund-id", "delete-fund"),
        };

        let mut html = format!(r#"<tr {}="{}">"#, id_attr, id);
        for cell in self
            .identity
            .iter()
            .chain([
                &self.quantity,
                &self.purchase_value,
                &self.current_value,
                &self.total_value,
            ])
        {
            html.push_str(&format!("<td>{}</td>", escape_html(cell)));
        }
        html.push_str(&format!(
            r#"<td class="{}">{}</td>"#,
            self.profit_class.css_class(),
            escape_html(&self.profit_loss)
        ));

        html.push_str("<td>");
        html.push_str(&format!(
            r#"<button class="btn btn-sm btn-danger {}" {}="{}">Delete</button>"#,
            delete_class, id_attr, id
        ));
        match &self.refresh_key {
            Some(LookupKey::Equity { symbol, exchange }) => html.push_str(&format!(
                r#"<button class="btn btn-sm btn-secondary refresh-price" data-stock-id="{}" data-stock-symbol="{}" data-stock-exchange="{}"><i class="bi bi-arrow-clockwise"></i></button>"#,
                id,
                escape_html(symbol),
                escape_html(exchange)
            )),
            Some(LookupKey::Fund { scheme_code }) => html.push_str(&format!(
                r#"<button class="btn btn-sm btn-secondary refresh-nav" data-fund-id="{}" data-scheme-code="{}"><i class="bi bi-arrow-clockwise"></i></button>"#,
                id,
                escape_html(scheme_code)
            )),
            None => {}
        }
        html.push_str("</td></tr>");
        html
    }
}

/// What the table body currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TableBody {
    /// Loading, empty placeholder or error: one full-width row
    Message {
        text: String,
        colspan: usize,
        is_error: bool,
    },
    Rows { rows: Vec<HoldingRow> },
}

impl TableBody {
    pub fn message(asset_class: AssetClass, text: &str) -> Self {
        TableBody::Message {
            text: text.to_string(),
            colspan: asset_class.column_count(),
            is_error: false,
        }
    }

    pub fn error(asset_class: AssetClass, text: &str) -> Self {
        TableBody::Message {
            text: text.to_string(),
            colspan: asset_class.column_count(),
            is_error: true,
        }
    }

    /// Builds one row per holding; any row failing to value fails the table.
    pub fn from_holdings(holdings: &[Holding]) -> Result<Self> {
        let rows = holdings
            .iter()
            .map(HoldingRow::from_holding)
            .collect::<Result<Vec<_>>>()?;
        Ok(TableBody::Rows { rows })
    }

    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Message { .. } => 1,
            TableBody::Rows { rows } => rows.len(),
        }
    }

    pub fn actions(&self) -> Vec<RowAction> {
        match self {
            TableBody::Message { .. } => Vec::new(),
            TableBody::Rows { rows } => rows.iter().flat_map(HoldingRow::actions).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            TableBody::Message {
                text,
                colspan,
                is_error,
            } => message_row(text, *colspan, *is_error),
            TableBody::Rows { rows } => rows.iter().map(HoldingRow::to_html).collect(),
        }
    }
}
