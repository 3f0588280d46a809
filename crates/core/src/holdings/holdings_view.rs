//! Holdings table view: load, add, delete and refresh for one asset class.

use std::sync::Arc;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use holdfolio_market_data::{LookupError, LookupResult, PriceLookupTrait};

use super::holdings_constants::INVALID_FORM_MESSAGE;
use super::holdings_forms::AddHoldingForm;
use super::holdings_model::{AssetClass, CurrentValueUpdate, LookupKey, NewHolding};
use super::holdings_table::TableBody;
use super::holdings_traits::{HoldingRepositoryTrait, HoldingsSurface};
use crate::errors::{Result, ValidationError};

/// Progress of a row action, published so a front-end can disable controls.
///
/// `Idle → Pending → Success | Failure → Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowActionState {
    Idle,
    Pending,
    Success,
    Failure,
}

/// Result of [`HoldingsView::load_holdings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The table was gone; nothing was fetched
    Skipped,
    /// Placeholder row rendered
    Empty,
    /// This many holding rows rendered
    Rendered(usize),
    /// Error row rendered
    Failed,
}

/// Result of an add, delete or refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The user declined the confirmation
    Cancelled,
    /// Input was invalid; nothing was sent
    Rejected(String),
    /// A lookup or storage call failed; the message was shown to the user
    Failed(String),
}

/// Table view over one asset class of one user's holdings.
pub struct HoldingsView {
    asset_class: AssetClass,
    repository: Arc<dyn HoldingRepositoryTrait>,
    lookup: Arc<dyn PriceLookupTrait>,
    surface: Arc<dyn HoldingsSurface>,
}

impl HoldingsView {
    pub fn new(
        asset_class: AssetClass,
        repository: Arc<dyn HoldingRepositoryTrait>,
        lookup: Arc<dyn PriceLookupTrait>,
        surface: Arc<dyn HoldingsSurface>,
    ) -> Self {
        Self {
            asset_class,
            repository,
            lookup,
            surface,
        }
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Fetches the collection and re-renders the whole table.
    ///
    /// Failures are rendered as an error row and logged; they never propagate.
    pub async fn load_holdings(&self, user_id: &str) -> LoadOutcome {
        if !self.surface.has_table() {
            return LoadOutcome::Skipped;
        }

        self.surface.render_table(&TableBody::message(
            self.asset_class,
            self.asset_class.loading_message(),
        ));

        let body = self
            .repository
            .list(user_id, self.asset_class)
            .await
            .and_then(|holdings| {
                if holdings.is_empty() {
                    Ok(None)
                } else {
                    TableBody::from_holdings(&holdings).map(Some)
                }
            });

        // The page may have gone away while the list was in flight
        if !self.surface.has_table() {
            return LoadOutcome::Skipped;
        }

        match body {
            Ok(None) => {
                self.surface.render_table(&TableBody::message(
                    self.asset_class,
                    self.asset_class.empty_message(),
                ));
                LoadOutcome::Empty
            }
            Ok(Some(body)) => {
                let rows = body.row_count();
                self.surface.render_table(&body);
                self.surface.bind_row_actions(&body.actions());
                debug!("Rendered {} {} rows", rows, self.asset_class);
                LoadOutcome::Rendered(rows)
            }
            Err(e) => {
                error!("Error loading {} data: {}", self.asset_class, e);
                self.surface.render_table(&TableBody::error(
                    self.asset_class,
                    self.asset_class.load_error_message(),
                ));
                LoadOutcome::Failed
            }
        }
    }

    /// Validates the add form, inserts the holding and reloads the table.
    pub async fn add_holding(&self, user_id: &str, form: &AddHoldingForm) -> ActionOutcome {
        self.surface.clear_form_error();

        let new_holding = match self.validate_form(form) {
            Ok(new_holding) => new_holding,
            Err(e) => {
                debug!("Rejected {} form: {}", self.asset_class, e);
                self.surface.show_form_error(INVALID_FORM_MESSAGE);
                return ActionOutcome::Rejected(INVALID_FORM_MESSAGE.to_string());
            }
        };

        if let Err(e) = self.repository.insert(user_id, new_holding).await {
            error!("Error adding to {}: {}", self.asset_class, e);
            let message = self.asset_class.add_error_message();
            self.surface.show_form_error(message);
            return ActionOutcome::Failed(message.to_string());
        }

        self.surface.close_add_dialog();
        self.surface.reset_add_form();
        self.load_holdings(user_id).await;
        ActionOutcome::Completed
    }

    fn validate_form(&self, form: &AddHoldingForm) -> Result<NewHolding> {
        if form.asset_class() != self.asset_class {
            return Err(ValidationError::InvalidInput(format!(
                "{} form submitted to the {} view",
                form.asset_class(),
                self.asset_class
            ))
            .into());
        }
        form.to_new_holding()
    }

    /// Deletes a holding after the user confirms.
    pub async fn delete_holding(&self, user_id: &str, holding_id: &str) -> ActionOutcome {
        if !self
            .surface
            .confirm(self.asset_class.delete_confirm_message())
        {
            return ActionOutcome::Cancelled;
        }

        self.surface.set_row_state(holding_id, RowActionState::Pending);

        let outcome = match self
            .repository
            .delete(user_id, self.asset_class, holding_id)
            .await
        {
            Ok(_) => {
                self.surface.set_row_state(holding_id, RowActionState::Success);
                self.load_holdings(user_id).await;
                ActionOutcome::Completed
            }
            Err(e) => {
                error!("Error deleting {} {}: {}", self.asset_class, holding_id, e);
                self.surface.set_row_state(holding_id, RowActionState::Failure);
                let message = self.asset_class.delete_error_message();
                self.surface.alert(message);
                ActionOutcome::Failed(message.to_string())
            }
        };

        self.surface.set_row_state(holding_id, RowActionState::Idle);
        outcome
    }

    /// Looks up the holding's current value and writes it back.
    ///
    /// Only the current value, the last-updated timestamp and (for funds)
    /// the NAV date change. On failure the row is left as it was.
    pub async fn refresh_current_value(
        &self,
        user_id: &str,
        holding_id: &str,
        key: &LookupKey,
    ) -> ActionOutcome {
        if key.asset_class() != self.asset_class {
            let message = format!("Cannot refresh a {} holding here", key.asset_class());
            return ActionOutcome::Rejected(message);
        }

        self.surface.set_row_state(holding_id, RowActionState::Pending);
        let outcome = self.refresh_inner(user_id, holding_id, key).await;
        match &outcome {
            ActionOutcome::Completed => {
                self.surface.set_row_state(holding_id, RowActionState::Success);
                self.load_holdings(user_id).await;
            }
            _ => self.surface.set_row_state(holding_id, RowActionState::Failure),
        }
        self.surface.set_row_state(holding_id, RowActionState::Idle);
        outcome
    }

    async fn refresh_inner(&self, user_id: &str, holding_id: &str, key: &LookupKey) -> ActionOutcome {
        let result = match self.lookup_key(key).await {
            Ok(result) => result,
            Err(e) => {
                error!("Error refreshing {} {}: {}", self.asset_class, holding_id, e);
                let message = self.asset_class.refresh_error_message(&e);
                self.surface.alert(&message);
                return ActionOutcome::Failed(message);
            }
        };

        let update = CurrentValueUpdate {
            current_value: result.current_value,
            nav_date: match key {
                LookupKey::Fund { .. } => result.as_of.clone(),
                LookupKey::Equity { .. } => None,
            },
        };

        if let Err(e) = self
            .repository
            .update_current_value(user_id, self.asset_class, holding_id, update)
            .await
        {
            error!("Error updating {} {}: {}", self.asset_class, holding_id, e);
            let message = self.asset_class.update_error_message();
            self.surface.alert(message);
            return ActionOutcome::Failed(message.to_string());
        }

        ActionOutcome::Completed
    }

    async fn lookup_key(
        &self,
        key: &LookupKey,
    ) -> std::result::Result<LookupResult, LookupError> {
        match key {
            LookupKey::Equity { symbol, exchange } => {
                self.lookup.search_equity(symbol, exchange).await
            }
            LookupKey::Fund { scheme_code } => self.lookup.search_fund(scheme_code).await,
        }
    }
}
