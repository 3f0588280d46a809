//! Holding repository and view surface traits.

use async_trait::async_trait;

use super::holdings_model::{AssetClass, CurrentValueUpdate, Holding, NewHolding};
use super::holdings_table::{RowAction, TableBody};
use super::holdings_view::RowActionState;
use crate::errors::Result;

/// Trait defining the contract for holding storage.
///
/// Each user owns one collection per [`AssetClass`]. Implementations assign
/// ids and timestamps and must make every single-holding write atomic.
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Lists every holding of `asset_class` owned by `user_id`, in no particular order.
    async fn list(&self, user_id: &str, asset_class: AssetClass) -> Result<Vec<Holding>>;

    /// Inserts a holding, assigning its id, added date and last-updated timestamp.
    async fn insert(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding>;

    /// Writes a new current value (and NAV date, for funds) and refreshes
    /// the last-updated timestamp. Every other field is left untouched.
    async fn update_current_value(
        &self,
        user_id: &str,
        asset_class: AssetClass,
        holding_id: &str,
        update: CurrentValueUpdate,
    ) -> Result<()>;

    /// Deletes a holding by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, user_id: &str, asset_class: AssetClass, holding_id: &str)
        -> Result<usize>;
}

/// The page region a [`HoldingsView`](super::HoldingsView) draws into.
pub trait HoldingsSurface: Send + Sync {
    /// False once the table is gone (page navigated away).
    fn has_table(&self) -> bool;

    /// Replaces the whole table body.
    fn render_table(&self, body: &TableBody);

    /// Binds the row controls of the body just rendered.
    fn bind_row_actions(&self, actions: &[RowAction]);

    fn set_row_state(&self, holding_id: &str, state: RowActionState);

    fn show_form_error(&self, message: &str);

    fn clear_form_error(&self);

    fn close_add_dialog(&self);

    fn reset_add_form(&self);

    /// Blocking yes/no question.
    fn confirm(&self, message: &str) -> bool;

    /// Blocking notice.
    fn alert(&self, message: &str);
}
