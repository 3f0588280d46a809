use super::lookup_model::{FormField, SearchStatus};

/// The add dialog a search form writes into.
pub trait SearchFormSurface: Send + Sync {
    /// Disables the search control and shows a spinner while `busy`.
    fn set_busy(&self, busy: bool);

    fn show_status(&self, status: &SearchStatus);

    fn set_field(&self, field: FormField, value: &str);

    /// Shows or hides the day-range block under the stock form.
    fn set_details_visible(&self, visible: bool);
}
