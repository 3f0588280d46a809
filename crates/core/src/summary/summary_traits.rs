use super::summary_model::SummaryPanel;

/// The dashboard region a [`PortfolioSummaryView`](super::PortfolioSummaryView) draws into.
pub trait SummarySurface: Send + Sync {
    /// False when the page has no summary region.
    fn has_summary(&self) -> bool;

    fn render_summary(&self, panel: &SummaryPanel);
}
