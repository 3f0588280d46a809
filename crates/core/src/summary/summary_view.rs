//! Dashboard portfolio summary view.

use std::sync::Arc;

use log::{debug, error};

use super::summary_model::{ClassTotals, PortfolioSummary, SummaryPanel};
use super::summary_traits::SummarySurface;
use crate::errors::Result;
use crate::holdings::{AssetClass, HoldingRepositoryTrait};

/// Result of [`PortfolioSummaryView::summarize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// No summary region on the page
    Skipped,
    Rendered(PortfolioSummary),
    /// Error panel rendered; partial totals were discarded
    Failed,
}

pub struct PortfolioSummaryView {
    repository: Arc<dyn HoldingRepositoryTrait>,
    surface: Arc<dyn SummarySurface>,
}

impl PortfolioSummaryView {
    pub fn new(
        repository: Arc<dyn HoldingRepositoryTrait>,
        surface: Arc<dyn SummarySurface>,
    ) -> Self {
        Self {
            repository,
            surface,
        }
    }

    /// Loads stocks, then mutual funds, and renders the three summary panels.
    pub async fn summarize(&self, user_id: &str) -> SummaryOutcome {
        if !self.surface.has_summary() {
            return SummaryOutcome::Skipped;
        }

        self.surface.render_summary(&SummaryPanel::Loading);

        match self.compute(user_id).await {
            Ok(summary) => {
                debug!(
                    "Portfolio summary: {} stocks, {} funds",
                    summary.stocks.count, summary.funds.count
                );
                self.surface.render_summary(&SummaryPanel::Ready(summary));
                SummaryOutcome::Rendered(summary)
            }
            Err(e) => {
                error!("Error loading portfolio data: {}", e);
                self.surface.render_summary(&SummaryPanel::Error);
                SummaryOutcome::Failed
            }
        }
    }

    async fn compute(&self, user_id: &str) -> Result<PortfolioSummary> {
        let stocks = self.repository.list(user_id, AssetClass::Stocks).await?;
        let stocks = ClassTotals::from_holdings(&stocks)?;

        let funds = self
            .repository
            .list(user_id, AssetClass::MutualFunds)
            .await?;
        let funds = ClassTotals::from_holdings(&funds)?;

        PortfolioSummary::new(stocks, funds)
    }
}
