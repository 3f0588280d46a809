//! Drives a page's views from the identity subscription.

use log::debug;
use tokio::sync::watch;

use crate::holdings::{HoldingsView, LoadOutcome};
use crate::session::{GateOutcome, SessionGate, User};
use crate::summary::{PortfolioSummaryView, SummaryOutcome};

/// What one authentication-state change did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub gate: GateOutcome,
    pub holdings: Option<LoadOutcome>,
    pub summary: Option<SummaryOutcome>,
}

/// One page: the session gate plus whichever data views the page has.
pub struct PageController {
    gate: SessionGate,
    holdings: Option<HoldingsView>,
    summary: Option<PortfolioSummaryView>,
}

impl PageController {
    pub fn new(gate: SessionGate) -> Self {
        Self {
            gate,
            holdings: None,
            summary: None,
        }
    }

    pub fn with_holdings(mut self, view: HoldingsView) -> Self {
        self.holdings = Some(view);
        self
    }

    pub fn with_summary(mut self, view: PortfolioSummaryView) -> Self {
        self.summary = Some(view);
        self
    }

    pub fn gate(&self) -> &SessionGate {
        &self.gate
    }

    pub fn holdings(&self) -> Option<&HoldingsView> {
        self.holdings.as_ref()
    }

    /// Applies the gate, then loads the page's data when signed in.
    pub async fn handle_auth_state(&self, user: Option<&User>) -> PageOutcome {
        let gate = self.gate.apply(user);

        let Some(user) = user else {
            return PageOutcome {
                gate,
                holdings: None,
                summary: None,
            };
        };

        let holdings = match &self.holdings {
            Some(view) => Some(view.load_holdings(&user.uid).await),
            None => None,
        };
        let summary = match &self.summary {
            Some(view) => Some(view.summarize(&user.uid).await),
            None => None,
        };

        PageOutcome {
            gate,
            holdings,
            summary,
        }
    }

    /// Handles the current state, then every change until the sender is dropped.
    pub async fn run(&self, mut auth_state: watch::Receiver<Option<User>>) {
        loop {
            let user = auth_state.borrow_and_update().clone();
            self.handle_auth_state(user.as_ref()).await;

            if auth_state.changed().await.is_err() {
                debug!("Auth state channel closed");
                break;
            }
        }
    }
}
