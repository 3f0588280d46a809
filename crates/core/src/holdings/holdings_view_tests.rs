#[cfg(test)]
mod tests {
    use crate::errors::{DatabaseError, Error, Result};
    use crate::holdings::{
        ActionOutcome, AddFundForm, AddHoldingForm, AddStockForm, AssetClass,
        CurrentValueUpdate, EquityDetails, FundDetails, Holding, HoldingDetails,
        HoldingRepositoryTrait, HoldingsSurface, HoldingsView, LoadOutcome, LookupKey,
        NewHolding, RowAction, RowActionState, TableBody, INVALID_FORM_MESSAGE,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use holdfolio_market_data::{LookupError, LookupResult, PriceLookupTrait};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Mock repository ---
    #[derive(Default)]
    struct MockHoldingRepository {
        holdings: Mutex<Vec<Holding>>,
        fail_list: AtomicBool,
        fail_writes: AtomicBool,
        next_id: AtomicUsize,
        write_calls: AtomicUsize,
        updates: Mutex<Vec<(String, CurrentValueUpdate)>>,
    }

    impl MockHoldingRepository {
        fn with(holdings: Vec<Holding>) -> Self {
            let repo = Self::default();
            *repo.holdings.lock().unwrap() = holdings;
            repo
        }

        fn db_error() -> Error {
            Error::Database(DatabaseError::QueryFailed("disk I/O error".to_string()))
        }
    }

    #[async_trait]
    impl HoldingRepositoryTrait for MockHoldingRepository {
        async fn list(&self, user_id: &str, asset_class: AssetClass) -> Result<Vec<Holding>> {
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Self::db_error());
            }
            Ok(self
                .holdings
                .lock()
                .unwrap()
                .iter()
                .filter(|h| h.user_id == user_id && h.asset_class() == asset_class)
                .cloned()
                .collect())
        }

        async fn insert(&self, user_id: &str, new_holding: NewHolding) -> Result<Holding> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::db_error());
            }
            let now = Utc::now().naive_utc();
            let holding = Holding {
                id: format!("h{}", self.next_id.fetch_add(1, Ordering::SeqCst)),
                user_id: user_id.to_string(),
                details: new_holding.details,
                quantity: new_holding.quantity,
                purchase_value: new_holding.purchase_value,
                current_value: Some(new_holding.current_value),
                added_at: now,
                last_updated: now,
            };
            self.holdings.lock().unwrap().push(holding.clone());
            Ok(holding)
        }

        async fn update_current_value(
            &self,
            _user_id: &str,
            _asset_class: AssetClass,
            holding_id: &str,
            update: CurrentValueUpdate,
        ) -> Result<()> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::db_error());
            }
            let mut holdings = self.holdings.lock().unwrap();
            if let Some(h) = holdings.iter_mut().find(|h| h.id == holding_id) {
                h.current_value = Some(update.current_value);
            }
            self.updates
                .lock()
                .unwrap()
                .push((holding_id.to_string(), update));
            Ok(())
        }

        async fn delete(
            &self,
            _user_id: &str,
            _asset_class: AssetClass,
            holding_id: &str,
        ) -> Result<usize> {
            self.write_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::db_error());
            }
            let mut holdings = self.holdings.lock().unwrap();
            let before = holdings.len();
            holdings.retain(|h| h.id != holding_id);
            Ok(before - holdings.len())
        }
    }

    // --- Mock lookup ---
    enum LookupReply {
        Found(Decimal, Option<&'static str>),
        NotFound,
        ServerError,
    }

    struct MockLookup {
        reply: LookupReply,
        calls: AtomicUsize,
    }

    impl MockLookup {
        fn new(reply: LookupReply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }

        fn answer(&self, not_found: String) -> std::result::Result<LookupResult, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                LookupReply::Found(value, as_of) => Ok(LookupResult {
                    symbol: None,
                    display_name: "Looked up".to_string(),
                    current_value: *value,
                    day_high: None,
                    day_low: None,
                    previous_close: None,
                    as_of: as_of.map(str::to_string),
                    fund_type: None,
                    fund_category: None,
                }),
                LookupReply::NotFound => Err(LookupError::NotFound(not_found)),
                LookupReply::ServerError => Err(LookupError::Server),
            }
        }
    }

    #[async_trait]
    impl PriceLookupTrait for MockLookup {
        async fn search_equity(
            &self,
            symbol: &str,
            exchange: &str,
        ) -> std::result::Result<LookupResult, LookupError> {
            self.answer(format!("Stock symbol {} not found on {}.", symbol, exchange))
        }

        async fn search_fund(
            &self,
            scheme_code: &str,
        ) -> std::result::Result<LookupResult, LookupError> {
            self.answer(format!("Scheme code {} not found.", scheme_code))
        }
    }

    // --- Recording surface ---
    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceEvent {
        Rendered(TableBody),
        Bound(Vec<RowAction>),
        RowState(String, RowActionState),
        FormError(String),
        FormErrorCleared,
        DialogClosed,
        FormReset,
        Confirm(String),
        Alert(String),
    }

    struct RecordingSurface {
        table_present: AtomicBool,
        confirm_answer: AtomicBool,
        events: Mutex<Vec<SurfaceEvent>>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                table_present: AtomicBool::new(true),
                confirm_answer: AtomicBool::new(true),
                events: Mutex::new(Vec::new()),
            }
        }

        fn events(&self) -> Vec<SurfaceEvent> {
            self.events.lock().unwrap().clone()
        }

        fn last_body(&self) -> Option<TableBody> {
            self.events().into_iter().rev().find_map(|e| match e {
                SurfaceEvent::Rendered(body) => Some(body),
                _ => None,
            })
        }

        fn alerts(&self) -> Vec<String> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    SurfaceEvent::Alert(m) => Some(m),
                    _ => None,
                })
                .collect()
        }

        fn row_states(&self, holding_id: &str) -> Vec<RowActionState> {
            self.events()
                .into_iter()
                .filter_map(|e| match e {
                    SurfaceEvent::RowState(id, state) if id == holding_id => Some(state),
                    _ => None,
                })
                .collect()
        }

        fn push(&self, event: SurfaceEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl HoldingsSurface for RecordingSurface {
        fn has_table(&self) -> bool {
            self.table_present.load(Ordering::SeqCst)
        }
        fn render_table(&self, body: &TableBody) {
            self.push(SurfaceEvent::Rendered(body.clone()));
        }
        fn bind_row_actions(&self, actions: &[RowAction]) {
            self.push(SurfaceEvent::Bound(actions.to_vec()));
        }
        fn set_row_state(&self, holding_id: &str, state: RowActionState) {
            self.push(SurfaceEvent::RowState(holding_id.to_string(), state));
        }
        fn show_form_error(&self, message: &str) {
            self.push(SurfaceEvent::FormError(message.to_string()));
        }
        fn clear_form_error(&self) {
            self.push(SurfaceEvent::FormErrorCleared);
        }
        fn close_add_dialog(&self) {
            self.push(SurfaceEvent::DialogClosed);
        }
        fn reset_add_form(&self) {
            self.push(SurfaceEvent::FormReset);
        }
        fn confirm(&self, message: &str) -> bool {
            self.push(SurfaceEvent::Confirm(message.to_string()));
            self.confirm_answer.load(Ordering::SeqCst)
        }
        fn alert(&self, message: &str) {
            self.push(SurfaceEvent::Alert(message.to_string()));
        }
    }

    // --- Fixtures ---
    fn tcs() -> Holding {
        let now = Utc::now().naive_utc();
        Holding {
            id: "tcs-1".to_string(),
            user_id: "user-1".to_string(),
            details: HoldingDetails::Equity(EquityDetails {
                symbol: "TCS".to_string(),
                exchange: Some("NSE".to_string()),
                company_name: "Tata Consultancy Services".to_string(),
            }),
            quantity: dec!(10),
            purchase_value: dec!(100),
            current_value: Some(dec!(120)),
            added_at: now,
            last_updated: now,
        }
    }

    fn bluechip() -> Holding {
        let now = Utc::now().naive_utc();
        Holding {
            id: "fund-1".to_string(),
            user_id: "user-1".to_string(),
            details: HoldingDetails::Fund(FundDetails {
                scheme_code: Some("120586".to_string()),
                fund_name: "ICICI Prudential Bluechip Fund".to_string(),
                fund_type: None,
                nav_date: None,
            }),
            quantity: dec!(5),
            purchase_value: dec!(50),
            current_value: Some(dec!(40)),
            added_at: now,
            last_updated: now,
        }
    }

    fn view(
        asset_class: AssetClass,
        repo: &Arc<MockHoldingRepository>,
        lookup: &Arc<MockLookup>,
        surface: &Arc<RecordingSurface>,
    ) -> HoldingsView {
        HoldingsView::new(asset_class, repo.clone(), lookup.clone(), surface.clone())
    }

    fn found(value: Decimal) -> Arc<MockLookup> {
        Arc::new(MockLookup::new(LookupReply::Found(value, None)))
    }

    // ==================== load_holdings ====================

    #[tokio::test]
    async fn test_load_empty_collection_renders_placeholder_without_bindings() {
        let repo = Arc::new(MockHoldingRepository::default());
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        assert_eq!(view.load_holdings("user-1").await, LoadOutcome::Empty);

        let events = surface.events();
        assert_eq!(
            events[0],
            SurfaceEvent::Rendered(TableBody::message(AssetClass::Stocks, "Loading stocks..."))
        );
        let body = surface.last_body().unwrap();
        assert_eq!(body.row_count(), 1);
        assert!(body
            .to_html()
            .contains("No stocks found. Add your first stock investment."));
        assert!(!events.iter().any(|e| matches!(e, SurfaceEvent::Bound(_))));
    }

    #[tokio::test]
    async fn test_load_renders_rows_and_binds_actions() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs(), bluechip()]));
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        assert_eq!(view.load_holdings("user-1").await, LoadOutcome::Rendered(1));

        let html = surface.last_body().unwrap().to_html();
        assert!(html.contains("₹1200.00"));
        assert!(html.contains(r#"class="profit""#));
        let bound = surface
            .events()
            .into_iter()
            .find_map(|e| match e {
                SurfaceEvent::Bound(actions) => Some(actions),
                _ => None,
            })
            .unwrap();
        assert_eq!(bound.len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_renders_error_row() {
        let repo = Arc::new(MockHoldingRepository::default());
        repo.fail_list.store(true, Ordering::SeqCst);
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::MutualFunds, &repo, &found(dec!(1)), &surface);

        assert_eq!(view.load_holdings("user-1").await, LoadOutcome::Failed);
        assert_eq!(
            surface.last_body().unwrap(),
            TableBody::error(AssetClass::MutualFunds, "Error loading mutual funds data.")
        );
    }

    #[tokio::test]
    async fn test_load_without_table_is_a_no_op() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        let surface = Arc::new(RecordingSurface::new());
        surface.table_present.store(false, Ordering::SeqCst);
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        assert_eq!(view.load_holdings("user-1").await, LoadOutcome::Skipped);
        assert!(surface.events().is_empty());
    }

    // ==================== add_holding ====================

    #[tokio::test]
    async fn test_add_invalid_form_makes_no_storage_call() {
        let repo = Arc::new(MockHoldingRepository::default());
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        let form = AddHoldingForm::Stock(AddStockForm {
            symbol: "TCS".to_string(),
            company_name: "Tata Consultancy Services".to_string(),
            quantity: "abc".to_string(),
            purchase_price: "100".to_string(),
            ..Default::default()
        });
        let outcome = view.add_holding("user-1", &form).await;

        assert_eq!(
            outcome,
            ActionOutcome::Rejected(INVALID_FORM_MESSAGE.to_string())
        );
        assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
        assert!(surface
            .events()
            .contains(&SurfaceEvent::FormError(INVALID_FORM_MESSAGE.to_string())));
    }

    #[tokio::test]
    async fn test_add_success_closes_dialog_and_reloads() {
        let repo = Arc::new(MockHoldingRepository::default());
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::MutualFunds, &repo, &found(dec!(1)), &surface);

        let form = AddHoldingForm::Fund(AddFundForm {
            scheme_code: "120586".to_string(),
            fund_name: "ICICI Prudential Bluechip Fund".to_string(),
            units: "2".to_string(),
            purchase_nav: "100".to_string(),
            ..Default::default()
        });
        assert_eq!(
            view.add_holding("user-1", &form).await,
            ActionOutcome::Completed
        );

        let events = surface.events();
        let closed = events.iter().position(|e| *e == SurfaceEvent::DialogClosed);
        let reset = events.iter().position(|e| *e == SurfaceEvent::FormReset);
        assert!(closed.is_some() && reset > closed);

        let stored = repo.holdings.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].current_value, Some(dec!(100)));
        drop(stored);
        assert_eq!(surface.last_body().unwrap().row_count(), 1);
    }

    #[tokio::test]
    async fn test_add_write_failure_keeps_form_open() {
        let repo = Arc::new(MockHoldingRepository::default());
        repo.fail_writes.store(true, Ordering::SeqCst);
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        let form = AddHoldingForm::Stock(AddStockForm {
            symbol: "TCS".to_string(),
            company_name: "Tata Consultancy Services".to_string(),
            quantity: "1".to_string(),
            purchase_price: "100".to_string(),
            ..Default::default()
        });
        let outcome = view.add_holding("user-1", &form).await;

        assert_eq!(
            outcome,
            ActionOutcome::Failed("Error adding stock. Please try again.".to_string())
        );
        assert!(!surface.events().contains(&SurfaceEvent::DialogClosed));
    }

    #[tokio::test]
    async fn test_add_form_of_other_class_is_rejected() {
        let repo = Arc::new(MockHoldingRepository::default());
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        let form = AddHoldingForm::Fund(AddFundForm {
            fund_name: "Some Fund".to_string(),
            units: "1".to_string(),
            purchase_nav: "10".to_string(),
            ..Default::default()
        });
        assert!(matches!(
            view.add_holding("user-1", &form).await,
            ActionOutcome::Rejected(_)
        ));
        assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
    }

    // ==================== delete_holding ====================

    #[tokio::test]
    async fn test_declined_delete_leaves_everything_unchanged() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        let surface = Arc::new(RecordingSurface::new());
        surface.confirm_answer.store(false, Ordering::SeqCst);
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        assert_eq!(
            view.delete_holding("user-1", "tcs-1").await,
            ActionOutcome::Cancelled
        );
        assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
        assert_eq!(repo.holdings.lock().unwrap().len(), 1);
        assert_eq!(
            surface.events(),
            vec![SurfaceEvent::Confirm(
                "Are you sure you want to delete this stock?".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_confirmed_delete_reloads() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(1)), &surface);

        assert_eq!(
            view.delete_holding("user-1", "tcs-1").await,
            ActionOutcome::Completed
        );
        assert!(repo.holdings.lock().unwrap().is_empty());
        assert_eq!(
            surface.row_states("tcs-1"),
            vec![
                RowActionState::Pending,
                RowActionState::Success,
                RowActionState::Idle
            ]
        );
        assert!(surface
            .last_body()
            .unwrap()
            .to_html()
            .contains("No stocks found."));
    }

    #[tokio::test]
    async fn test_delete_failure_alerts() {
        let repo = Arc::new(MockHoldingRepository::with(vec![bluechip()]));
        repo.fail_writes.store(true, Ordering::SeqCst);
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::MutualFunds, &repo, &found(dec!(1)), &surface);

        view.delete_holding("user-1", "fund-1").await;
        assert_eq!(
            surface.alerts(),
            vec!["Error deleting mutual fund. Please try again.".to_string()]
        );
        assert_eq!(
            surface.row_states("fund-1"),
            vec![
                RowActionState::Pending,
                RowActionState::Failure,
                RowActionState::Idle
            ]
        );
    }

    // ==================== refresh_current_value ====================

    #[tokio::test]
    async fn test_refresh_stock_writes_current_value_only() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        let surface = Arc::new(RecordingSurface::new());
        let view = view(AssetClass::Stocks, &repo, &found(dec!(130)), &surface);
        let key = tcs().lookup_key().unwrap();

        assert_eq!(
            view.refresh_current_value("user-1", "tcs-1", &key).await,
            ActionOutcome::Completed
        );
        let updates = repo.updates.lock().unwrap().clone();
        assert_eq!(
            updates,
            vec![(
                "tcs-1".to_string(),
                CurrentValueUpdate {
                    current_value: dec!(130),
                    nav_date: None
                }
            )]
        );
        assert!(surface.last_body().unwrap().to_html().contains("₹1300.00"));
    }

    #[tokio::test]
    async fn test_refresh_fund_also_writes_nav_date() {
        let repo = Arc::new(MockHoldingRepository::with(vec![bluechip()]));
        let surface = Arc::new(RecordingSurface::new());
        let lookup = Arc::new(MockLookup::new(LookupReply::Found(
            dec!(45.5),
            Some("17-10-2026"),
        )));
        let view = view(AssetClass::MutualFunds, &repo, &lookup, &surface);
        let key = LookupKey::Fund {
            scheme_code: "120586".to_string(),
        };

        view.refresh_current_value("user-1", "fund-1", &key).await;
        let updates = repo.updates.lock().unwrap().clone();
        assert_eq!(updates[0].1.nav_date.as_deref(), Some("17-10-2026"));
    }

    #[tokio::test]
    async fn test_refresh_lookup_failure_alerts_and_skips_write() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        let surface = Arc::new(RecordingSurface::new());
        let lookup = Arc::new(MockLookup::new(LookupReply::NotFound));
        let view = view(AssetClass::Stocks, &repo, &lookup, &surface);
        let key = tcs().lookup_key().unwrap();

        let outcome = view.refresh_current_value("user-1", "tcs-1", &key).await;

        let expected = "Error refreshing stock price: Stock symbol TCS not found on NSE.";
        assert_eq!(outcome, ActionOutcome::Failed(expected.to_string()));
        assert_eq!(surface.alerts(), vec![expected.to_string()]);
        assert_eq!(repo.write_calls.load(Ordering::SeqCst), 0);
        assert!(surface.last_body().is_none());
    }

    #[tokio::test]
    async fn test_refresh_fund_lookup_failure_uses_fixed_message() {
        let repo = Arc::new(MockHoldingRepository::with(vec![bluechip()]));
        let surface = Arc::new(RecordingSurface::new());
        let lookup = Arc::new(MockLookup::new(LookupReply::ServerError));
        let view = view(AssetClass::MutualFunds, &repo, &lookup, &surface);
        let key = bluechip().lookup_key().unwrap();

        view.refresh_current_value("user-1", "fund-1", &key).await;
        assert_eq!(
            surface.alerts(),
            vec!["Error refreshing NAV. Please try again.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_refresh_write_failure_alerts() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        repo.fail_writes.store(true, Ordering::SeqCst);
        let surface = Arc::new(RecordingSurface::new());
        let lookup = found(dec!(125));
        let view = view(AssetClass::Stocks, &repo, &lookup, &surface);
        let key = tcs().lookup_key().unwrap();

        view.refresh_current_value("user-1", "tcs-1", &key).await;
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            surface.alerts(),
            vec!["Error updating stock price in database. Please try again.".to_string()]
        );
        assert_eq!(
            surface.row_states("tcs-1"),
            vec![
                RowActionState::Pending,
                RowActionState::Failure,
                RowActionState::Idle
            ]
        );
    }

    #[tokio::test]
    async fn test_refresh_with_key_of_other_class_is_rejected() {
        let repo = Arc::new(MockHoldingRepository::with(vec![tcs()]));
        let surface = Arc::new(RecordingSurface::new());
        let lookup = found(dec!(1));
        let view = view(AssetClass::Stocks, &repo, &lookup, &surface);
        let key = LookupKey::Fund {
            scheme_code: "1".to_string(),
        };

        assert!(matches!(
            view.refresh_current_value("user-1", "tcs-1", &key).await,
            ActionOutcome::Rejected(_)
        ));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }
}
