#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use holdfolio_market_data::{
    EquityQuote, EquityQuoteProvider, FundNav, FundNavProvider, MarketDataError,
};
use holdfolio_server::{
    api::app_router,
    config::{Config, IdentityClientConfig},
    AppState,
};
use tower::ServiceExt;

pub enum EquityReply {
    Quote(EquityQuote),
    NotFound,
    Fail(String),
}

pub struct MockEquityProvider {
    reply: EquityReply,
    delay: Option<Duration>,
    pub tickers: Mutex<Vec<String>>,
}

impl MockEquityProvider {
    pub fn new(reply: EquityReply) -> Self {
        Self {
            reply,
            delay: None,
            tickers: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(reply: EquityReply, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(reply)
        }
    }
}

#[async_trait]
impl EquityQuoteProvider for MockEquityProvider {
    fn id(&self) -> &'static str {
        "MOCK_EQUITY"
    }

    async fn latest_quote(&self, ticker: &str) -> Result<EquityQuote, MarketDataError> {
        self.tickers.lock().unwrap().push(ticker.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.reply {
            EquityReply::Quote(quote) => Ok(EquityQuote {
                ticker: ticker.to_string(),
                ..quote.clone()
            }),
            EquityReply::NotFound => Err(MarketDataError::SymbolNotFound(ticker.to_string())),
            EquityReply::Fail(message) => Err(MarketDataError::ProviderError {
                provider: "MOCK_EQUITY".to_string(),
                message: message.clone(),
            }),
        }
    }
}

pub enum FundReply {
    Nav(FundNav),
    Status(u16),
    InvalidJson,
    Rejected(String),
    Empty,
}

pub struct MockFundProvider {
    reply: FundReply,
}

impl MockFundProvider {
    pub fn new(reply: FundReply) -> Self {
        Self { reply }
    }
}

#[async_trait]
impl FundNavProvider for MockFundProvider {
    fn id(&self) -> &'static str {
        "MOCK_FUNDS"
    }

    async fn latest_nav(&self, scheme_code: &str) -> Result<FundNav, MarketDataError> {
        match &self.reply {
            FundReply::Nav(nav) => Ok(nav.clone()),
            FundReply::Status(status) => Err(MarketDataError::UpstreamStatus {
                provider: "MOCK_FUNDS".to_string(),
                status: *status,
            }),
            FundReply::InvalidJson => Err(MarketDataError::InvalidResponse {
                provider: "MOCK_FUNDS".to_string(),
                message: "expected value at line 1 column 1".to_string(),
            }),
            FundReply::Rejected(message) => Err(MarketDataError::Rejected {
                provider: "MOCK_FUNDS".to_string(),
                message: message.clone(),
            }),
            FundReply::Empty => Err(MarketDataError::SymbolNotFound(scheme_code.to_string())),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: "dist".to_string(),
        mfapi_base_url: "http://127.0.0.1:1".to_string(),
        quote_timeout: Duration::from_secs(5),
        identity: IdentityClientConfig {
            api_key: Some("test-api-key".to_string()),
            auth_domain: Some("holdfolio.example.com".to_string()),
            project_id: Some("holdfolio-test".to_string()),
            storage_bucket: None,
            messaging_sender_id: None,
            app_id: Some("1:42:web:abc".to_string()),
        },
    }
}

pub fn test_state(
    equity: Arc<MockEquityProvider>,
    funds: Arc<MockFundProvider>,
    config: &Config,
) -> Arc<AppState> {
    Arc::new(AppState {
        equity_provider: equity,
        fund_provider: funds,
        identity: config.identity.clone(),
        quote_timeout: config.quote_timeout,
    })
}

pub fn test_app(equity: EquityReply, funds: FundReply) -> Router {
    let config = test_config();
    let state = test_state(
        Arc::new(MockEquityProvider::new(equity)),
        Arc::new(MockFundProvider::new(funds)),
        &config,
    );
    app_router(state, &config)
}

/// Sends a GET and returns the status and the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
