use std::{net::SocketAddr, time::Duration};

use serde::Serialize;

/// Settings the browser needs to talk to the identity provider.
///
/// Served as-is by `GET /api/config/identity`; unset values are `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityClientConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
}

impl IdentityClientConfig {
    fn from_env() -> Self {
        Self {
            api_key: env_opt("HF_IDENTITY_API_KEY"),
            auth_domain: env_opt("HF_IDENTITY_AUTH_DOMAIN"),
            project_id: env_opt("HF_IDENTITY_PROJECT_ID"),
            storage_bucket: env_opt("HF_IDENTITY_STORAGE_BUCKET"),
            messaging_sender_id: env_opt("HF_IDENTITY_MESSAGING_SENDER_ID"),
            app_id: env_opt("HF_IDENTITY_APP_ID"),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub mfapi_base_url: String,
    /// Upper bound on one upstream quote fetch
    pub quote_timeout: Duration,
    pub identity: IdentityClientConfig,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr = std::env::var("HF_LISTEN_ADDR")
            .ok()
            .and_then(|addr| match addr.parse::<SocketAddr>() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    eprintln!("Invalid HF_LISTEN_ADDR {:?}: {}", addr, e);
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));
        let cors_allow = std::env::var("HF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms = env_millis("HF_REQUEST_TIMEOUT_MS", 30000);
        let static_dir = std::env::var("HF_STATIC_DIR").unwrap_or_else(|_| "dist".into());
        let mfapi_base_url = std::env::var("HF_MFAPI_BASE_URL")
            .unwrap_or_else(|_| holdfolio_market_data::provider::mfapi::DEFAULT_BASE_URL.into());
        let quote_timeout_ms = env_millis("HF_QUOTE_TIMEOUT_MS", 5000);
        Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir,
            mfapi_base_url,
            quote_timeout: Duration::from_millis(quote_timeout_ms),
            identity: IdentityClientConfig::from_env(),
        }
    }
}

fn env_millis(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
