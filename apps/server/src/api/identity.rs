use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::{config::IdentityClientConfig, main_lib::AppState};

/// Identity-client settings for the browser bundle.
async fn get_identity_config(State(state): State<Arc<AppState>>) -> Json<IdentityClientConfig> {
    Json(state.identity.clone())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/config/identity", get(get_identity_config))
}
