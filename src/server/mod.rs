//! # Balance API
//!
//! Thin HTTP pass-through to the ledger service.
//!
//! ## Endpoints
//!
//! - `GET /api/balance/{account_id}` - native balance in lamports,
//!   `{"balance": <number>}` or `500 {"error": "<message>"}`

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::{info, warn};

use crate::error::{WalletError, WalletResult};
use crate::inspector::parse_account_id;
use crate::traits::ledger_client::LedgerClient;

/// Shared handler state
#[derive(Clone)]
pub struct ApiState {
    ledger: Arc<dyn LedgerClient>,
    query_timeout: Duration,
}

impl ApiState {
    pub fn new(ledger: Arc<dyn LedgerClient>, query_timeout: Duration) -> Self {
        Self { ledger, query_timeout }
    }

    async fn balance(&self, account_id: &str) -> WalletResult<u64> {
        let wallet = parse_account_id(account_id)?;
        tokio::time::timeout(self.query_timeout, self.ledger.balance(&wallet))
            .await
            .map_err(|_| WalletError::QueryTimeout(self.query_timeout))?
            .map_err(WalletError::QueryFailed)
    }
}

async fn balance_handler(
    State(state): State<ApiState>,
    Path(account_id): Path<String>,
) -> impl IntoResponse {
    match state.balance(&account_id).await {
        Ok(balance) => (StatusCode::OK, Json(serde_json::json!({ "balance": balance }))),
        Err(e) => {
            warn!("Balance lookup for {} failed: {}", account_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/balance/{account_id}", get(balance_handler))
        .with_state(state)
}

/// Serve the API until the listener fails
pub async fn serve(state: ApiState, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .await
        .context("Balance API server stopped")?;

    Ok(())
}
