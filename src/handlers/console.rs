use async_trait::async_trait;
use tracing::{info, error};

use crate::error::WalletError;
use crate::models::inspection::InspectionResult;
use crate::traits::event_handler::InspectionEventHandler;

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InspectionEventHandler for ConsoleEventHandler {
    async fn handle_inspection(&self, result: &InspectionResult) {
        info!("{}", "=".repeat(80));
        info!("Account: {}", result.account);
        info!(
            "Timestamp: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        info!("{}", "-".repeat(80));

        if result.query_was_empty() {
            info!("No token holdings found in wallet");
        } else if result.is_empty() {
            info!("No holdings above {}", result.threshold);
        } else {
            for (i, holding) in result.holdings.iter().enumerate() {
                info!("{}. {}", i + 1, holding.address);
                if let Some(mint) = &holding.mint {
                    info!("   Mint: {}", mint);
                }
                info!("   Balance: {:.8}", holding.balance);
            }
        }

        info!("{}", "-".repeat(80));
        info!(
            "Shown: {} / Total: {} / Skipped: {}",
            result.len(),
            result.total_holdings,
            result.skipped
        );
        info!("{}", "=".repeat(80));
    }

    async fn handle_error(&self, error: &WalletError) {
        error!("Wallet inspector error: {}", error);
    }
}
