use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use solana_account_decoder_client_types::token::UiTokenAmount;
use solana_sdk::pubkey::Pubkey;
use tracing::{info, warn, debug};

use crate::config::{InspectorConfig, DEFAULT_DISPLAY_THRESHOLD, DEFAULT_QUERY_TIMEOUT};
use crate::error::{WalletError, WalletResult};
use crate::models::inspection::InspectionResult;
use crate::models::token::{LedgerAccountRecord, TokenHolding};
use crate::traits::ledger_client::LedgerClient;

/// Queries an account's token holdings and keeps those above the display threshold
pub struct AccountInspector {
    ledger: Arc<dyn LedgerClient>,
    threshold: f64,
    query_timeout: Duration,
}

impl AccountInspector {
    pub fn new(ledger: Arc<dyn LedgerClient>) -> Self {
        Self {
            ledger,
            threshold: DEFAULT_DISPLAY_THRESHOLD,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn from_config(ledger: Arc<dyn LedgerClient>, config: &InspectorConfig) -> Self {
        Self::new(ledger)
            .with_threshold(config.display_threshold)
            .with_timeout(config.query_timeout)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Inspect the token holdings of `account_id`
    pub async fn inspect(&self, account_id: &str) -> WalletResult<InspectionResult> {
        let owner = parse_account_id(account_id)?;

        debug!("Querying token accounts for {}", owner);
        let records = tokio::time::timeout(self.query_timeout, self.ledger.token_accounts_by_owner(&owner))
            .await
            .map_err(|_| {
                warn!("Token account query for {} timed out after {:?}", owner, self.query_timeout);
                WalletError::QueryTimeout(self.query_timeout)
            })?
            .map_err(|cause| {
                warn!("Token account query for {} failed: {:#}", owner, cause);
                WalletError::QueryFailed(cause)
            })?;

        let total_holdings = records.len();
        let mut skipped = 0;
        let mut holdings = Vec::new();

        for record in &records {
            match extract_holding(record) {
                Ok(holding) => {
                    if holding.is_above(self.threshold) {
                        holdings.push(holding);
                    }
                }
                Err(e) => {
                    warn!("{}", e);
                    skipped += 1;
                }
            }
        }

        info!(
            "Account {}: {} of {} holdings above {} ({} skipped)",
            owner,
            holdings.len(),
            total_holdings,
            self.threshold,
            skipped
        );

        Ok(InspectionResult {
            account: owner.to_string(),
            threshold: self.threshold,
            holdings,
            total_holdings,
            skipped,
        })
    }
}

/// Validate a base58 account id (32-byte public key)
pub fn parse_account_id(account_id: &str) -> WalletResult<Pubkey> {
    Pubkey::from_str(account_id).map_err(|e| {
        debug!("Rejected account id {:?}: {}", account_id, e);
        WalletError::InvalidAddress(account_id.to_string())
    })
}

/// Pull `info.tokenAmount.uiAmount` (and the mint) out of a parsed record
fn extract_holding(record: &LedgerAccountRecord) -> WalletResult<TokenHolding> {
    let malformed = |reason: &str| WalletError::MalformedHolding {
        address: record.address.clone(),
        reason: reason.to_string(),
    };

    let info = record
        .parsed
        .get("info")
        .ok_or_else(|| malformed("missing parsed info"))?;

    let token_amount = info
        .get("tokenAmount")
        .cloned()
        .ok_or_else(|| malformed("missing tokenAmount"))?;

    let token_amount: UiTokenAmount = serde_json::from_value(token_amount)
        .map_err(|e| malformed(&format!("unreadable tokenAmount: {}", e)))?;

    let balance = token_amount
        .ui_amount
        .ok_or_else(|| malformed("missing uiAmount"))?;

    if !balance.is_finite() {
        return Err(malformed("non-finite uiAmount"));
    }

    let mint = info
        .get("mint")
        .and_then(|mint| mint.as_str())
        .map(str::to_string);

    Ok(TokenHolding::new(record.address.clone(), mint, balance))
}
