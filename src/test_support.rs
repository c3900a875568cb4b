//! In-crate mocks shared by unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use solana_sdk::pubkey::Pubkey;
use tokio::sync::Notify;

use crate::models::provider::{ConnectResponse, PublicKeyRepr};
use crate::models::token::LedgerAccountRecord;
use crate::traits::ledger_client::LedgerClient;
use crate::traits::wallet_provider::{ProviderError, WalletProvider};

/// jsonParsed token account with the given `uiAmount`
pub fn token_record(address: &str, ui_amount: f64) -> LedgerAccountRecord {
    LedgerAccountRecord::new(
        address,
        json!({
            "type": "account",
            "info": {
                "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                "owner": "11111111111111111111111111111111",
                "isNative": false,
                "state": "initialized",
                "tokenAmount": {
                    "amount": format!("{}", (ui_amount * 1e6) as u64),
                    "decimals": 6,
                    "uiAmount": ui_amount,
                    "uiAmountString": ui_amount.to_string(),
                }
            }
        }),
    )
}

#[derive(Default)]
pub struct MockLedger {
    pub records: Vec<LedgerAccountRecord>,
    pub lamports: u64,
    pub fail: bool,
    pub delay: Option<Duration>,
    /// When set, queries wait for a notification before answering
    pub gate: Option<Arc<Notify>>,
    pub calls: AtomicUsize,
}

impl MockLedger {
    pub fn with_records(records: Vec<LedgerAccountRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn wait(&self) -> anyhow::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for MockLedger {
    async fn token_accounts_by_owner(&self, _owner: &Pubkey) -> anyhow::Result<Vec<LedgerAccountRecord>> {
        self.wait().await?;
        Ok(self.records.clone())
    }

    async fn balance(&self, _wallet: &Pubkey) -> anyhow::Result<u64> {
        self.wait().await?;
        Ok(self.lamports)
    }
}

pub enum MockOutcome {
    Approve(PublicKeyRepr),
    Reject,
    Fail,
}

pub struct MockProvider {
    pub name: String,
    pub present: bool,
    pub outcome: MockOutcome,
    pub gate: Option<Arc<Notify>>,
}

impl MockProvider {
    pub fn approving(name: &str, key: Pubkey) -> Self {
        Self {
            name: name.to_string(),
            present: true,
            outcome: MockOutcome::Approve(PublicKeyRepr::Address(key)),
            gate: None,
        }
    }

    pub fn absent(name: &str) -> Self {
        Self {
            name: name.to_string(),
            present: false,
            outcome: MockOutcome::Fail,
            gate: None,
        }
    }

    pub fn with_outcome(name: &str, outcome: MockOutcome) -> Self {
        Self {
            name: name.to_string(),
            present: true,
            outcome,
            gate: None,
        }
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_present(&self) -> bool {
        self.present
    }

    async fn connect(&self) -> Result<ConnectResponse, ProviderError> {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.outcome {
            MockOutcome::Approve(key) => Ok(ConnectResponse { public_key: key.clone() }),
            MockOutcome::Reject => Err(ProviderError::Rejected),
            MockOutcome::Fail => Err(ProviderError::Failed(anyhow::anyhow!("extension crashed"))),
        }
    }
}
