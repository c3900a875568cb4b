use async_trait::async_trait;
use solana_sdk::pubkey::Pubkey;
use crate::models::token::LedgerAccountRecord;

/// Remote ledger service queried by the inspector and the balance endpoint
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch all parsed token accounts owned by a wallet, in service order
    async fn token_accounts_by_owner(&self, owner: &Pubkey) -> anyhow::Result<Vec<LedgerAccountRecord>>;

    /// Fetch native balance of a wallet in lamports
    async fn balance(&self, wallet: &Pubkey) -> anyhow::Result<u64>;
}
