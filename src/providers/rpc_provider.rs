use std::sync::Arc;
use std::time::Duration;
use anyhow::Context;
use async_trait::async_trait;
use solana_account_decoder::UiAccountData;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_request::TokenAccountsFilter;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use tracing::{info, debug};

use crate::config::InspectorConfig;
use crate::traits::ledger_client::LedgerClient;
use crate::models::token::LedgerAccountRecord;

/// JSON-RPC backed ledger client
pub struct RpcLedgerClient {
    rpc_client: Arc<RpcClient>,
    token_programs: Vec<Pubkey>,
}

impl RpcLedgerClient {
    /// Create a new RPC ledger client without touching the network
    pub fn new(rpc_url: String, commitment: CommitmentConfig, include_token_2022: bool) -> Self {
        Self::with_rpc_client(RpcClient::new_with_commitment(rpc_url, commitment), include_token_2022)
    }

    fn with_rpc_client(client: RpcClient, include_token_2022: bool) -> Self {
        let mut token_programs = vec![spl_token::id()];
        if include_token_2022 {
            token_programs.push(spl_token_2022::id());
        }

        Self {
            rpc_client: Arc::new(client),
            token_programs,
        }
    }

    /// Build the client and check once that the endpoint answers
    pub async fn initialize(config: &InspectorConfig) -> anyhow::Result<Self> {
        let client = Self::new(
            config.rpc_url.clone(),
            config.commitment,
            config.include_token_2022,
        );

        let version = client.node_version(config.query_timeout).await?;
        info!("Connected to {} (solana-core {})", config.rpc_url, version);
        Ok(client)
    }

    /// Ask the endpoint for its solana-core version
    async fn node_version(&self, query_timeout: Duration) -> anyhow::Result<String> {
        let url = self.rpc_client.url();
        let version = tokio::time::timeout(query_timeout, self.rpc_client.get_version())
            .await
            .with_context(|| format!("RPC endpoint {} did not answer within {:?}", url, query_timeout))?
            .with_context(|| format!("RPC endpoint {} is unreachable", url))?;
        Ok(version.solana_core)
    }

    /// Token programs queried, in query order
    pub fn token_programs(&self) -> &[Pubkey] {
        &self.token_programs
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn token_accounts_by_owner(&self, owner: &Pubkey) -> anyhow::Result<Vec<LedgerAccountRecord>> {
        let mut records = Vec::new();

        for program_id in &self.token_programs {
            let accounts = self
                .rpc_client
                .get_token_accounts_by_owner(owner, TokenAccountsFilter::ProgramId(*program_id))
                .await
                .with_context(|| format!("getTokenAccountsByOwner failed for program {}", program_id))?;

            debug!("Program {} returned {} token accounts", program_id, accounts.len());

            for keyed_account in accounts {
                let parsed = match keyed_account.account.data {
                    UiAccountData::Json(parsed_account) => parsed_account.parsed,
                    _ => serde_json::Value::Null,
                };
                records.push(LedgerAccountRecord::new(keyed_account.pubkey, parsed));
            }
        }

        info!("Found {} token accounts for {}", records.len(), owner);
        Ok(records)
    }

    async fn balance(&self, wallet: &Pubkey) -> anyhow::Result<u64> {
        let lamports = self.rpc_client.get_balance(wallet).await?;
        Ok(lamports)
    }
}
