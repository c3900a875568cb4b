use std::path::PathBuf;
use async_trait::async_trait;
use solana_sdk::signature::read_keypair_file;
use solana_sdk::signer::Signer;
use tracing::debug;

use crate::models::provider::{ConnectResponse, PublicKeyRepr};
use crate::traits::wallet_provider::{ProviderError, WalletProvider};

/// Provider backed by a Solana CLI keypair file
pub struct KeypairProvider {
    path: PathBuf,
}

impl KeypairProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl WalletProvider for KeypairProvider {
    fn name(&self) -> &str {
        "Keypair"
    }

    fn is_present(&self) -> bool {
        self.path.is_file()
    }

    async fn connect(&self) -> Result<ConnectResponse, ProviderError> {
        let path = self.path.clone();
        let keypair = tokio::task::spawn_blocking(move || read_keypair_file(&path).map_err(|e| e.to_string()))
            .await
            .map_err(|e| anyhow::anyhow!("Keypair read task failed: {}", e))?
            .map_err(|e| anyhow::anyhow!("Failed to read keypair {}: {}", self.path.display(), e))?;

        debug!("Loaded keypair from {}", self.path.display());
        Ok(ConnectResponse {
            public_key: PublicKeyRepr::Address(keypair.pubkey()),
        })
    }
}
