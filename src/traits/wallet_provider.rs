use async_trait::async_trait;
use thiserror::Error;

use crate::models::provider::ConnectResponse;

/// Why a provider failed to connect
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("user rejected the request")]
    Rejected,

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// A named wallet capability source
#[async_trait]
pub trait WalletProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Whether the provider is injected into the current environment
    fn is_present(&self) -> bool;

    /// Request a connection and return the account's public key
    async fn connect(&self) -> Result<ConnectResponse, ProviderError>;
}
