use std::sync::Arc;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::models::provider::{ConnectResponse, PublicKeyRepr};
use crate::traits::wallet_provider::{ProviderError, WalletProvider};

/// Asks the user whether a provider may reveal its account
pub type Approval = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Approve every request
pub fn auto_approve() -> Approval {
    Arc::new(|_| true)
}

/// Provider whose account key is injected into the environment
/// (e.g. a browser extension exposing its public key)
pub struct InjectedProvider {
    name: String,
    public_key: Option<String>,
    approval: Approval,
}

impl InjectedProvider {
    pub fn new(name: impl Into<String>, public_key: Option<String>, approval: Approval) -> Self {
        Self {
            name: name.into(),
            public_key,
            approval,
        }
    }

    pub fn phantom(public_key: Option<String>, approval: Approval) -> Self {
        Self::new("Phantom", public_key, approval)
    }

    pub fn solflare(public_key: Option<String>, approval: Approval) -> Self {
        Self::new("Solflare", public_key, approval)
    }
}

#[async_trait]
impl WalletProvider for InjectedProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_present(&self) -> bool {
        self.public_key.is_some()
    }

    async fn connect(&self) -> Result<ConnectResponse, ProviderError> {
        let public_key = self
            .public_key
            .clone()
            .ok_or_else(|| anyhow::anyhow!("{} is not injected", self.name))?;

        let approval = self.approval.clone();
        let name = self.name.clone();
        let approved = tokio::task::spawn_blocking(move || approval(&name))
            .await
            .map_err(|e| anyhow::anyhow!("Approval prompt failed: {}", e))?;

        if !approved {
            warn!("{} connection rejected", self.name);
            return Err(ProviderError::Rejected);
        }

        info!("{} approved connection", self.name);
        Ok(ConnectResponse {
            public_key: PublicKeyRepr::Text(public_key),
        })
    }
}
