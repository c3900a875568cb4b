use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn, debug};

use crate::error::{WalletError, WalletResult};
use crate::models::provider::ProviderInfo;
use crate::models::session::Session;
use crate::traits::wallet_provider::{ProviderError, WalletProvider};

/// Owns the wallet session and the set of known providers
pub struct WalletConnector {
    providers: Vec<Arc<dyn WalletProvider>>,
    session: RwLock<Session>,
    connecting: AtomicBool,
    /// Bumped by every disconnect, under the session lock
    disconnects: AtomicU64,
}

/// Clears the in-flight flag when the connect attempt ends, including on cancellation
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl WalletConnector {
    /// Create a connector over providers, listed in the given order
    pub fn new(providers: Vec<Arc<dyn WalletProvider>>) -> Self {
        Self {
            providers,
            session: RwLock::new(Session::disconnected()),
            connecting: AtomicBool::new(false),
            disconnects: AtomicU64::new(0),
        }
    }

    /// Known providers and whether each is usable right now
    pub fn list_providers(&self) -> Vec<ProviderInfo> {
        self.providers
            .iter()
            .map(|provider| ProviderInfo {
                name: provider.name().to_string(),
                present: provider.is_present(),
            })
            .collect()
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    pub async fn is_connected(&self) -> bool {
        self.session.read().await.is_connected()
    }

    /// True while a connect attempt is waiting on its provider
    pub fn is_connecting(&self) -> bool {
        self.connecting.load(Ordering::Acquire)
    }

    /// Connect through the named provider and return the account id.
    ///
    /// The session is only modified when the whole attempt succeeds. A
    /// disconnect issued while the attempt is pending cancels it.
    pub async fn connect(&self, provider_name: &str) -> WalletResult<String> {
        let epoch = self.disconnects.load(Ordering::Acquire);
        if self
            .connecting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!("Connect to {} refused: another connection is pending", provider_name);
            return Err(WalletError::ConnectionInProgress);
        }
        let _in_flight = InFlight(&self.connecting);

        if self.session.read().await.is_connected() {
            warn!("Connect to {} refused: already connected", provider_name);
            return Err(WalletError::AlreadyConnected);
        }

        let provider = self
            .providers
            .iter()
            .find(|provider| provider.name() == provider_name && provider.is_present())
            .cloned()
            .ok_or_else(|| {
                warn!("Provider {} is not available", provider_name);
                WalletError::ProviderUnavailable(provider_name.to_string())
            })?;

        debug!("Requesting connection from {}", provider_name);
        let response = provider.connect().await.map_err(|e| match e {
            ProviderError::Rejected => {
                warn!("User rejected connection to {}", provider_name);
                WalletError::UserRejected
            }
            ProviderError::Failed(cause) => {
                warn!("Error connecting to {}: {:#}", provider_name, cause);
                WalletError::ConnectFailed(cause)
            }
        })?;

        let account = response.public_key.canonical().map_err(|cause| {
            warn!("{} returned an unusable public key: {:#}", provider_name, cause);
            WalletError::ConnectFailed(cause)
        })?;

        let mut session = self.session.write().await;
        if self.disconnects.load(Ordering::Acquire) != epoch {
            warn!("Connect to {} cancelled by a disconnect", provider_name);
            return Err(WalletError::ConnectCancelled);
        }
        *session = Session::connected(provider_name, account.clone());
        info!("Connected {} account {}", provider_name, account);

        Ok(account)
    }

    /// Drop the session. Calling it while disconnected is a no-op.
    pub async fn disconnect(&self) {
        let mut session = self.session.write().await;
        self.disconnects.fetch_add(1, Ordering::AcqRel);
        if let Some(provider) = session.provider() {
            info!("Disconnected from {}", provider);
        }
        *session = Session::disconnected();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::provider::PublicKeyRepr;
    use crate::test_support::{MockOutcome, MockProvider};
    use solana_sdk::pubkey::Pubkey;
    use tokio::sync::Notify;

    fn connector(providers: Vec<MockProvider>) -> WalletConnector {
        WalletConnector::new(
            providers
                .into_iter()
                .map(|p| Arc::new(p) as Arc<dyn WalletProvider>)
                .collect(),
        )
    }

    #[test]
    fn lists_providers_in_order_with_presence() {
        let connector = connector(vec![
            MockProvider::approving("Alpha", Pubkey::new_unique()),
            MockProvider::absent("Beta"),
        ]);
        assert_eq!(
            connector.list_providers(),
            vec![
                ProviderInfo { name: "Alpha".to_string(), present: true },
                ProviderInfo { name: "Beta".to_string(), present: false },
            ]
        );
    }

    #[tokio::test]
    async fn absent_or_unknown_provider_is_unavailable() {
        let connector = connector(vec![
            MockProvider::approving("Alpha", Pubkey::new_unique()),
            MockProvider::absent("Beta"),
        ]);

        for name in ["Beta", "Gamma"] {
            let err = connector.connect(name).await.unwrap_err();
            assert!(matches!(err, WalletError::ProviderUnavailable(ref n) if n == name));
            assert!(!connector.is_connected().await);
        }
    }

    #[tokio::test]
    async fn connect_and_disconnect_alternate() {
        let key = Pubkey::new_unique();
        let connector = connector(vec![MockProvider::approving("Alpha", key)]);

        for _ in 0..3 {
            let account = connector.connect("Alpha").await.unwrap();
            assert_eq!(account, key.to_string());
            assert_eq!(connector.session().await, Session::connected("Alpha", key.to_string()));

            connector.disconnect().await;
            assert_eq!(connector.session().await, Session::disconnected());
        }
    }

    #[tokio::test]
    async fn second_connect_is_already_connected() {
        let key = Pubkey::new_unique();
        let connector = connector(vec![
            MockProvider::approving("Alpha", key),
            MockProvider::approving("Beta", Pubkey::new_unique()),
        ]);

        connector.connect("Alpha").await.unwrap();
        let before = connector.session().await;

        assert!(matches!(connector.connect("Alpha").await, Err(WalletError::AlreadyConnected)));
        assert!(matches!(connector.connect("Beta").await, Err(WalletError::AlreadyConnected)));
        assert_eq!(connector.session().await, before);
    }

    #[tokio::test]
    async fn disconnect_is_idempotent() {
        let connector = connector(vec![]);
        connector.disconnect().await;
        connector.disconnect().await;
        assert!(!connector.is_connected().await);
    }

    #[tokio::test]
    async fn rejection_and_failure_leave_session_untouched() {
        let connector = connector(vec![
            MockProvider::with_outcome("Rejecter", MockOutcome::Reject),
            MockProvider::with_outcome("Crasher", MockOutcome::Fail),
            MockProvider::with_outcome(
                "Garbler",
                MockOutcome::Approve(PublicKeyRepr::Text("not-base58!!".to_string())),
            ),
        ]);

        assert!(matches!(connector.connect("Rejecter").await, Err(WalletError::UserRejected)));
        assert!(matches!(connector.connect("Crasher").await, Err(WalletError::ConnectFailed(_))));
        assert!(matches!(connector.connect("Garbler").await, Err(WalletError::ConnectFailed(_))));
        assert_eq!(connector.session().await, Session::disconnected());
    }

    #[tokio::test]
    async fn text_key_is_canonicalised() {
        let key = Pubkey::new_unique();
        let connector = connector(vec![MockProvider::with_outcome(
            "Alpha",
            MockOutcome::Approve(PublicKeyRepr::Text(format!("{}\n", key))),
        )]);
        assert_eq!(connector.connect("Alpha").await.unwrap(), key.to_string());
    }

    #[tokio::test]
    async fn concurrent_connect_fails_fast() {
        let gate = Arc::new(Notify::new());
        let mut slow = MockProvider::approving("Alpha", Pubkey::new_unique());
        slow.gate = Some(gate.clone());
        let connector = Arc::new(connector(vec![slow]));

        let pending = {
            let connector = connector.clone();
            tokio::spawn(async move { connector.connect("Alpha").await })
        };
        while !connector.is_connecting() {
            tokio::task::yield_now().await;
        }

        assert!(matches!(connector.connect("Alpha").await, Err(WalletError::ConnectionInProgress)));
        assert!(!connector.is_connected().await);

        gate.notify_one();
        assert!(pending.await.unwrap().is_ok());
        assert!(connector.is_connected().await);
        assert!(!connector.is_connecting());
    }

    #[tokio::test]
    async fn disconnect_cancels_pending_connect() {
        let gate = Arc::new(Notify::new());
        let key = Pubkey::new_unique();
        let mut slow = MockProvider::approving("Alpha", key);
        slow.gate = Some(gate.clone());
        let connector = Arc::new(connector(vec![slow]));

        let pending = {
            let connector = connector.clone();
            tokio::spawn(async move { connector.connect("Alpha").await })
        };
        while !connector.is_connecting() {
            tokio::task::yield_now().await;
        }

        connector.disconnect().await;
        gate.notify_one();

        assert!(matches!(pending.await.unwrap(), Err(WalletError::ConnectCancelled)));
        assert_eq!(connector.session().await, Session::disconnected());
        assert!(!connector.is_connecting());

        // the next attempt is unaffected
        gate.notify_one();
        assert_eq!(connector.connect("Alpha").await.unwrap(), key.to_string());
    }
}
