use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::connector::WalletConnector;
use crate::error::{WalletError, WalletResult};
use crate::inspector::AccountInspector;
use crate::models::inspection::InspectionResult;
use crate::traits::event_handler::InspectionEventHandler;

use super::display::DisplayState;

/// Identifies one inspection request. Only the latest one may update the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Whether a completed inspection reached the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Discarded,
}

/// Maps user actions onto the connector and inspector and keeps the display in sync
pub struct WalletApp {
    connector: Arc<WalletConnector>,
    inspector: Arc<AccountInspector>,
    event_handler: Arc<dyn InspectionEventHandler>,
    display: RwLock<DisplayState>,
    latest_request: AtomicU64,
}

impl WalletApp {
    pub fn new(
        connector: Arc<WalletConnector>,
        inspector: Arc<AccountInspector>,
        event_handler: Arc<dyn InspectionEventHandler>,
    ) -> Self {
        Self {
            connector,
            inspector,
            event_handler,
            display: RwLock::new(DisplayState::default()),
            latest_request: AtomicU64::new(0),
        }
    }

    pub fn connector(&self) -> &WalletConnector {
        &self.connector
    }

    /// Snapshot of what is on screen
    pub async fn display(&self) -> DisplayState {
        self.display.read().await.clone()
    }

    /// Connect button: connect, then inspect the new account
    pub async fn on_connect(&self, provider_name: &str) -> WalletResult<Applied> {
        match self.connector.connect(provider_name).await {
            Ok(_) => {}
            Err(WalletError::ConnectCancelled) => {
                debug!("Connect to {} was overtaken by a disconnect", provider_name);
                return Ok(Applied::Discarded);
            }
            Err(e) => {
                self.display.write().await.show_error(&e);
                self.event_handler.handle_error(&e).await;
                return Err(e);
            }
        }

        {
            let mut display = self.display.write().await;
            let session = self.connector.session().await;
            if !session.is_connected() {
                debug!("Disconnected before the connection could be shown");
                return Ok(Applied::Discarded);
            }
            display.show_connected(&session);
        }

        self.on_refresh().await
    }

    /// Re-run the inspection for the connected account
    pub async fn on_refresh(&self) -> WalletResult<Applied> {
        // Token issue and disconnect are ordered by the display lock
        let (token, account) = {
            let _display = self.display.write().await;
            let session = self.connector.session().await;
            let Some(account) = session.account() else {
                debug!("Refresh ignored: no wallet connected");
                return Ok(Applied::Discarded);
            };
            (self.begin_inspection(), account.to_string())
        };

        let outcome = self.inspector.inspect(&account).await;
        self.complete_inspection(token, outcome).await
    }

    /// Disconnect button. Pending inspections become stale.
    pub async fn on_disconnect(&self) {
        let mut display = self.display.write().await;
        self.latest_request.fetch_add(1, Ordering::AcqRel);
        self.connector.disconnect().await;

        display.set_session(&self.connector.session().await);
        display.clear_holdings();
        display.show_status("Wallet disconnected.");
    }

    /// Start an inspection; any earlier one still in flight becomes stale
    pub fn begin_inspection(&self) -> RequestToken {
        RequestToken(self.latest_request.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Apply an inspection outcome if its request is still the latest
    pub async fn complete_inspection(
        &self,
        token: RequestToken,
        outcome: WalletResult<InspectionResult>,
    ) -> WalletResult<Applied> {
        {
            let mut display = self.display.write().await;
            if token.0 != self.latest_request.load(Ordering::Acquire) {
                match &outcome {
                    Ok(result) => debug!("Discarding stale inspection of {}", result.account),
                    Err(e) => debug!("Discarding stale inspection error: {}", e),
                }
                return Ok(Applied::Discarded);
            }

            match &outcome {
                Ok(result) => display.show_inspection(result),
                Err(e) => display.show_error(e),
            }
        }

        match outcome {
            Ok(result) => {
                info!("Displaying {} holdings for {}", result.len(), result.account);
                self.event_handler.handle_inspection(&result).await;
                Ok(Applied::Applied)
            }
            Err(e) => {
                self.event_handler.handle_error(&e).await;
                Err(e)
            }
        }
    }
}
