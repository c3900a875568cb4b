use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by the wallet connector and the account inspector
#[derive(Debug, Error)]
pub enum WalletError {
    /// The named provider is unknown or not injected into the environment
    #[error("{0} wallet not found")]
    ProviderUnavailable(String),

    #[error("Connection request was rejected by the user")]
    UserRejected,

    #[error("A wallet is already connected")]
    AlreadyConnected,

    #[error("A connection request is already in progress")]
    ConnectionInProgress,

    /// A disconnect arrived while the connect attempt was pending
    #[error("Connection request was cancelled by a disconnect")]
    ConnectCancelled,

    /// The provider call itself errored
    #[error("Wallet connection failed: {0:#}")]
    ConnectFailed(#[source] anyhow::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Ledger query failed: {0:#}")]
    QueryFailed(#[source] anyhow::Error),

    #[error("Ledger query timed out after {0:?}")]
    QueryTimeout(Duration),

    /// Per-entry parse failure. Logged and skipped, never returned from `inspect`.
    #[error("Malformed holding {address}: {reason}")]
    MalformedHolding { address: String, reason: String },
}

impl WalletError {
    /// True for failures of the connect step, as opposed to inspection
    pub fn is_connect_error(&self) -> bool {
        matches!(
            self,
            WalletError::ProviderUnavailable(_)
                | WalletError::UserRejected
                | WalletError::AlreadyConnected
                | WalletError::ConnectionInProgress
                | WalletError::ConnectCancelled
                | WalletError::ConnectFailed(_)
        )
    }
}

/// Result alias for connector and inspector operations
pub type WalletResult<T> = std::result::Result<T, WalletError>;
