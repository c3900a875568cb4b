//! Wallet Inspector Library
//!
//! Connects a Solana wallet provider, reads the account's token holdings
//! through JSON-RPC and keeps the ones above a display threshold.

// Public modules - these are the API surface
pub mod config;
pub mod error;
pub mod models;
pub mod traits;
pub mod providers;
pub mod connector;
pub mod inspector;
pub mod handlers;
pub mod ui;
pub mod server;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export commonly used items for easier access
pub use config::InspectorConfig;
pub use error::{WalletError, WalletResult};
pub use models::{
    token::{TokenHolding, LedgerAccountRecord},
    session::Session,
    inspection::InspectionResult,
    provider::{ProviderInfo, PublicKeyRepr, ConnectResponse},
};
pub use traits::{
    ledger_client::LedgerClient,
    wallet_provider::{WalletProvider, ProviderError},
    event_handler::InspectionEventHandler,
};
pub use providers::{
    rpc_provider::RpcLedgerClient,
    injected::InjectedProvider,
    keypair::KeypairProvider,
};
pub use handlers::{
    console::ConsoleEventHandler,
    composite::CompositeEventHandler,
    json::JsonEventHandler,
};
pub use connector::WalletConnector;
pub use inspector::AccountInspector;
pub use ui::{WalletApp, DisplayState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library plumbing
pub type Result<T> = std::result::Result<T, anyhow::Error>;
