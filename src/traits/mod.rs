//! Core traits for the wallet inspector

pub mod ledger_client;
pub mod wallet_provider;
pub mod event_handler;

// Re-export for convenience
pub use ledger_client::LedgerClient;
pub use wallet_provider::{WalletProvider, ProviderError};
pub use event_handler::InspectionEventHandler;
