//! Ledger and wallet providers

pub mod rpc_provider;
pub mod injected;
pub mod keypair;

// Re-export for convenience
pub use rpc_provider::RpcLedgerClient;
pub use injected::{InjectedProvider, Approval, auto_approve};
pub use keypair::KeypairProvider;
