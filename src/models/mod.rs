//! Data models for the wallet inspector

pub mod token;
pub mod session;
pub mod inspection;
pub mod provider;

// Re-export for convenience
pub use token::{TokenHolding, LedgerAccountRecord};
pub use session::Session;
pub use inspection::InspectionResult;
pub use provider::{ProviderInfo, PublicKeyRepr, ConnectResponse};
