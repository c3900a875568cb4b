//! Wallet connection and session ownership

pub mod wallet_connector;

pub use wallet_connector::WalletConnector;
