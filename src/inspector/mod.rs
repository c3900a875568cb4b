//! Token holding inspection

pub mod account_inspector;

pub use account_inspector::{AccountInspector, parse_account_id};
