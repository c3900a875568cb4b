//! Small formatting helpers

pub mod helper;

pub use helper::{format_balance, short_address};
