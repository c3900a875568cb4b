//! Projection of session and inspection state onto the page

pub mod app;
pub mod display;

pub use app::{WalletApp, RequestToken, Applied};
pub use display::{DisplayState, status_for_error};
