use chrono::{DateTime, Utc};

use crate::error::WalletError;
use crate::models::inspection::InspectionResult;
use crate::models::session::Session;
use crate::models::token::TokenHolding;
use crate::utils::{format_balance, short_address};

/// Renderable page state: what the user sees, nothing more
#[derive(Debug, Clone)]
pub struct DisplayState {
    /// Most recent status message
    pub status: Option<String>,
    pub connect_visible: bool,
    pub disconnect_visible: bool,
    pub holdings: Vec<TokenHolding>,
    /// Shown instead of the list when nothing is above threshold
    pub empty_notice: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            status: None,
            connect_visible: true,
            disconnect_visible: false,
            holdings: Vec::new(),
            empty_notice: None,
            updated_at: Utc::now(),
        }
    }
}

impl DisplayState {
    pub fn set_session(&mut self, session: &Session) {
        self.connect_visible = !session.is_connected();
        self.disconnect_visible = session.is_connected();
        self.touch();
    }

    pub fn show_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
        self.touch();
    }

    pub fn show_connected(&mut self, session: &Session) {
        self.set_session(session);
        let account = session.account().map(short_address).unwrap_or_default();
        self.show_status(format!("Yay you logged in! Connected {}", account));
    }

    pub fn show_inspection(&mut self, result: &InspectionResult) {
        self.holdings = result.holdings.clone();
        self.empty_notice = if result.query_was_empty() {
            Some("No token holdings found.".to_string())
        } else if result.is_empty() {
            Some(format!("No holdings above {}.", format_balance(result.threshold)))
        } else {
            None
        };
        self.touch();
    }

    /// Report a failure; holdings already on display are kept
    pub fn show_error(&mut self, error: &WalletError) {
        self.show_status(status_for_error(error));
    }

    pub fn clear_holdings(&mut self) {
        self.holdings.clear();
        self.empty_notice = None;
        self.touch();
    }

    /// Plain-text rendering for terminals
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        if let Some(status) = &self.status {
            lines.push(status.clone());
        }

        for holding in &self.holdings {
            lines.push(format!(
                "  {}  {}",
                holding.address,
                format_balance(holding.balance)
            ));
        }

        if let Some(notice) = &self.empty_notice {
            lines.push(notice.clone());
        }

        let control = if self.disconnect_visible { "[Disconnect]" } else { "[Connect Wallet]" };
        lines.push(control.to_string());

        lines.join("\n")
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// User-facing message for a failed connect or inspection
pub fn status_for_error(error: &WalletError) -> String {
    match error {
        WalletError::ProviderUnavailable(name) => {
            format!("{} wallet not found. Please install it.", name)
        }
        WalletError::UserRejected | WalletError::ConnectFailed(_) => {
            "Failed to connect wallet.".to_string()
        }
        WalletError::QueryFailed(_) | WalletError::QueryTimeout(_) => {
            format!("Failed to fetch token balances: {}", error)
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(holdings: Vec<TokenHolding>, total: usize) -> InspectionResult {
        InspectionResult {
            account: "A".to_string(),
            threshold: 100_000.0,
            holdings,
            total_holdings: total,
            skipped: 0,
        }
    }

    #[test]
    fn visibility_follows_session() {
        let mut display = DisplayState::default();
        assert!(display.connect_visible && !display.disconnect_visible);

        display.set_session(&Session::connected("Phantom", "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1"));
        assert!(!display.connect_visible && display.disconnect_visible);

        display.set_session(&Session::disconnected());
        assert!(display.connect_visible && !display.disconnect_visible);
    }

    #[test]
    fn only_latest_status_is_kept() {
        let mut display = DisplayState::default();
        display.show_status("first");
        display.show_error(&WalletError::ProviderUnavailable("Phantom".to_string()));
        assert_eq!(display.status.as_deref(), Some("Phantom wallet not found. Please install it."));
    }

    #[test]
    fn empty_notices_distinguish_cases() {
        let mut display = DisplayState::default();

        display.show_inspection(&result(vec![], 2));
        assert_eq!(display.empty_notice.as_deref(), Some("No holdings above 100,000.00."));

        display.show_inspection(&result(vec![], 0));
        assert_eq!(display.empty_notice.as_deref(), Some("No token holdings found."));

        display.show_inspection(&result(vec![TokenHolding::new("B", None, 250_000.0)], 2));
        assert!(display.empty_notice.is_none());
        assert!(display.render().contains("B  250,000.00"));
    }

    #[test]
    fn errors_keep_displayed_holdings() {
        let mut display = DisplayState::default();
        display.show_inspection(&result(vec![TokenHolding::new("B", None, 250_000.0)], 1));
        display.show_error(&WalletError::QueryTimeout(std::time::Duration::from_secs(15)));
        assert_eq!(display.holdings.len(), 1);
        assert!(display.status.as_deref().unwrap().starts_with("Failed to fetch token balances"));
    }

    #[test]
    fn rejection_message() {
        assert_eq!(status_for_error(&WalletError::UserRejected), "Failed to connect wallet.");
    }
}
