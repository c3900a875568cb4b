use serde::Serialize;

/// One token account above the display threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenHolding {
    /// Token account address
    pub address: String,
    pub mint: Option<String>,
    /// Human-readable balance (`tokenAmount.uiAmount`)
    pub balance: f64,
}

impl TokenHolding {
    pub fn new(address: impl Into<String>, mint: Option<String>, balance: f64) -> Self {
        Self {
            address: address.into(),
            mint,
            balance,
        }
    }

    pub fn is_above(&self, threshold: f64) -> bool {
        self.balance > threshold
    }
}

/// Raw account entry as returned by the ledger service
///
/// `parsed` holds the `parsed` object of a jsonParsed token account
/// (`{"type": "account", "info": {...}}`), or `Null` when the service
/// did not return JSON data for the account.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerAccountRecord {
    pub address: String,
    pub parsed: serde_json::Value,
}

impl LedgerAccountRecord {
    pub fn new(address: impl Into<String>, parsed: serde_json::Value) -> Self {
        Self {
            address: address.into(),
            parsed,
        }
    }
}
