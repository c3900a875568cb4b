use serde::Serialize;

use super::token::TokenHolding;

/// Holdings of one account above the display threshold, in service order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionResult {
    pub account: String,
    pub threshold: f64,
    pub holdings: Vec<TokenHolding>,
    /// Number of records the ledger returned, before parsing and filtering
    pub total_holdings: usize,
    /// Records skipped as malformed
    pub skipped: usize,
}

impl InspectionResult {
    /// Nothing above threshold
    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// The ledger returned no token accounts at all
    pub fn query_was_empty(&self) -> bool {
        self.total_holdings == 0
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }
}
