use async_trait::async_trait;
use crate::error::WalletError;
use crate::models::inspection::InspectionResult;

/// Handler for inspection outcomes
#[async_trait]
pub trait InspectionEventHandler: Send + Sync {
    /// Handle a completed inspection
    async fn handle_inspection(&self, result: &InspectionResult);

    /// Handle a failed connect or inspect
    async fn handle_error(&self, error: &WalletError);
}
