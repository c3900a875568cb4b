use std::sync::Arc;
use async_trait::async_trait;

use crate::error::WalletError;
use crate::models::inspection::InspectionResult;
use crate::traits::event_handler::InspectionEventHandler;

/// Composite event handler that can combine multiple handlers
pub struct CompositeEventHandler {
    handlers: Vec<Arc<dyn InspectionEventHandler>>,
}

impl CompositeEventHandler {
    /// Create a new composite event handler
    pub fn new() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Add a handler to the composite
    pub fn add_handler(&mut self, handler: Arc<dyn InspectionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InspectionEventHandler for CompositeEventHandler {
    async fn handle_inspection(&self, result: &InspectionResult) {
        for handler in &self.handlers {
            handler.handle_inspection(result).await;
        }
    }

    async fn handle_error(&self, error: &WalletError) {
        for handler in &self.handlers {
            handler.handle_error(error).await;
        }
    }
}
