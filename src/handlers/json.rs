use std::io::{stdout, Stdout, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::error::WalletError;
use crate::models::inspection::InspectionResult;
use crate::traits::event_handler::InspectionEventHandler;

/// Writes each outcome as a single-line JSON document
pub struct JsonEventHandler<W = Stdout> {
    writer: Mutex<W>,
}

impl JsonEventHandler {
    pub fn new() -> Self {
        Self::with_writer(stdout())
    }
}

impl Default for JsonEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> JsonEventHandler<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn emit(&self, document: serde_json::Value) {
        let Ok(mut writer) = self.writer.lock() else {
            warn!("JSON writer is poisoned, dropping output");
            return;
        };
        if let Err(e) = writeln!(writer, "{}", document).and_then(|_| writer.flush()) {
            warn!("Failed to write JSON output: {}", e);
        }
    }
}

#[async_trait]
impl<W: Write + Send> InspectionEventHandler for JsonEventHandler<W> {
    async fn handle_inspection(&self, result: &InspectionResult) {
        match serde_json::to_value(result) {
            Ok(document) => self.emit(document),
            Err(e) => warn!("Failed to serialize inspection of {}: {}", result.account, e),
        }
    }

    async fn handle_error(&self, error: &WalletError) {
        self.emit(json!({ "error": error.to_string() }));
    }
}
