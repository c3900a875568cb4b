//! Event handlers for inspection outcomes

pub mod console;
pub mod composite;
pub mod json;

// Re-export for convenience
pub use console::ConsoleEventHandler;
pub use composite::CompositeEventHandler;
pub use json::JsonEventHandler;
