pub mod trigger;

// Re-exports for convenience
pub use trigger::{DataValueKind, TriggerConfig, TriggerDefinition, TriggerKind, TriggerSource};
