//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod idle;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardHost};
pub use config::ConfigStore;
pub use idle::{IdleError, IdleMonitor};
