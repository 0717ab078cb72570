//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, idle detection tools,
//! the config directory and the log output.

pub mod clipboard;
pub mod config;
pub mod idle;
pub mod logging;

// Re-export adapters
pub use clipboard::{create_clipboard_host, ArboardClipboardHost, MemoryClipboardHost};
pub use config::XdgConfigStore;
pub use idle::{create_idle_monitor, UnsupportedIdleMonitor, XprintidleMonitor};
pub use logging::init_logging;
