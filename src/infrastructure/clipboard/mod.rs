//! Clipboard infrastructure module
//!
//! Provides the system clipboard host (arboard) and an in-memory host
//! for tests and headless use.

mod arboard;
mod memory;

pub use self::arboard::ArboardClipboardHost;
pub use memory::MemoryClipboardHost;

use crate::application::ports::{ClipboardError, ClipboardHost};

/// Create the system clipboard host for the current platform
///
/// `persist` keeps written content available after the process exits on
/// Linux, at the cost of blocking each write until another client takes it.
pub fn create_clipboard_host(
    enable_selection: bool,
    persist: bool,
) -> Result<Box<dyn ClipboardHost>, ClipboardError> {
    let host = ArboardClipboardHost::new(enable_selection, persist)?;
    tracing::debug!(
        selection = host.supports_selection(),
        persist,
        "opened system clipboard"
    );
    Ok(Box::new(host))
}
