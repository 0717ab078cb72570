//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard bridge, the image provider and the utility
//! object, plus trait definitions for external system interactions.

pub mod clipboard_bridge;
pub mod image_provider;
pub mod ports;
pub mod utils;

// Re-export use cases
pub use clipboard_bridge::{encode_png, ClipboardBridge, ObserverId};
pub use image_provider::{parse_image_url, ClipboardImageProvider, PROVIDER_ID};
pub use utils::Utils;
