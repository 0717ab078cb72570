//! Domain layer - Core value objects
//!
//! Contains clipboard payloads, color and size conversions, configuration
//! and domain errors. This layer has no dependencies on external systems.

pub mod clipboard;
pub mod color;
pub mod config;
pub mod error;
pub mod format;

// Re-export common types
pub use clipboard::{ClipboardBuffer, ClipboardEvent, ImageSize, Payload};
pub use color::{hsluv_to_rgb, Rgba};
pub use config::AppConfig;
pub use error::*;
pub use format::formatted_bytes;
