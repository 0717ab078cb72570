//! Clipbridge - clipboard bridge and desktop utilities
//!
//! This crate provides the native support layer of a desktop chat client:
//! an observable view over the system clipboard, a clipboard image
//! provider, and small utilities (byte formatting, UUIDs, HSLuv colors,
//! idle time) for a declarative UI layer.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Payloads, buffers, events, color and size conversions, config
//! - **Application**: The clipboard bridge, image provider, utilities and port traits
//! - **Infrastructure**: Adapter implementations (arboard, in-memory host, xprintidle, XDG config, logging)
//! - **CLI**: Command-line interface for driving every operation from a shell

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
