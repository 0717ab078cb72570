//! Human-readable formatting

mod data_size;

pub use data_size::{formatted_bytes, DEFAULT_PRECISION};
