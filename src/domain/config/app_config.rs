//! Application configuration value object

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::format::DEFAULT_PRECISION;

/// Default clipboard polling interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Default log level when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Accepted values for `log_level`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinuxConfig {
    /// Use the X11 PRIMARY selection as the selection buffer
    pub selection: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub poll_interval_ms: Option<u64>,
    pub byte_precision: Option<u32>,
    pub log_level: Option<String>,
    pub linux: Option<LinuxConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            poll_interval_ms: Some(DEFAULT_POLL_INTERVAL_MS),
            byte_precision: Some(DEFAULT_PRECISION),
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
            linux: Some(LinuxConfig {
                selection: Some(true),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            poll_interval_ms: other.poll_interval_ms.or(self.poll_interval_ms),
            byte_precision: other.byte_precision.or(self.byte_precision),
            log_level: other.log_level.or(self.log_level),
            linux: match (self.linux, other.linux) {
                (None, None) => None,
                (Some(b), None) => Some(b),
                (None, Some(o)) => Some(o),
                (Some(b), Some(o)) => Some(LinuxConfig {
                    selection: o.selection.or(b.selection),
                }),
            },
        }
    }

    /// Polling interval, or the default if not set or zero
    pub fn poll_interval_or_default(&self) -> Duration {
        let ms = self
            .poll_interval_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Byte formatting precision, or 2 if not set
    pub fn byte_precision_or_default(&self) -> u32 {
        self.byte_precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Log level, or "warn" if not set or unrecognized
    pub fn log_level_or_default(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|level| LOG_LEVELS.contains(level))
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Whether the selection buffer may be used, true if not set
    pub fn selection_or_default(&self) -> bool {
        self.linux
            .as_ref()
            .and_then(|l| l.selection)
            .unwrap_or(true)
    }
}
