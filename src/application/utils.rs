//! Utility functions exposed to the UI layer

use std::time::Duration;

use uuid::Uuid;

use crate::domain::color::{hsluv_to_rgb, Rgba};
use crate::domain::format::formatted_bytes;

use super::ports::{IdleError, IdleMonitor};

/// Byte formatting, UUIDs, HSLuv colors and idle time
pub struct Utils<I: IdleMonitor> {
    idle: I,
    precision: u32,
}

impl<I: IdleMonitor> Utils<I> {
    /// Create with the default precision used by [`Utils::bytes`]
    pub fn new(idle: I, precision: u32) -> Self {
        Self { idle, precision }
    }

    /// Format a byte count with an explicit precision
    pub fn formatted_bytes(&self, bytes: i64, precision: u32) -> String {
        formatted_bytes(bytes, precision)
    }

    /// Format a byte count with the configured precision
    pub fn bytes(&self, bytes: i64) -> String {
        formatted_bytes(bytes, self.precision)
    }

    /// Random v4 UUID, hyphenated lowercase
    pub fn uuid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// HSLuv color (hue in degrees, saturation and lightness in percent)
    pub fn hsluv(&self, hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Rgba {
        hsluv_to_rgb(hue, saturation, lightness, alpha)
    }

    /// Time since the last user input
    pub async fn idle_time(&self) -> Result<Duration, IdleError> {
        self.idle.idle_time().await
    }
}
