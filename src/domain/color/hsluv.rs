//! HSLuv to sRGB conversion
//!
//! HSLuv is a human-friendly alternative to HSL built on CIELUV: equal
//! lightness values look equally bright whatever the hue.

use super::Rgba;

/// Convert HSLuv to sRGB.
///
/// Hue is in degrees and wraps modulo 360. Saturation and lightness are
/// percentages clamped to `0..=100`; alpha is clamped to `0..=1`.
pub fn hsluv_to_rgb(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Rgba {
    let h = hue.rem_euclid(360.0);
    let s = saturation.clamp(0.0, 100.0);
    let l = lightness.clamp(0.0, 100.0);

    let (r, g, b) = hsluv::hsluv_to_rgb(h, s, l);
    Rgba::new(r, g, b, alpha)
}
