//! sRGB color value object

use std::fmt;

/// sRGB color with straight alpha, every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Create a color, clamping every channel into range
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// `#rrggbb` when opaque, `#rrggbbaa` otherwise
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_u8();
        if a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        }
    }

    /// Channels scaled to bytes
    pub fn to_u8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a].map(|c| (c * 255.0).round() as u8)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_channels() {
        let color = Rgba::new(1.5, -0.2, 0.5, f64::NAN);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.b, 0.5);
        assert_eq!(color.a, 0.0);
    }

    #[test]
    fn opaque_hex_omits_alpha() {
        assert_eq!(Rgba::new(1.0, 0.0, 0.0, 1.0).to_hex(), "#ff0000");
    }

    #[test]
    fn translucent_hex_includes_alpha() {
        assert_eq!(Rgba::new(0.0, 0.0, 1.0, 0.5).to_hex(), "#0000ff80");
    }
}
