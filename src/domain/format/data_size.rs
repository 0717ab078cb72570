//! Byte counts in traditional (base-1024) units

/// Decimal places used when none are configured
pub const DEFAULT_PRECISION: u32 = 2;

/// Unit suffixes for powers of 1024, starting at 1024^1
const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count with base-1024 units.
///
/// Counts below 1024 print as a plain integer followed by `bytes`. Larger
/// counts print with `min(precision, 3 * power)` decimals, so kilobytes
/// show at most three.
///
/// ```
/// use clipbridge::domain::format::formatted_bytes;
///
/// assert_eq!(formatted_bytes(1536, 2), "1.50 KB");
/// assert_eq!(formatted_bytes(512, 2), "512 bytes");
/// ```
pub fn formatted_bytes(bytes: i64, precision: u32) -> String {
    let magnitude = bytes.unsigned_abs();
    let power = if magnitude == 0 {
        0
    } else {
        ((63 - magnitude.leading_zeros()) / 10).min(UNITS.len() as u32)
    };

    if power == 0 {
        return format!("{} bytes", bytes);
    }

    let value = bytes as f64 / 1024f64.powi(power as i32);
    let decimals = precision.min(3 * power) as usize;
    format!("{:.*} {}", decimals, value, UNITS[power as usize - 1])
}
