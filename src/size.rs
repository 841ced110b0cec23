// size.rs - Human-readable content size labels for the status bar

const KILOBYTE: u64 = 1024;
const MEGABYTE: u64 = KILOBYTE * KILOBYTE;

/// Round to two decimal places, halves away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a byte count for display.
///
/// Megabytes carry no space before the unit (`1.5MB`) while kilobytes and
/// bytes do (`1 kB`, `12 B`). Trailing zeros are dropped after rounding.
pub fn format_size(bytes: u64) -> String {
    if bytes >= MEGABYTE {
        format!("{}MB", round2(bytes as f64 / MEGABYTE as f64))
    } else if bytes >= KILOBYTE {
        format!("{} kB", round2(bytes as f64 / KILOBYTE as f64))
    } else {
        format!("{} B", bytes)
    }
}
