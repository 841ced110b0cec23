// color.rs - CSS color normalization and contrast inversion

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("RGB values not given: {0:?}")]
    Format(String),
    #[error("Invalid hex color format received: {0:?}")]
    InvalidColorFormat(String),
}

/// A color in `#RRGGBB` form.
///
/// Values produced by [`normalize`] from `rgb(...)` input and every value
/// produced by [`invert`] hold exactly six lowercase hex digits. A `#`-prefixed
/// string passed through [`normalize`] is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Contrasting color for this one, see [`invert`].
    pub fn invert(&self) -> Result<HexColor, ColorError> {
        invert(&self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn rgb_regex() -> &'static Regex {
    static RGB: OnceLock<Regex> = OnceLock::new();
    RGB.get_or_init(|| {
        Regex::new(r"(?i)rgb\(([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\)")
            .expect("rgb pattern is valid")
    })
}

/// Parse a decimal channel, wrapping on overflow like a 32-bit integer would.
fn parse_channel(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(u32::from(b - b'0'))
    })
}

/// Convert a CSS color string to a `#rrggbb` hex color.
///
/// Input that already starts with `#` is returned as-is without any
/// validation. Anything else must contain an `rgb(r, g, b)` expression.
/// Channels are not range-checked: a value above 255 spills into the
/// neighbouring channel and only the low 24 bits are kept, so
/// `rgb(0, 256, 0)` becomes `#010000`.
pub fn normalize(input: &str) -> Result<HexColor, ColorError> {
    if input.starts_with('#') {
        return Ok(HexColor(input.to_string()));
    }

    let caps = rgb_regex()
        .captures(input)
        .ok_or_else(|| ColorError::Format(input.to_string()))?;

    let red = parse_channel(&caps[1]);
    let green = parse_channel(&caps[2]);
    let blue = parse_channel(&caps[3]);

    let rgb = (red << 16) | (green << 8) | blue;
    Ok(HexColor(format!("#{:06x}", rgb & 0x00ff_ffff)))
}

/// Invert each channel of a hex color (`255 - c`).
///
/// Accepts `#rgb` shorthand or `#rrggbb`, with or without the leading `#`.
pub fn invert(hex: &str) -> Result<HexColor, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || ColorError::InvalidColorFormat(hex.to_string());

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    if expanded.len() != 6 {
        return Err(invalid());
    }

    let mut out = String::with_capacity(7);
    out.push('#');
    for i in (0..6).step_by(2) {
        let channel = u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid())?;
        out.push_str(&format!("{:02x}", 255 - channel));
    }

    Ok(HexColor(out))
}
