//! Numeric and unit conversions: byte sizes, durations, angles,
//! temperatures, and 24-bit colors.
//!
//! ## Examples
//!
//! ```rust
//! use utilkit::{bytes_to_human_readable, hex_to_rgb, rgb_to_hex, Rgb};
//!
//! assert_eq!(bytes_to_human_readable(1024), "1.00 KB");
//! assert_eq!(hex_to_rgb("#ffffff").unwrap(), Rgb { r: 255, g: 255, b: 255 });
//! assert_eq!(rgb_to_hex(255, 128, 0), "#ff8000");
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with base-1024 units and two decimals.
///
/// Sizes past a terabyte stay in `TB`.
///
/// # Examples
///
/// ```rust
/// use utilkit::bytes_to_human_readable;
///
/// assert_eq!(bytes_to_human_readable(0), "0 B");
/// assert_eq!(bytes_to_human_readable(512), "512.00 B");
/// assert_eq!(bytes_to_human_readable(1_337_420), "1.28 MB");
/// ```
#[must_use]
pub fn bytes_to_human_readable(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut exponent = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && exponent < BYTE_UNITS.len() - 1 {
        scaled /= 1024;
        exponent += 1;
    }

    let size = bytes as f64 / 1024f64.powi(exponent as i32);
    format!("{:.2} {}", size, BYTE_UNITS[exponent])
}

/// Parses a size such as `1.27 MB` back into bytes, rounding to the nearest
/// byte.
///
/// The unit is case-insensitive and defaults to bytes when omitted.
///
/// # Errors
///
/// Returns [`Error::InvalidByteSize`] for an empty string, a non-numeric or
/// negative amount, an unknown unit, or trailing text.
///
/// # Examples
///
/// ```rust
/// use utilkit::human_readable_to_bytes;
///
/// assert_eq!(human_readable_to_bytes("1.27 MB").unwrap(), 1_331_692);
/// assert_eq!(human_readable_to_bytes("2 kb").unwrap(), 2048);
/// assert_eq!(human_readable_to_bytes("42").unwrap(), 42);
/// assert!(human_readable_to_bytes("12 parsecs").is_err());
/// ```
pub fn human_readable_to_bytes(s: &str) -> Result<u64> {
    let mut parts = s.split_whitespace();
    let amount = parts
        .next()
        .ok_or_else(|| Error::invalid_byte_size(s, "empty input"))?;
    let unit = parts.next().unwrap_or("B");
    if parts.next().is_some() {
        return Err(Error::invalid_byte_size(s, "unexpected trailing text"));
    }

    let amount: f64 = amount
        .parse()
        .map_err(|_| Error::invalid_byte_size(s, "amount is not a number"))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::invalid_byte_size(s, "amount must be a finite, non-negative number"));
    }

    let upper = unit.to_ascii_uppercase();
    let exponent = BYTE_UNITS
        .iter()
        .position(|u| *u == upper)
        .ok_or_else(|| Error::invalid_byte_size(s, &format!("unknown unit {unit:?}")))?;

    let bytes = (amount * 1024f64.powi(exponent as i32)).round();
    if bytes >= u64::MAX as f64 {
        return Err(Error::invalid_byte_size(s, "size does not fit in 64 bits"));
    }
    Ok(bytes as u64)
}

/// Formats milliseconds as minutes and seconds, e.g. `1m 30s`.
///
/// Minutes are left out when zero; leftover milliseconds are dropped.
///
/// ```rust
/// assert_eq!(utilkit::ms_to_time(90_061), "1m 30s");
/// assert_eq!(utilkit::ms_to_time(4_999), "4s");
/// ```
#[must_use]
pub fn ms_to_time(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

#[must_use]
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0) / 5.0 + 32.0
}

#[must_use]
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    ((f - 32.0) * 5.0) / 9.0
}

/// A 24-bit RGB color.
///
/// `Display` writes the lowercase `#rrggbb` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Packs the channels into `0xRRGGBB`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Unpacks the low 24 bits of `value`.
    #[must_use]
    pub const fn from_u32(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_to_rgb(s)
    }
}

/// Parses `#rrggbb`, `rrggbb`, or the `#rgb` shorthand.
///
/// # Errors
///
/// Returns [`Error::InvalidHexColor`] for any other length or a non-hex digit.
///
/// # Examples
///
/// ```rust
/// use utilkit::{hex_to_rgb, Rgb};
///
/// assert_eq!(hex_to_rgb("#1e90ff").unwrap(), Rgb::new(30, 144, 255));
/// assert_eq!(hex_to_rgb("f0a").unwrap(), Rgb::new(255, 0, 170));
/// assert!(hex_to_rgb("#12345").is_err());
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_hex_color(hex));
    }

    let expanded = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(Error::invalid_hex_color(hex)),
    };

    let value = u32::from_str_radix(&expanded, 16).map_err(|_| Error::invalid_hex_color(hex))?;
    Ok(Rgb::from_u32(value))
}

/// Formats three channels as lowercase `#rrggbb`.
#[must_use]
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    Rgb::new(r, g, b).to_hex()
}
