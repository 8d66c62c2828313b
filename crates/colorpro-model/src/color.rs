#![forbid(unsafe_code)]

//! Color value types and HEX decoding.
//!
//! The wire format for a color everywhere in colorpro is the 6-digit HEX
//! string `#RRGGBB`. [`Rgb`] and [`Hsl`] are decoded fresh from it on every
//! call; neither carries identity or caches anything.

use std::fmt;

use thiserror::Error;

/// The input string is not `#` followed by exactly 6 hex digits.
///
/// Raised at the boundary of every decoding operation; no partial
/// computation happens on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color format: expected \"#RRGGBB\", got {input:?}")]
pub struct InvalidColorFormat {
    /// The offending input, verbatim.
    pub input: String,
}

impl InvalidColorFormat {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

/// A decoded sRGB triple.
///
/// `Display` renders the canonical `rgb(r, g, b)` readout string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a triple from raw channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a `#RRGGBB` string (hex digits are case-insensitive).
    pub fn from_hex(hex: &str) -> Result<Self, InvalidColorFormat> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| InvalidColorFormat::new(hex))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(InvalidColorFormat::new(hex));
        }
        let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| InvalidColorFormat::new(hex))?;
        let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| InvalidColorFormat::new(hex))?;
        let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| InvalidColorFormat::new(hex))?;
        Ok(Self { r, g, b })
    }

    /// Re-encode as a lowercase `#rrggbb` string.
    ///
    /// Round-trips with [`Rgb::from_hex`] for every well-formed input.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channel values as fractions in `[0, 1]`, ordered `[r, g, b]`.
    #[inline]
    #[must_use]
    pub fn channels(&self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A color in HSL coordinates, rounded to integer display precision.
///
/// Hue is degrees in `[0, 360)`; saturation and lightness are percents in
/// `[0, 100]`. `Display` renders the canonical `hsl(h, s%, l%)` readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: u16,
    /// Saturation in percent, `[0, 100]`.
    pub s: u8,
    /// Lightness in percent, `[0, 100]`.
    pub l: u8,
}

impl Hsl {
    /// Decode a `#RRGGBB` string straight to HSL.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidColorFormat> {
        Ok(Self::from_rgb(Rgb::from_hex(hex)?))
    }

    /// Convert a decoded triple with the standard RGB→HSL transform.
    ///
    /// Equal channels short-circuit to the achromatic case (hue 0,
    /// saturation 0). Hue rounding can land exactly on 360 for near-red
    /// inputs; it wraps to 0 to keep the `[0, 360)` guarantee.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if max == min {
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };
            let hue = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            (hue / 6.0, saturation)
        };

        Self {
            h: (hue * 360.0).round() as u16 % 360,
            s: (saturation * 100.0).round() as u8,
            l: (lightness * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}
