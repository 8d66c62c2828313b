#![forbid(unsafe_code)]

//! Contrast utilities (WCAG AA).
//!
//! The demo page evaluates foreground text against one of two fixed page
//! backgrounds. Its readout uses a linear-light luminance approximation (no
//! sRGB gamma linearization) and a pre-computed luminance constant per
//! background; [`contrast_ratio`] reproduces that readout exactly so the
//! displayed values stay stable. [`relative_luminance`] is the precise WCAG
//! formula for callers that want it.

use std::fmt;

use crate::color::{InvalidColorFormat, Rgb};

/// Minimum contrast ratio for normal text at WCAG level AA.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// One of the two fixed page backgrounds text is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Background {
    /// Dark page background (`#111827`).
    Dark,
    /// Light page background (`#f9fafb`).
    Light,
}

impl Background {
    /// The background's canonical HEX string.
    #[inline]
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Background::Dark => "#111827",
            Background::Light => "#f9fafb",
        }
    }

    /// Pre-computed background luminance used by the readout.
    #[inline]
    #[must_use]
    pub const fn luminance(self) -> f64 {
        match self {
            Background::Dark => 0.03,
            Background::Light => 0.94,
        }
    }
}

/// A computed contrast ratio with its AA classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contrast {
    ratio: f64,
}

impl Contrast {
    /// The ratio rounded to 2 decimal places, as the page displays it.
    ///
    /// Always ≥ 1.0: the formula adds the same constant to the larger and
    /// smaller luminance.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        (self.ratio * 100.0).round() / 100.0
    }

    /// Whether the displayed ratio meets WCAG AA for normal text (≥ 4.5).
    ///
    /// Classifies the rounded ratio so the boolean never disagrees with the
    /// number shown next to it.
    #[must_use]
    pub fn meets_aa(&self) -> bool {
        self.ratio() >= WCAG_AA_NORMAL_TEXT
    }

    /// The page's classification label: `"WCAG AA"` or `"Low"`.
    #[must_use]
    pub fn rating(&self) -> &'static str {
        if self.meets_aa() { "WCAG AA" } else { "Low" }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.ratio())
    }
}

/// Linearize one sRGB channel fraction (WCAG 2.x).
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Precise WCAG relative luminance of a decoded triple.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.channels();
    0.2126 * srgb_to_linear(r) + 0.7152 * srgb_to_linear(g) + 0.0722 * srgb_to_linear(b)
}

/// Readout luminance: the WCAG channel weights over raw byte fractions,
/// without gamma linearization.
#[must_use]
pub fn readout_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.channels();
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Evaluate a foreground HEX color against a fixed page background.
pub fn contrast_ratio(hex: &str, background: Background) -> Result<Contrast, InvalidColorFormat> {
    let fg = readout_luminance(Rgb::from_hex(hex)?);
    let bg = background.luminance();
    let lighter = fg.max(bg);
    let darker = fg.min(bg);
    Ok(Contrast {
        ratio: (lighter + 0.05) / (darker + 0.05),
    })
}

/// Whether a foreground HEX color meets WCAG AA against the background.
pub fn meets_wcag_aa(hex: &str, background: Background) -> Result<bool, InvalidColorFormat> {
    Ok(contrast_ratio(hex, background)?.meets_aa())
}
