#![forbid(unsafe_code)]

//! Assembled demo-panel readout.
//!
//! The live-preview panel shows the current color as HEX, RGB, and HSL rows
//! plus its contrast ratio against the active page background. All values are
//! computed fresh from the HEX input; nothing is cached between renders.

use colorpro_model::{Contrast, Hsl, InvalidColorFormat, Rgb, contrast_ratio};

use crate::prefs::ThemeMode;

/// Everything the preview panel renders for one color.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchReadout {
    /// Canonical lowercase HEX string.
    pub hex: String,
    /// Canonical `rgb(r, g, b)` string.
    pub rgb: String,
    /// Canonical `hsl(h, s%, l%)` string.
    pub hsl: String,
    /// Contrast against the active page background.
    pub contrast: Contrast,
}

impl SwatchReadout {
    /// Compute the readout for a HEX color under the given theme.
    pub fn for_color(hex: &str, theme: ThemeMode) -> Result<Self, InvalidColorFormat> {
        let rgb = Rgb::from_hex(hex)?;
        let contrast = contrast_ratio(hex, theme.background())?;
        Ok(Self {
            hex: rgb.to_hex(),
            rgb: rgb.to_string(),
            hsl: Hsl::from_rgb(rgb).to_string(),
            contrast,
        })
    }

    /// The copyable label/value rows, in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 3] {
        [("HEX", &self.hex), ("RGB", &self.rgb), ("HSL", &self.hsl)]
    }

    /// The contrast row text, e.g. `"7.87 (WCAG AA)"`.
    #[must_use]
    pub fn contrast_row(&self) -> String {
        format!("{} ({})", self.contrast, self.contrast.rating())
    }
}
