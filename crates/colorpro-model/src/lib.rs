#![forbid(unsafe_code)]

//! Color value types, HEX decoding, and contrast evaluation for colorpro.
//!
//! # Role in colorpro
//! `colorpro-model` is the shared vocabulary for colors. The host layer and
//! any renderer use these types to agree on what a color is without dragging
//! in UI or persistence dependencies.
//!
//! # This crate provides
//! - [`Rgb`] and [`Hsl`] decoded from `#RRGGBB` strings, with the canonical
//!   `rgb(r, g, b)` / `hsl(h, s%, l%)` display forms.
//! - [`Contrast`] and the contrast-ratio evaluator against the two fixed page
//!   backgrounds ([`Background`]).
//! - [`InvalidColorFormat`], the single error kind for malformed input.
//!
//! # How it fits in the system
//! `colorpro-app` normalizes picker events and preferences down to a HEX
//! string and hands it here. Every operation is a pure function: no caching,
//! no shared state, nothing to tear down.
//!
//! # Example
//!
//! ```
//! use colorpro_model::{Background, Hsl, Rgb, contrast_ratio};
//!
//! let rgb = Rgb::from_hex("#14b8a6")?;
//! assert_eq!(rgb.to_string(), "rgb(20, 184, 166)");
//! assert_eq!(Hsl::from_rgb(rgb).to_string(), "hsl(173, 80%, 40%)");
//!
//! let contrast = contrast_ratio("#14b8a6", Background::Dark)?;
//! assert!(contrast.meets_aa());
//! # Ok::<(), colorpro_model::InvalidColorFormat>(())
//! ```

/// Color value types and HEX decoding.
pub mod color;
/// Contrast utilities (WCAG AA).
pub mod contrast;

pub use color::{Hsl, InvalidColorFormat, Rgb};
pub use contrast::{
    // WCAG constants
    WCAG_AA_NORMAL_TEXT,
    // Contrast types and evaluator
    Background,
    Contrast,
    contrast_ratio,
    meets_wcag_aa,
    relative_luminance,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_display_contrast_pipeline() {
        let rgb = Rgb::from_hex("#14b8a6").unwrap();
        assert_eq!(rgb.to_string(), "rgb(20, 184, 166)");

        let hsl = Hsl::from_rgb(rgb);
        assert_eq!(hsl.to_string(), "hsl(173, 80%, 40%)");

        let contrast = contrast_ratio("#14b8a6", Background::Dark).unwrap();
        assert!(contrast.meets_aa());
    }

    #[test]
    fn malformed_input_fails_at_every_operation() {
        assert!(Rgb::from_hex("notacolor").is_err());
        assert!(Hsl::from_hex("notacolor").is_err());
        assert!(contrast_ratio("notacolor", Background::Light).is_err());
    }
}
