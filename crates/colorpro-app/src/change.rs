#![forbid(unsafe_code)]

//! Picker change-event normalization.
//!
//! The external color-picker widget is duck-typed: its onChange payload is
//! either a bare HEX string or an object carrying a `hex` field. [`ColorChange`]
//! makes that a tagged union so the rest of the application only ever sees one
//! canonical HEX string.

use colorpro_model::{InvalidColorFormat, Rgb};

/// A color-change event from the external picker widget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorChange {
    /// The payload was a bare HEX string.
    Hex(String),
    /// The payload was an object with a `hex` field.
    Swatch {
        /// The HEX string carried by the object payload.
        hex: String,
    },
}

impl ColorChange {
    /// The HEX string carried by either payload shape, unvalidated.
    #[must_use]
    pub fn hex(&self) -> &str {
        match self {
            ColorChange::Hex(hex) => hex,
            ColorChange::Swatch { hex } => hex,
        }
    }

    /// Validate and normalize to the canonical lowercase `#rrggbb` form.
    pub fn validated(&self) -> Result<String, InvalidColorFormat> {
        Ok(Rgb::from_hex(self.hex())?.to_hex())
    }
}

impl From<&str> for ColorChange {
    fn from(hex: &str) -> Self {
        ColorChange::Hex(hex.to_owned())
    }
}

impl From<String> for ColorChange {
    fn from(hex: String) -> Self {
        ColorChange::Hex(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_payload_shapes_carry_the_same_hex() {
        let string_payload = ColorChange::from("#14b8a6");
        let object_payload = ColorChange::Swatch {
            hex: "#14b8a6".to_owned(),
        };
        assert_eq!(string_payload.hex(), object_payload.hex());
    }

    #[test]
    fn validated_lowercases_the_canonical_form() {
        let change = ColorChange::from("#14B8A6");
        assert_eq!(change.validated().unwrap(), "#14b8a6");
    }

    #[test]
    fn validated_rejects_malformed_payloads() {
        for input in ["notacolor", "#abc", ""] {
            let change = ColorChange::from(input);
            let err = change.validated().unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn untagged_serde_matches_the_widget_payloads() {
        let from_string: ColorChange = serde_json::from_str("\"#ff0000\"").unwrap();
        assert_eq!(from_string, ColorChange::Hex("#ff0000".to_owned()));

        let from_object: ColorChange = serde_json::from_str(r##"{"hex":"#ff0000"}"##).unwrap();
        assert_eq!(
            from_object,
            ColorChange::Swatch {
                hex: "#ff0000".to_owned()
            }
        );
    }
}
