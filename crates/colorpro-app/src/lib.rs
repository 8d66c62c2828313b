#![forbid(unsafe_code)]

//! Host integration for colorpro.
//!
//! # Role in colorpro
//! The demo page sits between an external color-picker widget, a key-value
//! preference store, and the clipboard. This crate owns those boundaries so
//! the color math in `colorpro-model` stays pure.
//!
//! # This crate provides
//! - [`ColorChange`] — the picker's duck-typed onChange payload as a tagged
//!   union, normalized to one canonical HEX string.
//! - [`Preferences`] over a [`KvStore`] collaborator, with the last-selected
//!   color and theme mode and the fail-fast/keep-previous update policy.
//! - [`Clipboard`] and [`copy_value`] for the copy action.
//! - [`SwatchReadout`] — the assembled HEX/RGB/HSL/contrast panel data.
//!
//! # How it fits in the system
//! A host obtains HEX input from its picker widget, runs it through this
//! crate, and renders the readout. Storage and clipboard are trait seams; the
//! in-memory implementations here are for hosts without a platform backend
//! and for tests.

/// Picker change-event normalization.
pub mod change;
/// Clipboard seam for the copy action.
pub mod clipboard;
/// Preferences backed by a key-value store.
pub mod prefs;
/// Assembled demo-panel readout.
pub mod readout;

pub use change::ColorChange;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, copy_value};
pub use prefs::{COLOR_KEY, DEFAULT_COLOR, KvStore, MemoryStore, Preferences, THEME_KEY, ThemeMode};
pub use readout::SwatchReadout;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_event_to_persisted_readout() {
        let mut store = MemoryStore::default();
        let mut prefs = Preferences::load(&store);

        prefs
            .set_color(ColorChange::Swatch {
                hex: "#FF0000".to_owned(),
            })
            .unwrap();
        prefs.store(&mut store);

        let reloaded = Preferences::load(&store);
        assert_eq!(reloaded.color(), "#ff0000");

        let readout = reloaded.readout().unwrap();
        assert_eq!(readout.rgb, "rgb(255, 0, 0)");
        assert_eq!(readout.hsl, "hsl(0, 100%, 50%)");
    }
}
