#![forbid(unsafe_code)]

//! Preferences backed by a key-value store.
//!
//! The page remembers the last-selected color and the theme mode across
//! visits. Persistence is an external collaborator with a plain
//! `read(key)/write(key, value)` contract ([`KvStore`]); [`MemoryStore`] is
//! the in-memory implementation for tests and storage-less hosts.
//!
//! Loading validates stored values and falls back to the defaults rather than
//! letting a malformed color into the application: once constructed,
//! [`Preferences`] only ever holds a valid HEX string.

use std::collections::HashMap;

use colorpro_model::{Background, InvalidColorFormat, Rgb};

use crate::change::ColorChange;
use crate::readout::SwatchReadout;

/// Store key for the last-selected color.
pub const COLOR_KEY: &str = "appColor";
/// Store key for the theme mode.
pub const THEME_KEY: &str = "appTheme";
/// Color shown before the user has picked anything.
pub const DEFAULT_COLOR: &str = "#14b8a6";

/// External key-value persistence collaborator.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str);
}

/// In-memory [`KvStore`] for tests and hosts without platform storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KvStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// The page theme, selecting which fixed background text sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeMode {
    /// Light page background.
    #[default]
    Light,
    /// Dark page background.
    Dark,
}

impl ThemeMode {
    /// The contrast background for this mode.
    #[inline]
    #[must_use]
    pub const fn background(self) -> Background {
        match self {
            ThemeMode::Light => Background::Light,
            ThemeMode::Dark => Background::Dark,
        }
    }

    /// The value persisted to the store.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// The other mode.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Last-selected color and theme mode.
///
/// The color field is private so the validity invariant holds: every path
/// that sets it goes through HEX validation first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    color: String,
    theme: ThemeMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            theme: ThemeMode::Light,
        }
    }
}

impl Preferences {
    /// Load saved preferences, falling back to the defaults.
    ///
    /// A stored color that fails HEX validation is ignored with a warning;
    /// any theme value other than `"dark"` means light.
    pub fn load(store: &impl KvStore) -> Self {
        let mut prefs = Self::default();
        if let Some(saved) = store.read(COLOR_KEY) {
            match Rgb::from_hex(&saved) {
                Ok(_) => prefs.color = saved,
                Err(err) => {
                    tracing::warn!(%err, "ignoring malformed saved color");
                }
            }
        }
        if store.read(THEME_KEY).as_deref() == Some("dark") {
            prefs.theme = ThemeMode::Dark;
        }
        prefs
    }

    /// Persist both preference keys.
    pub fn store(&self, store: &mut impl KvStore) {
        store.write(COLOR_KEY, &self.color);
        store.write(THEME_KEY, self.theme.as_str());
    }

    /// The current color as a canonical HEX string.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The current theme mode.
    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Apply a picker change event.
    ///
    /// On invalid input the update is rejected and the previous valid color
    /// is retained.
    pub fn set_color(&mut self, change: ColorChange) -> Result<(), InvalidColorFormat> {
        self.color = change.validated()?;
        Ok(())
    }

    /// Set the theme mode.
    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = theme;
    }

    /// Flip between light and dark mode.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Assemble the demo-panel readout for the current color and theme.
    pub fn readout(&self) -> Result<SwatchReadout, InvalidColorFormat> {
        SwatchReadout::for_color(&self.color, self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn defaults_apply_on_an_empty_store() {
        let prefs = Preferences::load(&MemoryStore::default());
        assert_eq!(prefs.color(), DEFAULT_COLOR);
        assert_eq!(prefs.theme(), ThemeMode::Light);
    }

    #[test]
    fn load_store_round_trip() {
        let mut store = MemoryStore::default();
        let mut prefs = Preferences::default();
        prefs.set_color(ColorChange::from("#ff8800")).unwrap();
        prefs.set_theme(ThemeMode::Dark);
        prefs.store(&mut store);

        assert_eq!(store.read(COLOR_KEY).as_deref(), Some("#ff8800"));
        assert_eq!(store.read(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[traced_test]
    #[test]
    fn malformed_saved_color_falls_back_with_a_warning() {
        let mut store = MemoryStore::default();
        store.write(COLOR_KEY, "not-a-color");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.color(), DEFAULT_COLOR);
        assert!(logs_contain("ignoring malformed saved color"));
    }

    #[test]
    fn unknown_theme_value_means_light() {
        let mut store = MemoryStore::default();
        store.write(THEME_KEY, "solarized");
        assert_eq!(Preferences::load(&store).theme(), ThemeMode::Light);
    }

    #[test]
    fn rejected_update_retains_previous_color() {
        let mut prefs = Preferences::default();
        prefs.set_color(ColorChange::from("#123456")).unwrap();
        assert!(prefs.set_color(ColorChange::from("#12345")).is_err());
        assert_eq!(prefs.color(), "#123456");
    }

    #[test]
    fn set_color_normalizes_case() {
        let mut prefs = Preferences::default();
        prefs.set_color(ColorChange::from("#ABCDEF")).unwrap();
        assert_eq!(prefs.color(), "#abcdef");
    }

    #[test]
    fn toggle_flips_theme_and_background() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.theme().background(), Background::Light);
        prefs.toggle_theme();
        assert_eq!(prefs.theme(), ThemeMode::Dark);
        assert_eq!(prefs.theme().background(), Background::Dark);
        prefs.toggle_theme();
        assert_eq!(prefs.theme(), ThemeMode::Light);
    }
}
