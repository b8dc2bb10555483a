use std::fs;
use std::path::PathBuf;

use druid::Data;
use thiserror::Error;

/// Dot color in light mode (soft blue).
pub const LIGHT_DOT_RGB: (u8, u8, u8) = (74, 144, 226);
/// Dot color in dark mode (white).
pub const DARK_DOT_RGB: (u8, u8, u8) = (255, 255, 255);

/// Window background in light mode.
pub const LIGHT_BACKGROUND_RGB: (u8, u8, u8) = (250, 250, 250);
/// Window background in dark mode.
pub const DARK_BACKGROUND_RGB: (u8, u8, u8) = (17, 20, 24);

/// One of the two visual presentation modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Data)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The string form used by the preference store.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parses a stored preference string. Unknown strings are treated as
    /// no preference at all.
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// The other of the two themes.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// RGB triple shared by every dot's draw step.
    pub fn dot_color(self) -> (u8, u8, u8) {
        match self {
            Theme::Light => LIGHT_DOT_RGB,
            Theme::Dark => DARK_DOT_RGB,
        }
    }

    pub fn background(self) -> (u8, u8, u8) {
        match self {
            Theme::Light => LIGHT_BACKGROUND_RGB,
            Theme::Dark => DARK_BACKGROUND_RGB,
        }
    }

    /// Glyph shown on the toggle: the control points at the theme you would
    /// switch to, so dark mode shows the sun.
    pub fn icon(self) -> IconGlyph {
        match self {
            Theme::Light => IconGlyph::Moon,
            Theme::Dark => IconGlyph::Sun,
        }
    }
}

/// The toggle indicator glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Data)]
pub enum IconGlyph {
    Moon,
    Sun,
}

impl IconGlyph {
    pub fn glyph(self) -> &'static str {
        match self {
            IconGlyph::Moon => "\u{263e}",
            IconGlyph::Sun => "\u{2600}",
        }
    }
}

/// The two operations the controller needs from whatever displays the theme.
///
/// `apply_theme` covers the whole visual side effect: document attribute,
/// toggle icon, and dot color. `current_theme` is the source of truth when
/// toggling.
pub trait ThemeView {
    fn apply_theme(&mut self, theme: Theme);
    fn current_theme(&self) -> Theme;
}

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("no config directory available on this platform")]
    NoConfigDir,
    #[error("failed to write preference file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the single theme preference string lives between runs.
pub trait PreferenceStore {
    /// Returns the stored preference, or `None` when nothing usable is stored.
    fn load(&self) -> Option<Theme>;
    fn save(&mut self, theme: Theme) -> Result<(), PreferenceError>;
}

/// Stores the preference as a bare string in a file under the OS config dir.
pub struct FilePreferences {
    path: Option<PathBuf>,
}

impl FilePreferences {
    /// The standard location, `<config_dir>/dotfield/theme`.
    pub fn standard() -> Self {
        FilePreferences {
            path: dirs::config_dir().map(|d| d.join("dotfield").join("theme")),
        }
    }

    pub fn at(path: PathBuf) -> Self {
        FilePreferences { path: Some(path) }
    }
}

impl PreferenceStore for FilePreferences {
    fn load(&self) -> Option<Theme> {
        let path = self.path.as_ref()?;
        let raw = fs::read_to_string(path).ok()?;
        Theme::from_name(raw.trim())
    }

    fn save(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        let path = self.path.as_ref().ok_or(PreferenceError::NoConfigDir)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, theme.as_str())?;
        Ok(())
    }
}

/// Determines and applies the active theme, keeping it in sync with the
/// preference store.
pub struct ThemeController<S> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        ThemeController { store }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    /// Startup path: a stored preference always wins. With nothing stored,
    /// a dark system scheme is honored but NOT persisted; only explicit
    /// toggles write to the store. Otherwise the default stays in place.
    pub fn initialize(&mut self, view: &mut dyn ThemeView, system_prefers_dark: bool) {
        if let Some(theme) = self.store.load() {
            tracing::debug!(theme = theme.as_str(), "applying stored theme preference");
            view.apply_theme(theme);
        } else if system_prefers_dark {
            tracing::debug!("no stored preference, following dark system scheme");
            view.apply_theme(Theme::Dark);
        }
    }

    /// Flips the currently applied theme, persists the new value, and
    /// re-applies icon and dot color. A save failure is logged and the
    /// visual switch still happens.
    pub fn toggle(&mut self, view: &mut dyn ThemeView) {
        let next = view.current_theme().toggled();
        if let Err(e) = self.store.save(next) {
            tracing::warn!("failed to persist theme preference: {e}");
        }
        view.apply_theme(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeView {
        theme: Theme,
        applied: Vec<Theme>,
    }

    impl FakeView {
        fn new(theme: Theme) -> Self {
            FakeView {
                theme,
                applied: Vec::new(),
            }
        }
    }

    impl ThemeView for FakeView {
        fn apply_theme(&mut self, theme: Theme) {
            self.theme = theme;
            self.applied.push(theme);
        }

        fn current_theme(&self) -> Theme {
            self.theme
        }
    }

    #[derive(Default)]
    struct MemoryStore {
        value: Option<Theme>,
        saves: usize,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Option<Theme> {
            self.value
        }

        fn save(&mut self, theme: Theme) -> Result<(), PreferenceError> {
            self.value = Some(theme);
            self.saves += 1;
            Ok(())
        }
    }

    #[test]
    fn theme_names_round_trip() {
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name(Theme::Dark.as_str()), Some(Theme::Dark));
        assert_eq!(Theme::from_name("solarized"), None);
        assert_eq!(Theme::from_name(""), None);
    }

    #[test]
    fn stored_preference_wins_over_system_scheme() {
        let mut controller = ThemeController::new(MemoryStore {
            value: Some(Theme::Light),
            saves: 0,
        });
        let mut view = FakeView::new(Theme::Light);
        controller.initialize(&mut view, true);
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(view.applied, vec![Theme::Light]);
    }

    #[test]
    fn system_dark_applies_without_persisting() {
        let mut controller = ThemeController::new(MemoryStore::default());
        let mut view = FakeView::new(Theme::Light);
        controller.initialize(&mut view, true);
        assert_eq!(view.theme, Theme::Dark);
        // Only explicit toggles persist.
        assert_eq!(controller.store.value, None);
        assert_eq!(controller.store.saves, 0);
    }

    #[test]
    fn no_preference_no_system_hint_leaves_default() {
        let mut controller = ThemeController::new(MemoryStore::default());
        let mut view = FakeView::new(Theme::Light);
        controller.initialize(&mut view, false);
        assert_eq!(view.theme, Theme::Light);
        assert!(view.applied.is_empty());
    }

    #[test]
    fn double_toggle_restores_theme_and_store_matches() {
        let mut controller = ThemeController::new(MemoryStore::default());
        let mut view = FakeView::new(Theme::Light);

        controller.toggle(&mut view);
        assert_eq!(view.theme, Theme::Dark);
        assert_eq!(controller.store.value, Some(Theme::Dark));

        controller.toggle(&mut view);
        assert_eq!(view.theme, Theme::Light);
        assert_eq!(controller.store.value, Some(Theme::Light));
        assert_eq!(controller.store.saves, 2);
    }

    #[test]
    fn toggle_survives_store_failure() {
        struct BrokenStore;

        impl PreferenceStore for BrokenStore {
            fn load(&self) -> Option<Theme> {
                None
            }

            fn save(&mut self, _theme: Theme) -> Result<(), PreferenceError> {
                Err(PreferenceError::NoConfigDir)
            }
        }

        let mut controller = ThemeController::new(BrokenStore);
        let mut view = FakeView::new(Theme::Light);
        controller.toggle(&mut view);
        assert_eq!(view.theme, Theme::Dark);
    }

    #[test]
    fn file_preferences_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        let mut store = FilePreferences::at(path.clone());

        assert_eq!(store.load(), None);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "dark");

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Some(Theme::Light));
    }

    #[test]
    fn file_preferences_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "blurple\n").unwrap();
        let store = FilePreferences::at(path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn file_preferences_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("theme");
        let mut store = FilePreferences::at(path);
        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Some(Theme::Dark));
    }

    #[test]
    fn icon_points_at_the_other_theme() {
        assert_eq!(Theme::Dark.icon(), IconGlyph::Sun);
        assert_eq!(Theme::Light.icon(), IconGlyph::Moon);
    }

    #[test]
    fn dot_colors_match_themes() {
        assert_eq!(Theme::Dark.dot_color(), (255, 255, 255));
        assert_eq!(Theme::Light.dot_color(), (74, 144, 226));
    }
}
