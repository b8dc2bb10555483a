use druid::kurbo::Point;
use druid::Data;

use crate::theme::{IconGlyph, Theme, ThemeView};

/// Application state
#[derive(Clone, Data)]
pub struct AppState {
    /// Active visual theme; the source of truth when toggling.
    pub theme: Theme,
    /// Glyph shown on the theme toggle indicator.
    pub icon: IconGlyph,
    /// RGB triple shared by every dot's draw step.
    pub dot_color: (u8, u8, u8),
    /// Last pointer position, in window coordinates.
    pub pointer: Point,
    /// Enable debug overlay
    pub debug: bool,
}

impl AppState {
    /// Default (light) state with the pointer parked far off-screen so no
    /// dot starts attracted.
    pub fn new() -> Self {
        AppState {
            theme: Theme::Light,
            icon: Theme::Light.icon(),
            dot_color: Theme::Light.dot_color(),
            pointer: Point::new(-1000.0, -1000.0),
            debug: false,
        }
    }

    fn apply_icon(&mut self, theme: Theme) {
        self.icon = theme.icon();
    }

    fn apply_dot_color(&mut self, theme: Theme) {
        self.dot_color = theme.dot_color();
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

impl ThemeView for AppState {
    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.apply_icon(theme);
        self.apply_dot_color(theme);
    }

    fn current_theme(&self) -> Theme {
        self.theme
    }
}
