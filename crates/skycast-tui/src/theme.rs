//! Light and dark palettes plus semantic styling for the TUI.
//!
//! Unlike a single fixed palette, the active [`Theme`] is chosen at
//! runtime from the persisted [`ThemeMode`] and can be flipped while
//! the app runs, so styles are methods rather than free functions.

use ratatui::style::{Color, Modifier, Style};

use skycast_core::ThemeMode;

/// A full color palette. One static instance per [`ThemeMode`].
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub border_active: Color,
    pub error: Color,
    /// Landmass color on the map canvas.
    pub map_land: Color,
    /// Marker color on the map canvas.
    pub map_marker: Color,
}

pub const LIGHT: Theme = Theme {
    bg: Color::Rgb(250, 250, 245), // #fafaf5
    fg: Color::Rgb(40, 42, 54),    // #282a36
    muted: Color::Rgb(120, 124, 140),
    accent: Color::Rgb(30, 100, 200), // #1e64c8
    border: Color::Rgb(180, 184, 196),
    border_active: Color::Rgb(30, 100, 200),
    error: Color::Rgb(200, 40, 40),
    map_land: Color::Rgb(120, 150, 120),
    map_marker: Color::Rgb(200, 40, 40),
};

pub const DARK: Theme = Theme {
    bg: Color::Rgb(30, 31, 41), // #1e1f29
    fg: Color::Rgb(189, 193, 207),
    muted: Color::Rgb(98, 114, 164), // #6272a4
    accent: Color::Rgb(128, 255, 234), // #80ffea
    border: Color::Rgb(98, 114, 164),
    border_active: Color::Rgb(128, 255, 234),
    error: Color::Rgb(255, 99, 99), // #ff6363
    map_land: Color::Rgb(80, 120, 90),
    map_marker: Color::Rgb(255, 99, 99),
};

impl Theme {
    /// Palette for a persisted theme mode.
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }

    // ── Semantic styles ──────────────────────────────────────────────

    /// Title text for blocks/panels.
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Border for a panel, focused or not.
    pub fn panel_border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_active)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Normal body text.
    pub fn body(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Secondary text (labels, placeholders).
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// The big temperature figure.
    pub fn temperature(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Error banner text.
    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Key hint text (e.g., "q quit  / search").
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Key hint key character.
    pub fn key_hint_key(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_distinct_palettes() {
        let light = Theme::for_mode(ThemeMode::Light);
        let dark = Theme::for_mode(ThemeMode::Dark);
        assert_ne!(format!("{:?}", light.bg), format!("{:?}", dark.bg));
    }
}
