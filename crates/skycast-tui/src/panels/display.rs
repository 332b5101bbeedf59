//! Conditions display — renders whichever `ViewState` is active.

use color_eyre::eyre::Result;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use skycast_core::{Reading, ViewState, classify};

use crate::action::Action;
use crate::component::Component;
use crate::theme::Theme;
use crate::widgets::glyphs::glyph;

/// Main content panel. Holds no view data of its own; the app passes
/// the current [`ViewState`] in before each render.
pub struct DisplayPanel {
    view: ViewState,
    /// Whether any lookup succeeded this session. Decides what sits
    /// under the error banner.
    had_success: bool,
    throbber_state: throbber_widgets_tui::ThrobberState,
}

impl DisplayPanel {
    pub fn new() -> Self {
        Self {
            view: ViewState::Idle,
            had_success: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn set_view(&mut self, view: ViewState) {
        if matches!(view, ViewState::Success(_)) {
            self.had_success = true;
        }
        self.view = view;
    }

    #[cfg(test)]
    pub fn had_success(&self) -> bool {
        self.had_success
    }

    fn render_idle(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Search for a city to see current conditions",
                theme.muted_text(),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let row = Rect {
            x: area.x + 1,
            y: area.y + area.height / 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("fetching current conditions…")
            .style(theme.muted_text())
            .throbber_style(theme.title());
        frame.render_stateful_widget(throbber, row, &mut self.throbber_state.clone());
    }

    fn render_error(&self, frame: &mut Frame, area: Rect, theme: &Theme, banner: &str) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(banner.to_owned(), theme.error_text())),
        ];
        // Before any success there is nothing worth keeping behind the
        // banner, so the idle prompt returns underneath it.
        if !self.had_success {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Search for a city to see current conditions",
                theme.muted_text(),
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn render_reading(&self, frame: &mut Frame, area: Rect, theme: &Theme, reading: &Reading) {
        let rows = Layout::vertical([
            Constraint::Length(1), // place
            Constraint::Length(2), // temperature + condition
            Constraint::Length(1),
            Constraint::Min(4), // details
        ])
        .split(area);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                reading.place_label(),
                theme.title(),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        let icon = glyph(classify(reading.condition_code, reading.is_day));
        let headline = Line::from(vec![
            Span::styled(format!("{}°C ", reading.temp_rounded()), theme.temperature()),
            Span::styled(format!("{icon} "), theme.body()),
            Span::styled(reading.condition_text.clone(), theme.body()),
        ]);
        frame.render_widget(
            Paragraph::new(headline).alignment(Alignment::Center),
            rows[1],
        );

        let detail = |label: &str, value: String| {
            Line::from(vec![
                Span::styled(format!("  {label:<12}"), theme.muted_text()),
                Span::styled(value, theme.body()),
            ])
        };

        let details = vec![
            detail("feels like", format!("{}°C", reading.feelslike_rounded())),
            detail("humidity", format!("{}%", reading.humidity)),
            detail("wind", format!("{} km/h", reading.wind_kph)),
            detail("pressure", format!("{} hPa", reading.pressure_mb)),
        ];
        frame.render_widget(Paragraph::new(details), rows[3]);
    }
}

impl Component for DisplayPanel {
    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        if matches!(action, Action::Tick) && self.view.is_loading() {
            self.throbber_state.calc_next();
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Current conditions ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border(false));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match &self.view {
            ViewState::Idle => self.render_idle(frame, inner, theme),
            ViewState::Loading => self.render_loading(frame, inner, theme),
            ViewState::Error(banner) => self.render_error(frame, inner, theme, banner),
            ViewState::Success(reading) => self.render_reading(frame, inner, theme, reading),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading() -> Reading {
        Reading {
            name: "Paris".into(),
            country: "France".into(),
            temp_c: 18.4,
            feelslike_c: 17.5,
            humidity: 63,
            wind_kph: 14.8,
            pressure_mb: 1016.0,
            condition_text: "Partly cloudy".into(),
            condition_code: 1003,
            is_day: true,
            lat: 48.85,
            lon: 2.35,
        }
    }

    #[test]
    fn test_success_is_remembered_across_later_errors() {
        let mut panel = DisplayPanel::new();
        assert!(!panel.had_success());

        panel.set_view(ViewState::Error("nope".into()));
        assert!(!panel.had_success());

        panel.set_view(ViewState::Success(reading()));
        panel.set_view(ViewState::Error("nope".into()));
        assert!(panel.had_success());
    }
}
