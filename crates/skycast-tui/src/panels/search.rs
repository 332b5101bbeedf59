//! Search bar — hand-rolled single-line text input.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::action::Action;
use crate::component::Component;
use crate::theme::Theme;

/// Single-line place-name input at the top of the screen.
pub struct SearchBar {
    input: String,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focused: false,
        }
    }

    #[cfg(test)]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Component for SearchBar {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.focused {
            return Ok(None);
        }

        match key.code {
            KeyCode::Esc => Ok(Some(Action::CloseSearch)),
            KeyCode::Enter => {
                let place = self.input.trim();
                if place.is_empty() {
                    // Whitespace-only input submits nothing and stays put.
                    Ok(None)
                } else {
                    Ok(Some(Action::Lookup(place.to_owned())))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                Ok(None)
            }
            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE
                    || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.input.push(c);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Search ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border(self.focused));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = if self.input.is_empty() && !self.focused {
            Line::from(Span::styled(
                " press / and type a city name",
                theme.muted_text(),
            ))
        } else {
            let mut spans = vec![
                Span::raw(" "),
                Span::styled(self.input.as_str(), theme.body()),
            ];
            if self.focused {
                spans.push(Span::styled("█", theme.body()));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line), inner);
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_requires_focus() {
        let mut bar = SearchBar::new();
        assert!(bar.handle_key_event(press(KeyCode::Char('a'))).unwrap().is_none());
        assert_eq!(bar.input(), "");

        bar.set_focused(true);
        bar.handle_key_event(press(KeyCode::Char('a'))).unwrap();
        assert_eq!(bar.input(), "a");
    }

    #[test]
    fn test_enter_trims_and_submits() {
        let mut bar = SearchBar::new();
        bar.set_focused(true);
        for c in "  Oslo ".chars() {
            bar.handle_key_event(press(KeyCode::Char(c))).unwrap();
        }

        let action = bar.handle_key_event(press(KeyCode::Enter)).unwrap();
        match action {
            Some(Action::Lookup(place)) => assert_eq!(place, "Oslo"),
            other => panic!("expected Lookup, got: {other:?}"),
        }
    }

    #[test]
    fn test_blank_input_never_submits() {
        let mut bar = SearchBar::new();
        bar.set_focused(true);
        for c in "   ".chars() {
            bar.handle_key_event(press(KeyCode::Char(c))).unwrap();
        }
        assert!(bar.handle_key_event(press(KeyCode::Enter)).unwrap().is_none());
    }

    #[test]
    fn test_backspace_edits() {
        let mut bar = SearchBar::new();
        bar.set_focused(true);
        for c in "Rome".chars() {
            bar.handle_key_event(press(KeyCode::Char(c))).unwrap();
        }
        bar.handle_key_event(press(KeyCode::Backspace)).unwrap();
        assert_eq!(bar.input(), "Rom");
    }
}
