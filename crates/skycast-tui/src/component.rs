//! Component trait — the building block for every UI panel.

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::theme::Theme;

/// Every UI panel implements Component.
///
/// Lifecycle: (`handle_key_event` | `update` | `render`)*
pub trait Component {
    /// Handle a keyboard event. Return an Action to dispatch, or None.
    fn handle_key_event(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Process a dispatched action. May return a follow-up action.
    fn update(&mut self, _action: &Action) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Render into the provided frame area with the active palette.
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Set focus state.
    fn set_focused(&mut self, _focused: bool) {}
}
