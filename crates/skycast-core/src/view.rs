// ── Lookup view state ──

use crate::model::Reading;

/// What the display area is showing right now.
///
/// Exactly one variant is active at a time; the renderer switches on it
/// rather than tracking visibility flags per widget.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// No lookup yet. Shows the placeholder prompt.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The most recent lookup succeeded.
    Success(Reading),
    /// The most recent lookup failed. Carries the banner text to show.
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn reading(&self) -> Option<&Reading> {
        match self {
            Self::Success(reading) => Some(reading),
            _ => None,
        }
    }
}
