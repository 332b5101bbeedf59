//! All possible UI actions. Actions are the sole mechanism for state mutation.

use skycast_core::Reading;

/// Actions dispatched through the app's mpsc channel.
#[derive(Debug, Clone)]
pub enum Action {
    /// Exit the event loop.
    Quit,
    /// Periodic tick for animation (throbber).
    Tick,
    /// Redraw the frame.
    Render,
    /// Terminal resized to (cols, rows).
    Resize(u16, u16),

    /// Focus the search bar for typing.
    OpenSearch,
    /// Leave search mode without submitting.
    CloseSearch,
    /// A place name was submitted. Whitespace-only input never gets here.
    Lookup(String),

    /// A lookup finished. `generation` identifies which submission this
    /// answers; stale generations are dropped.
    LookupLoaded { generation: u64, reading: Reading },
    /// A lookup failed. `detail` goes to the log, not the screen.
    LookupFailed { generation: u64, detail: String },

    /// Flip between the light and dark color schemes.
    ToggleTheme,
}
