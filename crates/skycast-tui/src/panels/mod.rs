//! UI panels: search bar, conditions display, and location map.

pub mod display;
pub mod map;
pub mod search;

pub use display::DisplayPanel;
pub use map::MapPanel;
pub use search::SearchBar;
