// skycast-core: domain layer between skycast-api and consumers (TUI).

pub mod convert;
pub mod error;
pub mod icons;
pub mod model;
pub mod service;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::CoreError;
pub use icons::{Category, IconId, classify};
pub use model::{Reading, ThemeMode};
pub use service::WeatherService;
pub use view::ViewState;
