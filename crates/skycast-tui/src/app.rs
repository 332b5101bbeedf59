//! Application core — event loop, lookup lifecycle, action dispatch.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use skycast_core::{ThemeMode, ViewState, WeatherService};

use crate::action::Action;
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::panels::{DisplayPanel, MapPanel, SearchBar};
use crate::theme::Theme;
use crate::tui::Tui;

/// Banner shown for any failed lookup. The underlying cause goes to the
/// log file only.
const ERROR_BANNER: &str = "Could not fetch weather. Check the city name and try again.";

/// Top-level application state and event loop.
pub struct App {
    /// What the display panel is showing.
    view: ViewState,
    /// Monotonic lookup counter. Completions carrying an older value
    /// lost the race and are dropped.
    generation: u64,
    /// Whether the search bar has keyboard focus.
    search_active: bool,
    /// Active color scheme.
    theme_mode: ThemeMode,
    /// Where to persist theme flips. `None` disables persistence.
    config_path: Option<PathBuf>,

    search: SearchBar,
    display: DisplayPanel,
    map: MapPanel,

    service: Arc<WeatherService>,
    running: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(service: WeatherService, theme: ThemeMode, config_path: Option<PathBuf>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            view: ViewState::Idle,
            generation: 0,
            search_active: false,
            theme_mode: theme,
            config_path,
            search: SearchBar::new(),
            display: DisplayPanel::new(),
            map: MapPanel::new(),
            service: Arc::new(service),
            running: true,
            action_tx,
            action_rx,
        }
    }

    /// Queue a lookup to run as soon as the event loop starts.
    pub fn queue_lookup(&mut self, place: String) -> Result<()> {
        let place = place.trim().to_owned();
        if !place.is_empty() {
            self.action_tx.send(Action::Lookup(place))?;
        }
        Ok(())
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            // Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(action.clone())?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        events.stop();
        info!("event loop ended");
        Ok(())
    }

    /// Map a key event to an action. While the search bar is focused it
    /// sees every key except Ctrl+C.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        if self.search_active {
            return self.search.handle_key_event(key);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(Some(Action::Quit)),
            KeyCode::Char('/') | KeyCode::Char('e') => Ok(Some(Action::OpenSearch)),
            KeyCode::Char('t') => Ok(Some(Action::ToggleTheme)),
            _ => Ok(None),
        }
    }

    /// Process a single action, updating app state.
    fn process_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(_, _) => {}

            Action::OpenSearch => {
                self.search_active = true;
                self.search.set_focused(true);
            }

            Action::CloseSearch => {
                self.search_active = false;
                self.search.set_focused(false);
            }

            Action::Lookup(place) => {
                self.search_active = false;
                self.search.set_focused(false);
                self.start_lookup(place);
            }

            Action::LookupLoaded { generation, reading } => {
                if generation == self.generation {
                    self.map.show_location(reading.lat, reading.lon);
                    self.set_view(ViewState::Success(reading));
                } else {
                    debug!(generation, current = self.generation, "dropping stale lookup result");
                }
            }

            Action::LookupFailed { generation, detail } => {
                if generation == self.generation {
                    error!(%detail, "lookup failed");
                    self.set_view(ViewState::Error(ERROR_BANNER.to_owned()));
                } else {
                    debug!(generation, current = self.generation, "dropping stale lookup failure");
                }
            }

            Action::ToggleTheme => {
                self.theme_mode = self.theme_mode.toggled();
                self.persist_theme();
                // The base layer only needs re-tinting once it exists.
                if self.map.has_session() {
                    self.map.refresh_tiles();
                }
            }

            Action::Tick | Action::Render => {
                self.display.update(&action)?;
            }
        }

        Ok(())
    }

    /// Kick off an async lookup. The result comes back through the
    /// action channel tagged with this submission's generation.
    fn start_lookup(&mut self, place: String) {
        self.generation += 1;
        let generation = self.generation;
        self.set_view(ViewState::Loading);

        let service = Arc::clone(&self.service);
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match service.lookup(&place).await {
                Ok(reading) => Action::LookupLoaded { generation, reading },
                Err(e) => Action::LookupFailed {
                    generation,
                    detail: e.log_detail().to_owned(),
                },
            };
            // Receiver gone means the app is shutting down.
            let _ = tx.send(action);
        });
    }

    fn set_view(&mut self, view: ViewState) {
        self.display.set_view(view.clone());
        self.view = view;
    }

    /// Write the theme choice back to the config file. Persistence
    /// failures are logged, never surfaced to the UI.
    fn persist_theme(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = skycast_config::save_theme(self.theme_mode, path) {
            error!(error = %e, "failed to persist theme");
        }
    }

    /// Render the full application frame.
    fn render(&self, frame: &mut Frame) {
        let theme = Theme::for_mode(self.theme_mode);
        let area = frame.area();

        let layout = Layout::vertical([
            Constraint::Length(3), // Search bar
            Constraint::Min(8),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.search.render(frame, layout[0], theme);

        let main = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(layout[1]);
        self.display.render(frame, main[0], theme);
        self.map.render(frame, main[1], theme);

        self.render_status_bar(frame, layout[2], theme);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mode = match self.theme_mode {
            ThemeMode::Light => "☀ light",
            ThemeMode::Dark => "☾ dark",
        };

        let line = if self.search_active {
            Line::from(vec![
                Span::styled(" Enter ", theme.key_hint_key()),
                Span::styled("search  ", theme.key_hint()),
                Span::styled("Esc ", theme.key_hint_key()),
                Span::styled("cancel", theme.key_hint()),
            ])
        } else {
            let mut spans = vec![
                Span::styled(" / ", theme.key_hint_key()),
                Span::styled("search  ", theme.key_hint()),
                Span::styled("t ", theme.key_hint_key()),
                Span::styled(format!("theme ({mode})  "), theme.key_hint()),
                Span::styled("q ", theme.key_hint_key()),
                Span::styled("quit", theme.key_hint()),
            ];
            if let Some(reading) = self.view.reading() {
                spans.push(Span::styled(
                    format!("  │ {}", reading.place_label()),
                    theme.muted_text(),
                ));
            }
            Line::from(spans)
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}
