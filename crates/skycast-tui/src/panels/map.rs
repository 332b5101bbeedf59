//! Location map — world-map canvas with a single marker.
//!
//! The canvas session is created lazily on the first successful lookup
//! and reused afterwards; exactly one marker exists at a time. A theme
//! flip re-tints the existing session rather than rebuilding it.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution, Points};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::component::Component;
use crate::theme::Theme;

// Viewport half-spans around the marker, degrees.
const LON_SPAN: f64 = 40.0;
const LAT_SPAN: f64 = 20.0;

/// Live canvas state. Exists only after the first successful lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSession {
    /// Viewport center, (lat, lon).
    center: (f64, f64),
    /// The single marker, (lat, lon).
    marker: (f64, f64),
    /// Bumped whenever the base layer is re-tinted for a theme flip.
    tile_epoch: u64,
}

/// Right-hand map panel.
pub struct MapPanel {
    session: Option<MapSession>,
}

impl MapPanel {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Center the viewport on a location and move the marker there,
    /// creating the session on first use.
    pub fn show_location(&mut self, lat: f64, lon: f64) {
        match &mut self.session {
            Some(session) => {
                session.center = (lat, lon);
                session.marker = (lat, lon);
            }
            None => {
                self.session = Some(MapSession {
                    center: (lat, lon),
                    marker: (lat, lon),
                    tile_epoch: 0,
                });
            }
        }
    }

    /// Re-tint the base layer after a theme flip. Does nothing until a
    /// session exists.
    pub fn refresh_tiles(&mut self) {
        if let Some(session) = &mut self.session {
            session.tile_epoch += 1;
        }
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    #[cfg(test)]
    pub fn session(&self) -> Option<&MapSession> {
        self.session.as_ref()
    }
}

#[cfg(test)]
impl MapSession {
    pub fn marker(&self) -> (f64, f64) {
        self.marker
    }

    pub fn tile_epoch(&self) -> u64 {
        self.tile_epoch
    }
}

impl Component for MapPanel {
    fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Map ")
            .title_style(theme.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.panel_border(false));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(session) = &self.session else {
            frame.render_widget(
                Paragraph::new(Span::styled(" no location yet", theme.muted_text())),
                inner,
            );
            return;
        };

        let (lat, lon) = session.center;
        let canvas = Canvas::default()
            .x_bounds([lon - LON_SPAN, lon + LON_SPAN])
            .y_bounds([lat - LAT_SPAN, lat + LAT_SPAN])
            .paint(|ctx| {
                ctx.draw(&Map {
                    color: theme.map_land,
                    resolution: MapResolution::High,
                });

                let (m_lat, m_lon) = session.marker;
                ctx.draw(&Points {
                    coords: &[(m_lon, m_lat)],
                    color: theme.map_marker,
                });
                ctx.print(
                    m_lon,
                    m_lat,
                    Span::styled("⌖", Style::default().fg(theme.map_marker)),
                );
            });

        frame.render_widget(canvas, inner);
    }
}
