//! The map pane: world coastlines on a braille canvas with marker overlays.
//!
//! The canvas keeps no state between frames, so a fresh widget is built
//! every render. Bounds come from [`MapViewport`], the same projection the
//! click bridge inverts.

use crate::app::state::*;
use crate::app::viewport::MapViewport;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::symbols;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Map, MapResolution};
use ratatui::widgets::{Block, Borders};

/// Longest marker label drawn next to its glyph.
const MAX_LABEL_CHARS: usize = 24;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.translations();
    let view = &state.view;
    let focused = state.focus == FocusPanel::Map;

    let block = Block::default()
        .title(format!(" {} · {} ", t.map_title, view.active_layer.display_name))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .title_bottom(Line::from(format!(" {} ", view.active_layer.attribution)).right_aligned())
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let viewport = MapViewport::new(block.inner(area), view.center, view.zoom);
    let [west, east] = viewport.x_bounds();
    let [south, north] = viewport.y_bounds();
    let step = graticule_step(viewport.lng_span());
    let coastline = Theme::coastline(view.active_layer.id);

    let overlays: Vec<(f64, f64, Span<'static>)> = view
        .markers()
        .map(|m| (m.position.lng, m.position.lat, marker_span(m)))
        .collect();

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([west, east])
        .y_bounds([south, north])
        .paint(move |ctx| {
            let mut lng = (west / step).ceil() * step;
            while lng <= east {
                ctx.draw(&CanvasLine::new(lng, south, lng, north, Theme::graticule()));
                lng += step;
            }
            let mut lat = (south / step).ceil() * step;
            while lat <= north {
                ctx.draw(&CanvasLine::new(west, lat, east, lat, Theme::graticule()));
                lat += step;
            }
            ctx.layer();
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: coastline,
            });
            ctx.layer();
            for (x, y, span) in &overlays {
                ctx.print(*x, *y, span.clone());
            }
        });

    frame.render_widget(canvas, area);
}

fn marker_span(marker: &Marker) -> Span<'static> {
    let style = match marker.kind {
        MarkerKind::Search => Theme::search_marker(),
        MarkerKind::Click => Theme::click_marker(),
    };
    // Place names come back as "City, Region, Country"; the first part is enough
    let short: String = marker
        .label
        .split(',')
        .next()
        .unwrap_or_default()
        .chars()
        .take(MAX_LABEL_CHARS)
        .collect();
    let text = match marker.kind {
        MarkerKind::Search => format!("● {}", short),
        MarkerKind::Click => "✚".to_string(),
    };
    Span::styled(text, style)
}

/// Graticule spacing giving a handful of lines across the visible span.
fn graticule_step(span: f64) -> f64 {
    const STEPS: [f64; 9] = [0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 10.0, 30.0, 60.0];
    STEPS
        .iter()
        .copied()
        .find(|s| span / s <= 8.0)
        .unwrap_or(90.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graticule_step_scales_with_zoom() {
        assert_eq!(graticule_step(720.0), 90.0);
        assert_eq!(graticule_step(360.0), 60.0);
        assert_eq!(graticule_step(11.25), 5.0);
        assert_eq!(graticule_step(0.04), 0.01);
    }
}
