use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.translations();
    let count = state.view.markers().count();
    let block = Block::default()
        .title(format!(" {} ({}) ", t.markers_title, count))
        .title_style(Theme::border())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let items: Vec<ListItem> = if count == 0 {
        vec![ListItem::new(Span::styled(
            format!(" {}", t.no_markers),
            Theme::placeholder(),
        ))]
    } else {
        state
            .view
            .markers()
            .map(|m| {
                let (glyph, style) = match m.kind {
                    MarkerKind::Search => ("●", Theme::search_marker()),
                    MarkerKind::Click => ("✚", Theme::click_marker()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", m.created_at.format(&state.config.ui.timestamp_format)),
                        Theme::timestamp(),
                    ),
                    Span::styled(format!("{} ", glyph), style),
                    Span::raw(m.label.clone()),
                ]))
            })
            .collect()
    };

    frame.render_widget(List::new(items).block(block), area);
}
