use crate::app::state::*;
use crate::geo::{self, Coordinate};
use crate::i18n::Translations;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.translations();
    let block = Block::default()
        .title(format!(" {} ", t.info_title))
        .title_style(Theme::border())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let lines = info_lines(t, &state.view);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Selected location wins over the clicked one; nothing when neither is set.
fn info_lines(t: &Translations, view: &ViewState) -> Vec<Line<'static>> {
    let (title, position, label) = match (&view.selected_location, &view.clicked_location) {
        (Some(selected), _) => (t.selected_location, selected.position, selected.label.clone()),
        (None, Some(clicked)) => (t.clicked_location, *clicked, None),
        (None, None) => return Vec::new(),
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", label.unwrap_or_else(|| title.to_string())),
        Theme::value(),
    ))];
    lines.extend(coordinate_lines(t, &position));
    lines
}

fn coordinate_lines(t: &Translations, position: &Coordinate) -> [Line<'static>; 2] {
    let (lat, lng) = geo::format_precise(position);
    [
        Line::from(vec![
            Span::styled(format!(" {}: ", t.latitude), Theme::label()),
            Span::raw(lat),
        ]),
        Line::from(vec![
            Span::styled(format!(" {}: ", t.longitude), Theme::label()),
            Span::raw(lng),
        ]),
    ]
}
