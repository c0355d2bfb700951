use crate::app::state::*;
use crate::i18n::Language;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.translations();
    let mut parts: Vec<Span> = Vec::new();

    // App title and language
    parts.push(Span::styled(
        format!(" {} ", t.app_title),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));
    if state.language_toggle_enabled() {
        parts.push(Span::styled(format!("{}: ", t.language_label), Theme::status_bar()));
        for lang in Language::all() {
            let style = if lang == state.view.language {
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Theme::status_bar()
            };
            parts.push(Span::styled(format!("{} ", lang.name()), style));
        }
    }

    // Layer, zoom, center or search progress
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Focus indicator and key help, right aligned
    let focus_name = match state.focus {
        FocusPanel::Search => t.focus_search,
        FocusPanel::Map => t.focus_map,
        FocusPanel::Controls => t.focus_controls,
    };
    let right = format!(" {}  [{}] ", t.help_hint, focus_name);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        right,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
