use crate::app::state::{AppState, NoticeKind};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(notice) = &state.notice else {
        return;
    };
    let t = state.translations();

    let area = frame.area();

    // Center the popup: 50% width, fixed height, min 40 columns
    let popup_w = (area.width / 2).max(40).min(area.width.saturating_sub(4));
    let popup_h = 7u16.min(area.height);
    let popup_x = area.width.saturating_sub(popup_w) / 2;
    let popup_y = area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    // Clear background
    frame.render_widget(Clear, popup_area);

    let headline = match notice.kind {
        NoticeKind::NotFound => format!("{} : « {} »", t.not_found, notice.detail),
        NoticeKind::SearchError => t.search_error.to_string(),
    };
    let mut lines = vec![Line::from(Span::styled(headline, Theme::value()))];
    if notice.kind == NoticeKind::SearchError {
        lines.push(Line::from(Span::styled(notice.detail.clone(), Theme::label())));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(t.notice_dismiss, Theme::timestamp())));

    let block = Block::default()
        .title(format!(" {} ", t.notice_title))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::notice_border());

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
