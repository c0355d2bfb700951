use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
/// Prompt chevron "❯ " is 2 columns wide.
const PROMPT_WIDTH: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.translations();
    let focused = state.focus == FocusPanel::Search;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let title = if state.search_in_flight {
        let frame_idx = (state.tick_count / 3) as usize % SPINNER.len();
        format!(" {} {} ", SPINNER[frame_idx], t.searching)
    } else {
        format!(" {} ", t.search_title)
    };

    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input_text = state.input.text.as_str();
    let text_style = if state.search_in_flight {
        Theme::input_disabled()
    } else {
        Theme::input_text()
    };

    let text_width = inner.width.saturating_sub(PROMPT_WIDTH) as usize;
    let (start, cursor_col) = scroll_window(input_text, state.input.cursor, text_width);

    let body = if input_text.is_empty() && !focused {
        Span::styled(t.search_placeholder, Theme::placeholder())
    } else {
        Span::styled(&input_text[start..], text_style)
    };
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        body,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if focused && !state.search_in_flight && inner.width > 0 {
        let col = u16::try_from(cursor_col).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(PROMPT_WIDTH).saturating_add(col);
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

/// Scrolls `text` so the cursor fits in `width` columns. Returns the byte
/// offset of the first visible char and the cursor column relative to it.
fn scroll_window(text: &str, cursor: usize, width: usize) -> (usize, usize) {
    let before = &text[..cursor];
    let mut col = before.width();
    let mut start = 0;
    for (i, c) in before.char_indices() {
        if col < width {
            break;
        }
        start = i + c.len_utf8();
        col -= c.width().unwrap_or(0);
    }
    (start, col)
}
