use crate::app::state::*;
use crate::tiles::{self, LayerId};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = state.translations();
    let focused = state.focus == FocusPanel::Controls;
    let active = state.view.active_layer.id;

    let block = Block::default()
        .title(format!(" {} ", t.controls_title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
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

    let mut items: Vec<ListItem> = tiles::layers(state.view.language)
        .iter()
        .enumerate()
        .map(|(i, layer)| {
            let is_active = layer.id == active;
            let bullet = if is_active { "●" } else { "○" };
            let style = if is_active {
                Theme::layer_active()
            } else {
                Theme::layer_normal()
            };
            let item = ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Theme::timestamp()),
                Span::styled(format!("{} {}", bullet, layer.display_name), style),
            ]));
            highlight(item, focused && state.controls_selected == i)
        })
        .collect();

    items.push(ListItem::new(""));
    let center = ListItem::new(Line::from(vec![
        Span::styled(" F5 ", Theme::timestamp()),
        Span::styled(format!("⌖ {}", t.center_map), Theme::layer_normal()),
    ]));
    items.push(highlight(
        center,
        focused && state.controls_selected == LayerId::ALL.len(),
    ));

    frame.render_widget(List::new(items).block(block), area);
}

fn highlight(item: ListItem<'_>, selected: bool) -> ListItem<'_> {
    if selected {
        item.style(Theme::selected_row())
    } else {
        item
    }
}
