pub mod layout;
mod info_panel;
mod map_controls;
mod map_view;
mod marker_list;
mod notice;
mod search_box;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    search_box::render(frame, app_layout.search_box, state);
    map_view::render(frame, app_layout.map, state);
    map_controls::render(frame, app_layout.controls, state);
    info_panel::render(frame, app_layout.info_panel, state);
    marker_list::render(frame, app_layout.marker_list, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Modal last so it draws over everything
    notice::render(frame, state);
}
