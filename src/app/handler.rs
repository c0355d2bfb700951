use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::geocode::{GeocodeError, Place};
use crate::tiles::LayerId;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

/// Fraction of the visible span moved by one arrow key press.
const PAN_STEP: f64 = 0.25;

/// Row of the "center map" entry inside the controls pane.
const CENTER_ROW: u16 = LayerId::ALL.len() as u16 + 1;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::GeocodeFinished { query, result } => {
            handle_geocode_result(state, query, result);
            vec![]
        }
        AppEvent::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            // Animate the search indicator
            if state.search_in_flight {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_geocode_result(state: &mut AppState, query: String, result: Result<Place, GeocodeError>) {
    state.search_in_flight = false;
    state.dirty = true;
    match result {
        Ok(place) => {
            info!(%query, name = %place.name, "search resolved");
            let label = Some(place.name).filter(|n| !n.is_empty());
            state.view.on_search_success(place.position, label);
        }
        Err(GeocodeError::NotFound) => {
            state.show_notice(NoticeKind::NotFound, query);
        }
        Err(GeocodeError::Search(reason)) => {
            state.show_notice(NoticeKind::SearchError, reason);
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.terminal_area = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The notice is modal until dismissed
    if state.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            state.dismiss_notice();
        }
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::F(2) => {
            let next = state.view.active_layer.id.next();
            state.select_layer(next);
            return vec![];
        }
        KeyCode::F(4) => {
            state.toggle_language();
            return vec![];
        }
        KeyCode::F(5) => {
            state.center_map();
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Search => handle_search_key(state, key),
        FocusPanel::Map => handle_map_key(state, key),
        FocusPanel::Controls => handle_controls_key(state, key),
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('w') => state.input.delete_word_back(),
            KeyCode::Char('u') => state.input.clear(),
            KeyCode::Char('a') => state.input.move_home(),
            KeyCode::Char('e') => state.input.move_end(),
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Enter => return submit_search(state),
        KeyCode::Char(c) => state.input.insert_char(c),
        KeyCode::Backspace => state.input.delete_back(),
        KeyCode::Delete => state.input.delete_forward(),
        KeyCode::Left => state.input.move_left(),
        KeyCode::Right => state.input.move_right(),
        KeyCode::Home => state.input.move_home(),
        KeyCode::End => state.input.move_end(),
        KeyCode::Up => state.input.history_up(),
        KeyCode::Down => state.input.history_down(),
        KeyCode::Esc => state.input.clear(),
        _ => {}
    }
    vec![]
}

fn submit_search(state: &mut AppState) -> Vec<Action> {
    // Only one request at a time; the box is disabled until it resolves
    if state.search_in_flight {
        debug!("search already in flight, submit ignored");
        return vec![];
    }
    let Some(query) = state.input.submit() else {
        return vec![];
    };
    state.search_in_flight = true;
    vec![Action::Geocode {
        query,
        language: state.view.language,
    }]
}

fn handle_map_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let area = state.map_area();
    match key.code {
        KeyCode::Left => state.view.pan(area, -PAN_STEP, 0.0),
        KeyCode::Right => state.view.pan(area, PAN_STEP, 0.0),
        KeyCode::Up => state.view.pan(area, 0.0, PAN_STEP),
        KeyCode::Down => state.view.pan(area, 0.0, -PAN_STEP),
        KeyCode::Char('+') | KeyCode::Char('=') => state.view.zoom_in(),
        KeyCode::Char('-') => state.view.zoom_out(),
        KeyCode::Char('c') => state.center_map(),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_controls_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Rows: the three layers, then "center map"
    let rows = LayerId::ALL.len() + 1;
    match key.code {
        KeyCode::Up => {
            state.controls_selected = state.controls_selected.saturating_sub(1);
        }
        KeyCode::Down => {
            state.controls_selected = (state.controls_selected + 1).min(rows - 1);
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate_control(state, state.controls_selected),
        KeyCode::Char(c @ '1'..='3') => {
            let idx = c as usize - '1' as usize;
            activate_control(state, idx);
        }
        KeyCode::Char('c') => state.center_map(),
        KeyCode::Char('q') => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn activate_control(state: &mut AppState, row: usize) {
    match LayerId::ALL.get(row) {
        Some(&id) => state.select_layer(id),
        None => {
            state.controls_selected = row;
            state.center_map();
        }
    }
}

/// Bridges terminal mouse input to the map and panels. Every left click
/// inside the map canvas becomes exactly one `on_map_click`.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if state.notice.is_some() {
        return vec![];
    }
    let position = Position::new(mouse.column, mouse.row);
    let app_layout = layout::compute_layout(state.terminal_area);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(coord) = state.map_viewport().coordinate_at(mouse.column, mouse.row) {
                debug!(lat = coord.lat, lng = coord.lng, "map click");
                state.focus = FocusPanel::Map;
                state.view.on_map_click(coord);
            } else if app_layout.search_box.contains(position) {
                state.focus = FocusPanel::Search;
            } else if app_layout.controls.contains(position) {
                state.focus = FocusPanel::Controls;
                let inner = layout::inner(app_layout.controls);
                if inner.contains(position) {
                    let row = mouse.row - inner.y;
                    if (row as usize) < LayerId::ALL.len() || row == CENTER_ROW {
                        activate_control(state, (row as usize).min(LayerId::ALL.len()));
                    }
                }
            }
        }
        MouseEventKind::ScrollUp if app_layout.map.contains(position) => state.view.zoom_in(),
        MouseEventKind::ScrollDown if app_layout.map.contains(position) => state.view.zoom_out(),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, Variant};
    use crate::geo::Coordinate;
    use crate::i18n::Language;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, key(KeyCode::Char(c)));
        }
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn paris() -> Place {
        Place {
            position: Coordinate::new(48.8566, 2.3522),
            name: "Paris, France".into(),
        }
    }

    #[test]
    fn test_submit_emits_single_geocode() {
        let mut s = state();
        type_text(&mut s, "Paris");
        let actions = handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::Geocode {
                query: "Paris".into(),
                language: Language::Fr
            }]
        );
        assert!(s.search_in_flight);

        // Disabled while the request is outstanding
        let again = handle_event(&mut s, key(KeyCode::Enter));
        assert!(again.is_empty());
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut s = state();
        type_text(&mut s, "   ");
        assert!(handle_event(&mut s, key(KeyCode::Enter)).is_empty());
        assert!(!s.search_in_flight);
    }

    #[test]
    fn test_search_success_updates_view() {
        let mut s = state();
        s.search_in_flight = true;
        handle_event(
            &mut s,
            AppEvent::GeocodeFinished {
                query: "Paris".into(),
                result: Ok(paris()),
            },
        );
        assert!(!s.search_in_flight);
        assert_eq!(s.view.center, Coordinate::new(48.8566, 2.3522));
        assert_eq!(s.view.zoom, 14);
        assert_eq!(s.view.search_markers.len(), 1);
        assert_eq!(s.view.search_markers[0].label, "Paris, France");
        assert!(s.notice.is_none());
    }

    #[test]
    fn test_not_found_shows_notice_without_state_change() {
        let mut s = state();
        type_text(&mut s, "Atlantis");
        handle_event(&mut s, key(KeyCode::Enter));
        handle_event(
            &mut s,
            AppEvent::GeocodeFinished {
                query: "Atlantis".into(),
                result: Err(GeocodeError::NotFound),
            },
        );
        assert!(!s.search_in_flight);
        let notice = s.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::NotFound);
        assert_eq!(s.view.center, DEFAULT_CENTER);
        assert_eq!(s.view.zoom, DEFAULT_ZOOM);
        assert!(s.view.search_markers.is_empty());
        assert!(s.view.selected_location.is_none());
        // Input kept for retry
        assert_eq!(s.input.text, "Atlantis");
    }

    #[test]
    fn test_search_error_notice() {
        let mut s = state();
        s.search_in_flight = true;
        handle_event(
            &mut s,
            AppEvent::GeocodeFinished {
                query: "Paris".into(),
                result: Err(GeocodeError::Search("connection refused".into())),
            },
        );
        let notice = s.notice.as_ref().unwrap();
        assert_eq!(notice.kind, NoticeKind::SearchError);
        assert_eq!(notice.detail, "connection refused");
        assert!(s.view.search_markers.is_empty());
    }

    #[test]
    fn test_notice_is_modal() {
        let mut s = state();
        s.show_notice(NoticeKind::NotFound, "x".into());
        type_text(&mut s, "abc");
        handle_event(&mut s, key(KeyCode::F(2)));
        assert!(s.input.text.is_empty());
        assert_eq!(s.view.active_layer.id, LayerId::Street);
        handle_event(&mut s, key(KeyCode::Esc));
        assert!(s.notice.is_none());
    }

    #[test]
    fn test_click_in_map_drops_marker() {
        let mut s = state();
        let map = s.map_area();
        let (col, row) = (map.x + map.width / 2, map.y + map.height / 2);
        handle_event(&mut s, click(col, row));
        assert_eq!(s.focus, FocusPanel::Map);
        let clicked = s.view.clicked_location.unwrap();
        assert!((clicked.lat - DEFAULT_CENTER.lat).abs() < 1.0);
        assert!((clicked.lng - DEFAULT_CENTER.lng).abs() < 1.0);
        assert!(s.view.click_marker.is_some());

        // One marker per click, replaced in the bilingual variant
        handle_event(&mut s, click(col + 2, row));
        assert_eq!(s.view.markers().count(), 1);
    }

    #[test]
    fn test_click_outside_map_is_not_a_map_click() {
        let mut s = state();
        let search = layout::compute_layout(s.terminal_area).search_box;
        s.focus = FocusPanel::Map;
        handle_event(&mut s, click(search.x + 2, search.y + 1));
        assert!(s.view.clicked_location.is_none());
        assert_eq!(s.focus, FocusPanel::Search);
    }

    #[test]
    fn test_layer_switch_keeps_view() {
        let mut s = state();
        s.view.on_search_success(Coordinate::new(1.0, 2.0), None);
        let (center, zoom) = (s.view.center, s.view.zoom);
        handle_event(&mut s, key(KeyCode::F(2)));
        assert_eq!(s.view.active_layer.id, LayerId::Satellite);
        assert_eq!(s.view.center, center);
        assert_eq!(s.view.zoom, zoom);
        assert_eq!(s.view.search_markers.len(), 1);
    }

    #[test]
    fn test_controls_select_by_number_and_center() {
        let mut s = state();
        s.focus = FocusPanel::Controls;
        handle_event(&mut s, key(KeyCode::Char('3')));
        assert_eq!(s.view.active_layer.id, LayerId::Terrain);

        s.view.on_search_success(Coordinate::new(1.0, 2.0), None);
        for _ in 0..5 {
            handle_event(&mut s, key(KeyCode::Down));
        }
        assert_eq!(s.controls_selected, 3);
        handle_event(&mut s, key(KeyCode::Enter));
        assert_eq!(s.view.center, DEFAULT_CENTER);
        assert_eq!(s.view.search_markers.len(), 1);
    }

    #[test]
    fn test_language_toggle_bumps_generation() {
        let mut s = state();
        let before = s.translations().search_title;
        handle_event(&mut s, key(KeyCode::F(4)));
        assert_eq!(s.view.language, Language::En);
        assert_ne!(s.translations().search_title, before);
        assert_eq!(s.view.map_generation, 1);
        handle_event(&mut s, key(KeyCode::F(4)));
        assert_eq!(s.view.map_generation, 2);
    }

    #[test]
    fn test_language_toggle_ignored_in_baseline() {
        let mut cfg = AppConfig::default();
        cfg.ui.variant = Variant::Baseline;
        let mut s = AppState::new(cfg);
        handle_event(&mut s, key(KeyCode::F(4)));
        assert_eq!(s.view.language, Language::Fr);
        assert_eq!(s.view.map_generation, 0);
    }

    #[test]
    fn test_map_keys_zoom_and_pan() {
        let mut s = state();
        s.focus = FocusPanel::Map;
        handle_event(&mut s, key(KeyCode::Char('+')));
        assert_eq!(s.view.zoom, DEFAULT_ZOOM + 1);
        handle_event(&mut s, key(KeyCode::Right));
        assert!(s.view.center.lng > DEFAULT_CENTER.lng);
        handle_event(&mut s, key(KeyCode::Char('c')));
        assert_eq!(s.view.center, DEFAULT_CENTER);
        assert_eq!(s.view.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn test_resize_updates_map_area() {
        let mut s = state();
        handle_event(&mut s, AppEvent::Terminal(CEvent::Resize(200, 60)));
        assert_eq!(s.terminal_area, Rect::new(0, 0, 200, 60));
        assert!(s.map_area().width > 100);
    }

    #[test]
    fn test_ctrl_c_quits_even_with_notice() {
        let mut s = state();
        s.show_notice(NoticeKind::SearchError, "x".into());
        let actions = handle_event(
            &mut s,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }
}
