use crate::app::viewport::MapViewport;
use crate::config::{AppConfig, Variant};
use crate::geo::{self, Coordinate, MAX_MERCATOR_LAT};
use crate::i18n::{self, Language, Translations};
use crate::tiles::{self, LayerId, TileLayer};
use crate::ui::layout;
use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use std::collections::VecDeque;
use tracing::{debug, info};

pub type MarkerId = u64;

/// Metropolitan France, the initial and "center map" view.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(46.603354, 1.888334);
pub const DEFAULT_ZOOM: u8 = 6;
pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;
pub const MAX_SEARCH_MARKERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Search,
    Click,
}

#[derive(Debug, Clone)]
pub struct Marker {
    pub id: MarkerId,
    pub position: Coordinate,
    pub label: String,
    pub kind: MarkerKind,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLocation {
    pub position: Coordinate,
    pub label: Option<String>,
}

/// Everything the map and its panels render from. Mutated only through the
/// `on_*` transitions and the map navigation methods.
#[derive(Debug)]
pub struct ViewState {
    pub center: Coordinate,
    pub zoom: u8,
    pub active_layer: TileLayer,
    /// Most recent first, at most [`MAX_SEARCH_MARKERS`].
    pub search_markers: VecDeque<Marker>,
    /// Bilingual variant only; the baseline variant files clicks into
    /// `search_markers`.
    pub click_marker: Option<Marker>,
    pub selected_location: Option<SelectedLocation>,
    pub clicked_location: Option<Coordinate>,
    pub language: Language,
    /// Identity of the current map widget instance. Bumped whenever the tile
    /// source changes for a reason other than picking a layer.
    pub map_generation: u64,
    variant: Variant,
    next_marker_id: MarkerId,
}

impl ViewState {
    pub fn new(variant: Variant, language: Language) -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            active_layer: tiles::layer(LayerId::Street, language),
            search_markers: VecDeque::with_capacity(MAX_SEARCH_MARKERS + 1),
            click_marker: None,
            selected_location: None,
            clicked_location: None,
            language,
            map_generation: 0,
            variant,
            next_marker_id: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn search_zoom(&self) -> u8 {
        match self.variant {
            Variant::Bilingual => 14,
            Variant::Baseline => 12,
        }
    }

    fn new_marker(&mut self, position: Coordinate, label: String, kind: MarkerKind) -> Marker {
        let id = self.next_marker_id;
        self.next_marker_id += 1;
        Marker {
            id,
            position,
            label,
            kind,
            created_at: Local::now(),
        }
    }

    fn push_capped(&mut self, marker: Marker) {
        self.search_markers.push_front(marker);
        self.search_markers.truncate(MAX_SEARCH_MARKERS);
    }

    pub fn on_search_success(&mut self, position: Coordinate, label: Option<String>) {
        let label = label.filter(|l| !l.trim().is_empty());
        let marker_label = label
            .clone()
            .unwrap_or_else(|| format!("search: {}", geo::format_short(&position)));

        self.center = position;
        self.zoom = self.search_zoom();
        self.selected_location = Some(SelectedLocation { position, label });
        let marker = self.new_marker(position, marker_label, MarkerKind::Search);
        self.push_capped(marker);
    }

    pub fn on_map_click(&mut self, position: Coordinate) {
        self.clicked_location = Some(position);
        let label = format!("click: {}", geo::format_short(&position));
        let marker = self.new_marker(position, label, MarkerKind::Click);
        match self.variant {
            Variant::Bilingual => self.click_marker = Some(marker),
            Variant::Baseline => self.push_capped(marker),
        }
    }

    pub fn on_layer_change(&mut self, layer: TileLayer) {
        self.active_layer = layer;
    }

    /// Returns false when the variant has no language toggle.
    pub fn on_language_change(&mut self, language: Language) -> bool {
        if self.variant != Variant::Bilingual {
            return false;
        }
        self.language = language;
        self.active_layer = tiles::layer(self.active_layer.id, language);
        self.map_generation += 1;
        true
    }

    pub fn on_center_map(&mut self) {
        self.center = DEFAULT_CENTER;
        self.zoom = DEFAULT_ZOOM;
        self.selected_location = None;
        self.clicked_location = None;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Moves the displayed center by a fraction of the visible span in
    /// `area`. Positive `dx` pans east, positive `dy` pans north. Panning
    /// stops at the antimeridian.
    pub fn pan(&mut self, area: Rect, dx: f64, dy: f64) {
        let viewport = MapViewport::new(area, self.center, self.zoom);
        let from = viewport.center();
        let lat = (from.lat + dy * viewport.lat_span()).clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        let lng = from.lng + dx * viewport.lng_span();
        self.center = MapViewport::new(area, Coordinate::new(lat, lng), self.zoom).center();
    }

    /// Markers in draw order: search (and baseline click) markers, then the
    /// bilingual click marker.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.search_markers.iter().chain(self.click_marker.iter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    NotFound,
    SearchError,
}

/// A blocking message; while shown it captures all input.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub detail: String,
}

#[derive(Debug)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            history: Vec::new(),
            history_index: None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Trimmed query for submission. The text stays in the box so a failed
    /// search can be edited and retried.
    pub fn submit(&mut self) -> Option<String> {
        let query = self.text.trim().to_string();
        self.history_index = None;
        if query.is_empty() {
            return None;
        }
        if self.history.last() != Some(&query) {
            self.history.push(query.clone());
        }
        Some(query)
    }

    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) if i > 0 => i - 1,
            Some(_) => return,
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                let idx = i + 1;
                self.history_index = Some(idx);
                self.text = self.history[idx].clone();
                self.cursor = self.text.len();
            }
            Some(_) => self.clear(),
            None => {}
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Search,
    Map,
    Controls,
}

pub struct AppState {
    pub config: AppConfig,
    pub view: ViewState,
    pub input: InputState,
    pub focus: FocusPanel,
    pub notice: Option<Notice>,
    /// Set while a geocoding request is outstanding; submits are ignored.
    pub search_in_flight: bool,
    /// Cursor row in the layer controls.
    pub controls_selected: usize,
    pub terminal_area: Rect,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        // The baseline variant has no language toggle and is French only
        let language = match config.ui.variant {
            Variant::Bilingual => config.ui.language,
            Variant::Baseline => Language::Fr,
        };
        let view = ViewState::new(config.ui.variant, language);
        Self {
            config,
            view,
            input: InputState::new(),
            focus: FocusPanel::Search,
            notice: None,
            search_in_flight: false,
            controls_selected: 0,
            terminal_area: Rect::new(0, 0, 120, 40),
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn translations(&self) -> &'static Translations {
        i18n::translations(self.view.language)
    }

    pub fn language_toggle_enabled(&self) -> bool {
        self.view.variant() == Variant::Bilingual
    }

    /// Inner area of the map pane for the current terminal size.
    pub fn map_area(&self) -> Rect {
        layout::inner(layout::compute_layout(self.terminal_area).map)
    }

    pub fn map_viewport(&self) -> MapViewport {
        MapViewport::new(self.map_area(), self.view.center, self.view.zoom)
    }

    pub fn show_notice(&mut self, kind: NoticeKind, detail: String) {
        info!(?kind, %detail, "showing notice");
        self.notice = Some(Notice { kind, detail });
        self.dirty = true;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.dirty = true;
    }

    /// URL of the tile under the map center for the active source.
    pub fn center_tile_url(&self) -> String {
        let (x, y) = tiles::tile_coords(&self.view.center, self.view.zoom);
        self.view.active_layer.tile_url(self.view.zoom, x, y)
    }

    pub fn select_layer(&mut self, id: LayerId) {
        self.view.on_layer_change(tiles::layer(id, self.view.language));
        debug!(?id, center_tile = %self.center_tile_url(), "layer selected");
        self.controls_selected = id.index();
        self.dirty = true;
    }

    pub fn toggle_language(&mut self) {
        let next = self.view.language.toggle();
        if self.view.on_language_change(next) {
            info!(
                language = next.code(),
                generation = self.view.map_generation,
                center_tile = %self.center_tile_url(),
                "language switched, map reinitialised"
            );
            self.dirty = true;
        }
    }

    pub fn center_map(&mut self) {
        self.view.on_center_map();
        self.dirty = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPanel::Search => FocusPanel::Map,
            FocusPanel::Map => FocusPanel::Controls,
            FocusPanel::Controls => FocusPanel::Search,
        };
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let t = self.translations();
        if self.search_in_flight {
            let dots = ".".repeat((self.tick_count / 5 % 4) as usize);
            return format!("{}{}", t.searching, dots);
        }
        format!(
            "{} · {} {} · {}",
            self.view.active_layer.display_name,
            t.zoom_label,
            self.view.zoom,
            geo::format_short(&self.view.center),
        )
    }
}
