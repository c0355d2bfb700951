//! UI translation tables.
//!
//! Every user-facing string goes through a [`Translations`] table selected by
//! the active [`Language`]. Tables are static; switching language swaps the
//! reference, nothing is allocated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
}

impl Language {
    pub fn all() -> [Language; 2] {
        [Language::Fr, Language::En]
    }

    /// ISO 639-1 code, also sent to the geocoder as a language hint.
    pub fn code(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::Fr => "Français",
            Language::En => "English",
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::Fr => Language::En,
            Language::En => Language::Fr,
        }
    }
}

pub struct Translations {
    pub app_title: &'static str,
    pub search_title: &'static str,
    pub search_placeholder: &'static str,
    pub searching: &'static str,
    pub map_title: &'static str,
    pub controls_title: &'static str,
    pub center_map: &'static str,
    pub layer_street: &'static str,
    pub layer_satellite: &'static str,
    pub layer_terrain: &'static str,
    pub info_title: &'static str,
    pub selected_location: &'static str,
    pub clicked_location: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub markers_title: &'static str,
    pub no_markers: &'static str,
    pub notice_title: &'static str,
    pub notice_dismiss: &'static str,
    pub not_found: &'static str,
    pub search_error: &'static str,
    pub language_label: &'static str,
    pub zoom_label: &'static str,
    pub help_hint: &'static str,
    pub focus_search: &'static str,
    pub focus_map: &'static str,
    pub focus_controls: &'static str,
}

static FR: Translations = Translations {
    app_title: "Globe Interactif",
    search_title: "Rechercher un lieu",
    search_placeholder: "Tapez un nom de lieu puis Entrée",
    searching: "Recherche en cours",
    map_title: "Carte",
    controls_title: "Couches",
    center_map: "Recentrer la carte",
    layer_street: "Plan",
    layer_satellite: "Satellite",
    layer_terrain: "Relief",
    info_title: "Position",
    selected_location: "Lieu sélectionné",
    clicked_location: "Point cliqué",
    latitude: "Latitude",
    longitude: "Longitude",
    markers_title: "Marqueurs",
    no_markers: "Aucun marqueur",
    notice_title: "Attention",
    notice_dismiss: "Entrée ou Échap pour fermer",
    not_found: "Lieu introuvable",
    search_error: "Erreur lors de la recherche",
    language_label: "Langue",
    zoom_label: "Zoom",
    help_hint: "Tab focus · F2 couche · F4 langue · F5 recentrer · Ctrl+C quitter",
    focus_search: "RECHERCHE",
    focus_map: "CARTE",
    focus_controls: "COUCHES",
};

static EN: Translations = Translations {
    app_title: "Interactive Globe",
    search_title: "Search a place",
    search_placeholder: "Type a place name and press Enter",
    searching: "Searching",
    map_title: "Map",
    controls_title: "Layers",
    center_map: "Center map",
    layer_street: "Street",
    layer_satellite: "Satellite",
    layer_terrain: "Terrain",
    info_title: "Location",
    selected_location: "Selected location",
    clicked_location: "Clicked point",
    latitude: "Latitude",
    longitude: "Longitude",
    markers_title: "Markers",
    no_markers: "No markers",
    notice_title: "Notice",
    notice_dismiss: "Enter or Esc to close",
    not_found: "Location not found",
    search_error: "Search failed",
    language_label: "Language",
    zoom_label: "Zoom",
    help_hint: "Tab focus · F2 layer · F4 language · F5 center · Ctrl+C quit",
    focus_search: "SEARCH",
    focus_map: "MAP",
    focus_controls: "LAYERS",
};

pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::Fr => &FR,
        Language::En => &EN,
    }
}
