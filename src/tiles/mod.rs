//! Tile layer definitions.
//!
//! The three layers are fixed; only their display names and, for the street
//! layer, the tile source depend on the UI language. Tiles themselves are
//! never fetched here, the descriptor is the identity of the active source.

use crate::geo::{Coordinate, MAX_MERCATOR_LAT};
use crate::i18n::{translations, Language};

const STREET_FR_URL: &str = "https://{s}.tile.openstreetmap.fr/osmfr/{z}/{x}/{y}.png";
const STREET_EN_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const SATELLITE_URL: &str =
    "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}";
const TERRAIN_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerId {
    Street,
    Satellite,
    Terrain,
}

impl LayerId {
    pub const ALL: [LayerId; 3] = [LayerId::Street, LayerId::Satellite, LayerId::Terrain];

    pub fn index(self) -> usize {
        match self {
            LayerId::Street => 0,
            LayerId::Satellite => 1,
            LayerId::Terrain => 2,
        }
    }

    pub fn next(self) -> LayerId {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub id: LayerId,
    pub display_name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
}

impl TileLayer {
    /// Expands the URL template for one tile. `{s}` rotates over the
    /// subdomains so neighbouring tiles spread across hosts.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let subdomain = SUBDOMAINS[((x as u64 + y as u64) % SUBDOMAINS.len() as u64) as usize];
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

pub fn layer(id: LayerId, lang: Language) -> TileLayer {
    let t = translations(lang);
    match id {
        LayerId::Street => TileLayer {
            id,
            display_name: t.layer_street,
            url_template: match lang {
                Language::Fr => STREET_FR_URL,
                Language::En => STREET_EN_URL,
            },
            attribution: "© OpenStreetMap contributors",
        },
        LayerId::Satellite => TileLayer {
            id,
            display_name: t.layer_satellite,
            url_template: SATELLITE_URL,
            attribution: "© Esri, Maxar, Earthstar Geographics",
        },
        LayerId::Terrain => TileLayer {
            id,
            display_name: t.layer_terrain,
            url_template: TERRAIN_URL,
            attribution: "© OpenStreetMap contributors, SRTM | © OpenTopoMap",
        },
    }
}

pub fn layers(lang: Language) -> [TileLayer; 3] {
    LayerId::ALL.map(|id| layer(id, lang))
}

/// Slippy-map tile (x, y) containing `coord` at zoom `z`.
pub fn tile_coords(coord: &Coordinate, z: u8) -> (u32, u32) {
    let n = 2f64.powi(z as i32);
    let lat = coord.lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT).to_radians();
    let x = ((coord.lng + 180.0) / 360.0 * n).floor();
    let y = ((1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * n).floor();
    let max = n - 1.0;
    (x.clamp(0.0, max) as u32, y.clamp(0.0, max) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_street_source_depends_on_language() {
        let fr = layer(LayerId::Street, Language::Fr);
        let en = layer(LayerId::Street, Language::En);
        assert_ne!(fr.url_template, en.url_template);
        assert_ne!(fr.display_name, en.display_name);
    }

    #[test]
    fn test_other_sources_are_language_independent() {
        for id in [LayerId::Satellite, LayerId::Terrain] {
            assert_eq!(
                layer(id, Language::Fr).url_template,
                layer(id, Language::En).url_template
            );
        }
    }

    #[test]
    fn test_tile_url_xyz() {
        let street = layer(LayerId::Street, Language::En);
        assert_eq!(
            street.tile_url(6, 32, 22),
            "https://a.tile.openstreetmap.org/6/32/22.png"
        );
        assert_eq!(
            street.tile_url(6, 33, 22),
            "https://b.tile.openstreetmap.org/6/33/22.png"
        );
    }

    #[test]
    fn test_tile_url_satellite_uses_zyx_order() {
        let sat = layer(LayerId::Satellite, Language::Fr);
        assert!(sat.tile_url(6, 32, 22).ends_with("/tile/6/22/32"));
    }

    #[test]
    fn test_tile_coords() {
        let paris = Coordinate::new(48.8566, 2.3522);
        assert_eq!(tile_coords(&paris, 0), (0, 0));
        assert_eq!(tile_coords(&paris, 6), (32, 22));
        assert_eq!(tile_coords(&paris, 12), (2074, 1409));
        assert_eq!(tile_coords(&Coordinate::new(-90.0, 180.0), 2), (3, 3));
    }

    #[test]
    fn test_layers_are_ordered_and_cycle() {
        let all = layers(Language::Fr);
        for (i, l) in all.iter().enumerate() {
            assert_eq!(l.id.index(), i);
        }
        assert_eq!(LayerId::Terrain.next(), LayerId::Street);
        assert_eq!(LayerId::Street.next(), LayerId::Satellite);
    }
}
