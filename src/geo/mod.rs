//! Geographic value types shared by the map, the geocoder and the panels.

/// Latitude limit of the Web Mercator projection used by tile maps.
pub const MAX_MERCATOR_LAT: f64 = 85.0511287798;

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from raw map-space values: latitude is clamped to
    /// [-90, 90] and longitude wrapped into [-180, 180].
    pub fn clamped(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.clamp(-90.0, 90.0),
            lng: wrap_lng(lng),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

pub fn wrap_lng(lng: f64) -> f64 {
    let wrapped = lng % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped < -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// `lat, lng` with 6 decimals, as shown in the info panel.
pub fn format_precise(coord: &Coordinate) -> (String, String) {
    (format!("{:.6}", coord.lat), format!("{:.6}", coord.lng))
}

/// `lat,lng` with 4 decimals, used in synthesized marker labels.
pub fn format_short(coord: &Coordinate) -> String {
    format!("{:.4},{:.4}", coord.lat, coord.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_lng() {
        assert_eq!(wrap_lng(10.0), 10.0);
        assert_eq!(wrap_lng(190.0), -170.0);
        assert_eq!(wrap_lng(-190.0), 170.0);
        assert_eq!(wrap_lng(540.0), 180.0);
    }

    #[test]
    fn test_clamped() {
        let c = Coordinate::clamped(120.0, 200.0);
        assert_eq!(c.lat, 90.0);
        assert_eq!(c.lng, -160.0);
        assert!(c.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
    }

    #[test]
    fn test_formatting_precision() {
        let c = Coordinate::new(48.8566, 2.3522);
        assert_eq!(format_short(&c), "48.8566,2.3522");
        assert_eq!(
            format_precise(&c),
            ("48.856600".to_string(), "2.352200".to_string())
        );

        let neg = Coordinate::new(-33.868820123, 151.209296987);
        assert_eq!(format_short(&neg), "-33.8688,151.2093");
        assert_eq!(format_precise(&neg).0, "-33.868820");
        assert_eq!(format_precise(&neg).1, "151.209297");
    }
}
