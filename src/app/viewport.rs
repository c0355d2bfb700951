//! Projection between the map pane's terminal cells and coordinates.
//!
//! Plain equirectangular: the canvas and the click bridge both use these
//! bounds so a click lands exactly where its cell is drawn. The visible
//! longitude window never crosses the antimeridian; the world coastline and
//! every marker only exist in [-180, 180].

use crate::geo::Coordinate;
use ratatui::layout::{Position, Rect};

/// Longitude span at zoom 0, in degrees. Doubling per zoom level halves it.
const BASE_LNG_SPAN: f64 = 720.0;

#[derive(Debug, Clone, Copy)]
pub struct MapViewport {
    area: Rect,
    center: Coordinate,
    zoom: u8,
}

impl MapViewport {
    /// The requested center is shifted east or west as needed so the visible
    /// window stays inside [-180, 180]. Latitude is kept as is.
    pub fn new(area: Rect, center: Coordinate, zoom: u8) -> Self {
        let mut viewport = Self { area, center, zoom };
        let half = viewport.lng_span() / 2.0;
        let lng = if half >= 180.0 {
            0.0
        } else {
            center.lng.clamp(-180.0 + half, 180.0 - half)
        };
        viewport.center = Coordinate::new(center.lat, lng);
        viewport
    }

    /// Center actually displayed.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn lng_span(&self) -> f64 {
        BASE_LNG_SPAN / 2f64.powi(self.zoom as i32)
    }

    /// Terminal cells are roughly twice as tall as wide.
    pub fn lat_span(&self) -> f64 {
        if self.area.width == 0 {
            return self.lng_span();
        }
        self.lng_span() * (self.area.height as f64 * 2.0) / self.area.width as f64
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.lng_span() / 2.0;
        [self.center.lng - half, self.center.lng + half]
    }

    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.lat_span() / 2.0;
        [self.center.lat - half, self.center.lat + half]
    }

    /// Coordinate under the given terminal cell, or `None` outside the map.
    pub fn coordinate_at(&self, column: u16, row: u16) -> Option<Coordinate> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let fx = ((column - self.area.x) as f64 + 0.5) / self.area.width as f64;
        let fy = ((row - self.area.y) as f64 + 0.5) / self.area.height as f64;
        let lng = self.x_bounds()[0] + fx * self.lng_span();
        let lat = self.y_bounds()[1] - fy * self.lat_span();
        Some(Coordinate::clamped(lat, lng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> MapViewport {
        MapViewport::new(
            Rect::new(10, 5, 80, 24),
            Coordinate::new(46.603354, 1.888334),
            6,
        )
    }

    #[test]
    fn test_spans() {
        let v = viewport();
        assert_eq!(v.lng_span(), 11.25);
        assert_eq!(v.lat_span(), 11.25 * 48.0 / 80.0);
        let [w, e] = v.x_bounds();
        assert!((e - w - 11.25).abs() < 1e-9);
    }

    #[test]
    fn test_center_cell_maps_near_center() {
        let v = viewport();
        let c = v.coordinate_at(10 + 40, 5 + 12).unwrap();
        assert!((c.lng - 1.888334).abs() < 0.2, "lng {}", c.lng);
        assert!((c.lat - 46.603354).abs() < 0.2, "lat {}", c.lat);
    }

    #[test]
    fn test_corners() {
        let v = viewport();
        let nw = v.coordinate_at(10, 5).unwrap();
        let se = v.coordinate_at(89, 28).unwrap();
        assert!(nw.lat > se.lat);
        assert!(nw.lng < se.lng);
    }

    #[test]
    fn test_outside_is_none() {
        let v = viewport();
        assert!(v.coordinate_at(9, 10).is_none());
        assert!(v.coordinate_at(90, 10).is_none());
        assert!(v.coordinate_at(20, 29).is_none());
    }

    #[test]
    fn test_world_view_stays_inside_antimeridian() {
        let v = MapViewport::new(Rect::new(0, 0, 40, 40), Coordinate::new(0.0, 170.0), 1);
        assert_eq!(v.x_bounds(), [-180.0, 180.0]);
        let c = v.coordinate_at(39, 0).unwrap();
        assert!(c.is_valid());
        assert!(c.lng > 170.0, "lng {}", c.lng);
        assert_eq!(c.lat, 90.0);
    }

    #[test]
    fn test_center_near_antimeridian_is_shifted() {
        let area = Rect::new(0, 0, 80, 24);
        let v = MapViewport::new(area, Coordinate::new(-17.7, 178.0), 6);
        let [west, east] = v.x_bounds();
        assert!((east - 180.0).abs() < 1e-9);
        assert!(west < 178.0);
        assert_eq!(v.center().lat, -17.7);

        // Far from the edge the requested center is kept.
        let v = MapViewport::new(area, Coordinate::new(46.6, 1.9), 6);
        assert_eq!(v.center(), Coordinate::new(46.6, 1.9));
    }

    #[test]
    fn test_every_cell_maps_inside_bounds() {
        let v = MapViewport::new(Rect::new(0, 0, 64, 20), Coordinate::new(10.0, -175.0), 2);
        let [west, east] = v.x_bounds();
        for col in 0..64 {
            let c = v.coordinate_at(col, 10).unwrap();
            assert!(c.lng >= west && c.lng <= east, "col {} lng {}", col, c.lng);
        }
    }
}
