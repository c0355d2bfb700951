//! Place-name lookup against a Nominatim-compatible search API.
//!
//! One request per search, first match only. There is no retry, timeout or
//! cancellation: the caller guarantees a single request in flight.

mod client;

pub use client::Geocoder;

use crate::geo::Coordinate;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    /// The service answered with an empty result set.
    #[error("no match found")]
    NotFound,
    /// Transport, HTTP status or payload failure.
    #[error("{0}")]
    Search(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(e: reqwest::Error) -> Self {
        GeocodeError::Search(e.to_string())
    }
}

impl From<serde_json::Error> for GeocodeError {
    fn from(e: serde_json::Error) -> Self {
        GeocodeError::Search(format!("invalid response: {}", e))
    }
}

/// A resolved search result.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub position: Coordinate,
    pub name: String,
}

/// One element of the search response. Nominatim sends coordinates as
/// strings; any other field is ignored.
#[derive(Debug, Deserialize)]
struct SearchMatch {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: String,
}

impl SearchMatch {
    fn into_place(self) -> Result<Place, GeocodeError> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodeError::Search(format!("invalid latitude {:?}", self.lat)))?;
        let lng: f64 = self
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodeError::Search(format!("invalid longitude {:?}", self.lon)))?;
        let position = Coordinate::new(lat, lng);
        if !position.is_valid() {
            return Err(GeocodeError::Search(format!(
                "coordinate out of range: {}, {}",
                lat, lng
            )));
        }
        Ok(Place {
            position,
            name: self.display_name,
        })
    }
}

/// Parses a search response body into the first match.
pub fn parse_results(body: &str) -> Result<Place, GeocodeError> {
    let matches: Vec<SearchMatch> = serde_json::from_str(body)?;
    matches
        .into_iter()
        .next()
        .ok_or(GeocodeError::NotFound)?
        .into_place()
}
