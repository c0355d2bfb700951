use crate::geocode::{GeocodeError, Place};
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The outstanding geocoding request resolved
    GeocodeFinished {
        query: String,
        result: Result<Place, GeocodeError>,
    },

    /// Tick for UI refresh
    Tick,
}
