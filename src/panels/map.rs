//! Map panel - pin visited countries and cities on a world map.

use tracing::warn;

use super::{non_empty, Outcome};
use crate::providers::Geocoder;
use crate::session::{PlacePin, Session};

pub const HEADING: &str = "🗺️ Jouw Wereldkaart";
pub const PLACEHOLDER: &str = "Typ hierboven een land of stad om je eerste pin te zetten!";
pub const NOT_FOUND: &str = "Locatie niet gevonden. Probeer een andere naam.";
pub const CONNECTION_ERROR: &str = "Er is een verbindingsfout. Probeer het later opnieuw.";

/// Zoom level that shows the whole world.
pub const MIN_ZOOM: u8 = 1;

const GRID_WIDTH: usize = 72;
const GRID_HEIGHT: usize = 18;
const GRID_EMPTY: char = '·';
const GRID_PIN: char = '●';

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub heading: &'static str,
    pub zoom: u8,
    pub pins: Vec<PlacePin>,
    /// Equirectangular character map, one string per row
    pub grid: Vec<String>,
    pub summary: Option<String>,
    /// Set when no place has been pinned yet
    pub placeholder: Option<&'static str>,
}

pub fn render(session: &Session) -> MapView {
    let pins = session.place_pins().to_vec();

    if pins.is_empty() {
        return MapView {
            heading: HEADING,
            zoom: MIN_ZOOM,
            pins,
            grid: Vec::new(),
            summary: None,
            placeholder: Some(PLACEHOLDER),
        };
    }

    MapView {
        heading: HEADING,
        zoom: MIN_ZOOM,
        grid: world_grid(&pins, GRID_WIDTH, GRID_HEIGHT),
        summary: Some(format!(
            "Je hebt al **{}** unieke plekken ontdekt!",
            pins.len()
        )),
        placeholder: None,
        pins,
    }
}

/// Look up `place` and pin it when found.
///
/// Not-found and connection failures leave the pin list untouched.
pub fn submit(session: &mut Session, geocoder: &dyn Geocoder, place: &str) -> Outcome {
    let Some(place) = non_empty(place) else {
        return Outcome::warning("Typ eerst een land of stad.");
    };

    match geocoder.geocode(place) {
        Ok(Some(coordinates)) => {
            session.append_place_pin(PlacePin::new(place, coordinates));
            Outcome::toast(format!("Pin geplaatst op {}!", place))
        }
        Ok(None) => Outcome::error(NOT_FOUND),
        Err(e) => {
            warn!("Geocoding {:?} via {} failed: {}", place, geocoder.name(), e);
            Outcome::error(CONNECTION_ERROR)
        }
    }
}

/// Project pins onto a `width` x `height` equirectangular grid.
pub fn world_grid(pins: &[PlacePin], width: usize, height: usize) -> Vec<String> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut cells = vec![vec![GRID_EMPTY; width]; height];
    for pin in pins {
        let (row, col) = grid_cell(pin.latitude, pin.longitude, width, height);
        cells[row][col] = GRID_PIN;
    }

    cells.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Row/column of a coordinate; out-of-range values are clamped to the edge.
fn grid_cell(latitude: f64, longitude: f64, width: usize, height: usize) -> (usize, usize) {
    let lat = latitude.clamp(-90.0, 90.0);
    let lon = longitude.clamp(-180.0, 180.0);

    let x = (lon + 180.0) / 360.0 * (width - 1) as f64;
    let y = (90.0 - lat) / 180.0 * (height - 1) as f64;

    (y.round() as usize, x.round() as usize)
}
