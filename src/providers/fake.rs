//! In-memory providers for unit tests.

use std::cell::Cell;
use std::collections::HashMap;

use super::provider::{Coordinates, GeocodeError, Geocoder, TranslationError, Translator};

/// Translator that prefixes text with the target code, or always fails.
#[derive(Default)]
pub(crate) struct FakeTranslator {
    pub fail_with: Option<u16>,
    pub calls: Cell<usize>,
}

impl FakeTranslator {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Self::default()
        }
    }
}

impl Translator for FakeTranslator {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn supported_languages(&self) -> Result<Vec<(String, String)>, TranslationError> {
        match self.fail_with {
            Some(status) => Err(TranslationError::Status(status)),
            None => Ok(vec![
                ("dutch".to_string(), "nl".to_string()),
                ("italian".to_string(), "it".to_string()),
            ]),
        }
    }

    fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError> {
        self.calls.set(self.calls.get() + 1);
        match self.fail_with {
            Some(status) => Err(TranslationError::Status(status)),
            None => Ok(format!("[{}] {}", target_code, text)),
        }
    }
}

/// Geocoder with a fixed gazetteer; `offline` makes every lookup fail.
#[derive(Default)]
pub(crate) struct FakeGeocoder {
    pub places: HashMap<&'static str, (f64, f64)>,
    pub offline: bool,
    pub calls: Cell<usize>,
}

impl FakeGeocoder {
    pub fn with_places(places: &[(&'static str, f64, f64)]) -> Self {
        Self {
            places: places
                .iter()
                .map(|(name, lat, lon)| (*name, (*lat, *lon)))
                .collect(),
            ..Self::default()
        }
    }

    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }
}

impl Geocoder for FakeGeocoder {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        self.calls.set(self.calls.get() + 1);
        if self.offline {
            return Err(GeocodeError::Connectivity("offline".to_string()));
        }
        Ok(self
            .places
            .get(place)
            .map(|&(latitude, longitude)| Coordinates {
                latitude,
                longitude,
            }))
    }
}
