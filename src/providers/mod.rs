//! Providers module - Thin adapters around external network services.
//!
//! This module contains:
//! - Translator / Geocoder traits for abstraction
//! - Google translate_a provider (language list + translation)
//! - Nominatim provider (place name -> coordinates)

pub mod google;
pub mod nominatim;
pub mod provider;

pub use google::GoogleTranslator;
pub use nominatim::NominatimGeocoder;
pub use provider::{Coordinates, GeocodeError, Geocoder, TranslationError, Translator};

#[cfg(test)]
pub(crate) mod fake;
