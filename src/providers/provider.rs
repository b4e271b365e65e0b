//! Provider traits - Abstraction over the translation and geocoding backends.
//!
//! Panels only see these traits, so a session can run against the real
//! HTTP providers or against in-memory fakes.

use thiserror::Error;

/// Source language sent with every translation request.
pub const AUTO_DETECT: &str = "auto";

/// Errors raised by a translation provider.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Transport failure (DNS, TLS, timeout, ...)
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Provider answered with a non-success status
    #[error("translation provider returned status {0}")]
    Status(u16),
    /// Provider answered with a body we could not interpret
    #[error("unexpected response from translation provider: {0}")]
    Parse(String),
    /// Provider answered but produced no text
    #[error("translation provider returned no text")]
    Empty,
}

/// Errors raised by a geocoding provider.
///
/// "Not found" is not an error; see [`Geocoder::geocode`].
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding provider unreachable: {0}")]
    Connectivity(String),
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Connectivity(err.to_string())
    }
}

/// A resolved position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Trait for translation providers.
pub trait Translator {
    /// Provider name (google, ...)
    fn name(&self) -> &'static str;

    /// List supported target languages as (name, code) pairs.
    fn supported_languages(&self) -> Result<Vec<(String, String)>, TranslationError>;

    /// Translate `text` into `target_code`, auto-detecting the source language.
    fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError>;
}

/// Trait for geocoding providers.
pub trait Geocoder {
    /// Provider name (nominatim, ...)
    fn name(&self) -> &'static str;

    /// Resolve a free-text place name.
    ///
    /// Returns `Ok(None)` when the provider has no match and
    /// `Err(GeocodeError::Connectivity)` when it could not be asked.
    /// A single attempt is made.
    fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError>;
}
