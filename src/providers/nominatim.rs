//! Nominatim (OpenStreetMap) geocoding provider.

use serde::Deserialize;
use tracing::{debug, warn};

use super::provider::{Coordinates, GeocodeError, Geocoder};
use crate::config::GeocodingConfig;

/// One match from `/search?format=json`. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
    #[allow(dead_code)]
    display_name: Option<String>,
}

/// Geocoder backed by a Nominatim instance.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl NominatimGeocoder {
    /// Create a provider from config.
    ///
    /// Nominatim rejects anonymous clients, so the configured identifier is
    /// sent as User-Agent on every request.
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn name(&self) -> &'static str {
        "nominatim"
    }

    fn geocode(&self, place: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.api_base);
        debug!("Geocoding {:?} via {}", place, url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            warn!("Nominatim returned status {}", status);
            return Err(GeocodeError::Connectivity(format!(
                "provider returned status {}",
                status
            )));
        }

        let body = response.text()?;
        parse_search(&body)
    }
}

/// Interpret a `/search?format=json` body.
fn parse_search(body: &str) -> Result<Option<Coordinates>, GeocodeError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body)
        .map_err(|e| GeocodeError::Connectivity(format!("invalid response: {}", e)))?;

    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    let latitude = parse_degrees("latitude", &hit.lat)?;
    let longitude = parse_degrees("longitude", &hit.lon)?;

    Ok(Some(Coordinates {
        latitude,
        longitude,
    }))
}

/// Parse a decimal-degree string; `nan`/`inf` are rejected.
fn parse_degrees(axis: &str, raw: &str) -> Result<f64, GeocodeError> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| GeocodeError::Connectivity(format!("invalid {} {:?}: {}", axis, raw, e)))?;
    if !value.is_finite() {
        return Err(GeocodeError::Connectivity(format!(
            "invalid {} {:?}: not finite",
            axis, raw
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_hit() {
        let body = r#"[{"lat":"52.3730796","lon":"4.8924534","display_name":"Amsterdam"}]"#;
        let coords = parse_search(body).unwrap().unwrap();
        assert!((coords.latitude - 52.3730796).abs() < 1e-9);
        assert!((coords.longitude - 4.8924534).abs() < 1e-9);
    }

    #[test]
    fn test_parse_search_no_hit() {
        assert_eq!(parse_search("[]").unwrap(), None);
    }

    #[test]
    fn test_parse_search_bad_coordinates() {
        let body = r#"[{"lat":"north","lon":"4.89"}]"#;
        assert!(matches!(
            parse_search(body),
            Err(GeocodeError::Connectivity(_))
        ));
    }

    #[test]
    fn test_parse_search_non_finite_coordinates() {
        for body in [
            r#"[{"lat":"NaN","lon":"4.89"}]"#,
            r#"[{"lat":"52.37","lon":"inf"}]"#,
            r#"[{"lat":"-infinity","lon":"0"}]"#,
        ] {
            assert!(
                matches!(parse_search(body), Err(GeocodeError::Connectivity(_))),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_parse_search_not_json() {
        assert!(parse_search("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_unreachable_provider_is_connectivity_error() {
        let config = GeocodingConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..GeocodingConfig::default()
        };
        let geocoder = NominatimGeocoder::new(&config).unwrap();
        assert_eq!(geocoder.name(), "nominatim");
        assert!(matches!(
            geocoder.geocode("Amsterdam"),
            Err(GeocodeError::Connectivity(_))
        ));
    }
}
