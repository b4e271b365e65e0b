//! Google translate_a provider.
//!
//! Uses the public `translate_a` endpoints that power the browser widget:
//! - `/translate_a/l` lists languages as `{"sl": {...}, "tl": {code: name}}`
//! - `/translate_a/single` translates; the result is a nested array whose
//!   first element holds `[translated, original, ...]` segments

use serde_json::Value;
use tracing::debug;

use super::provider::{TranslationError, Translator, AUTO_DETECT};
use crate::config::TranslationConfig;

/// Client identifier expected by the translate_a endpoints.
const CLIENT: &str = "gtx";

/// Translation provider backed by Google's translate_a API.
pub struct GoogleTranslator {
    client: reqwest::blocking::Client,
    api_base: String,
    display_language: String,
}

impl GoogleTranslator {
    /// Create a provider from config.
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            display_language: config.display_language.clone(),
        })
    }

    fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, TranslationError> {
        let url = format!("{}{}", self.api_base, path);
        debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send()?;

        if !response.status().is_success() {
            return Err(TranslationError::Status(response.status().as_u16()));
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| TranslationError::Parse(e.to_string()))
    }
}

impl Translator for GoogleTranslator {
    fn name(&self) -> &'static str {
        "google"
    }

    fn supported_languages(&self) -> Result<Vec<(String, String)>, TranslationError> {
        let json = self.get_json(
            "/translate_a/l",
            &[("client", CLIENT), ("hl", self.display_language.as_str())],
        )?;
        parse_languages(&json)
    }

    fn translate(&self, text: &str, target_code: &str) -> Result<String, TranslationError> {
        debug!(
            "Translating {} chars ({} -> {})",
            text.chars().count(),
            AUTO_DETECT,
            target_code
        );

        let json = self.get_json(
            "/translate_a/single",
            &[
                ("client", CLIENT),
                ("sl", AUTO_DETECT),
                ("tl", target_code),
                ("dt", "t"),
                ("q", text),
            ],
        )?;
        parse_translation(&json)
    }
}

/// Extract (name, code) pairs from a language list response.
///
/// The `auto` pseudo-language is not a valid target and is skipped.
pub(crate) fn parse_languages(json: &Value) -> Result<Vec<(String, String)>, TranslationError> {
    let targets = json
        .get("tl")
        .and_then(|v| v.as_object())
        .ok_or_else(|| TranslationError::Parse("missing `tl` language map".to_string()))?;

    Ok(targets
        .iter()
        .filter(|(code, _)| code.as_str() != AUTO_DETECT)
        .filter_map(|(code, name)| name.as_str().map(|n| (n.to_string(), code.clone())))
        .collect())
}

/// Join the translated segments of a translate_a response.
pub(crate) fn parse_translation(json: &Value) -> Result<String, TranslationError> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or(TranslationError::Empty)?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|s| s.as_str()))
        .collect();

    if translated.is_empty() {
        return Err(TranslationError::Empty);
    }

    Ok(translated)
}
