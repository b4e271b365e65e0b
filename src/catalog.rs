//! Language catalog - display name -> language code for the translator panel.
//!
//! Loaded once per session from the translation provider. Any failure falls
//! back to [`FALLBACK_LANGUAGES`] so the translator panel always has targets.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::providers::{TranslationError, Translator};

/// Targets offered when the provider's language list is unavailable.
pub const FALLBACK_LANGUAGES: [(&str, &str); 4] = [
    ("Engels", "en"),
    ("Spaans", "es"),
    ("Frans", "fr"),
    ("Duits", "de"),
];

/// One selectable target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub display_name: String,
    pub code: String,
}

/// Immutable display name -> code mapping.
///
/// Keys iterate in ascending byte order, which is the order shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageCatalog {
    entries: BTreeMap<String, String>,
    fallback: bool,
}

impl LanguageCatalog {
    /// Build a catalog from provider (name, code) pairs, capitalizing names.
    ///
    /// Codes are unique: a code already present keeps its first name.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = BTreeMap::new();
        for (name, code) in pairs {
            if entries.values().any(|c: &String| c == &code) {
                continue;
            }
            entries.insert(capitalize(&name), code);
        }
        Self {
            entries,
            fallback: false,
        }
    }

    /// The fixed four-language table.
    pub fn fallback() -> Self {
        Self {
            entries: FALLBACK_LANGUAGES
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string()))
                .collect(),
            fallback: true,
        }
    }

    /// Whether the fallback table is in use.
    pub fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Display names, sorted case-sensitively ascending.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = LanguageEntry> + '_ {
        self.entries.iter().map(|(name, code)| LanguageEntry {
            display_name: name.clone(),
            code: code.clone(),
        })
    }

    pub fn code_for(&self, display_name: &str) -> Option<&str> {
        self.entries.get(display_name).map(String::as_str)
    }

    pub fn display_name_for(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, c)| c.as_str() == code)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load the catalog from the provider, falling back on any failure.
pub fn load_languages(translator: &dyn Translator) -> LanguageCatalog {
    match try_load(translator) {
        Ok(catalog) => {
            debug!(
                "Loaded {} languages from {}",
                catalog.len(),
                translator.name()
            );
            catalog
        }
        Err(e) => {
            warn!(
                "Language list from {} unavailable, using fallback: {}",
                translator.name(),
                e
            );
            LanguageCatalog::fallback()
        }
    }
}

fn try_load(translator: &dyn Translator) -> Result<LanguageCatalog, TranslationError> {
    let pairs = translator.supported_languages()?;
    let catalog = LanguageCatalog::from_pairs(pairs);
    if catalog.is_empty() {
        return Err(TranslationError::Empty);
    }
    Ok(catalog)
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
