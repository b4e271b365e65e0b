//! WandrWays Core Library
//!
//! Travel companion that lives for exactly one session. Provides:
//! - Language catalog with a fixed fallback table
//! - Translation and geocoding adapters (feature traits + HTTP providers)
//! - Session store for packing items, map pins and diary entries
//! - Five panels (translator, packing, map, diary, tips) as handlers + views
//!
//! Nothing is persisted: dropping the [`Session`] discards everything.

pub mod catalog;
pub mod config;
pub mod panels;
pub mod providers;
pub mod session;

// Re-export main types
pub use catalog::{load_languages, LanguageCatalog, LanguageEntry, FALLBACK_LANGUAGES};
pub use config::Config;
pub use panels::{Notice, NoticeLevel, Outcome, Panel};
pub use providers::{
    Coordinates, GeocodeError, Geocoder, GoogleTranslator, NominatimGeocoder, TranslationError,
    Translator,
};
pub use session::{DiaryEntry, DiaryError, PackingItem, Photo, PhotoFormat, PlacePin, Session};
