//! Session store - everything one WandrWays session remembers.
//!
//! A [`Session`] is created when the interactive loop starts and dropped when
//! it ends. Nothing is written to disk. Collections only grow: there is no
//! delete and no edit, only the packing checkbox toggle.

use chrono::NaiveDate;
use image::ImageFormat;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::LanguageCatalog;
use crate::providers::Coordinates;

/// Item on the packing list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingItem {
    pub label: String,
    pub checked: bool,
}

/// A place the user pinned on the map. Names need not be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacePin {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlacePin {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }
}

/// Image formats accepted for diary photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFormat {
    Png,
    Jpeg,
}

impl PhotoFormat {
    /// Match an upload's file extension (png, jpg, jpeg; any case).
    pub fn from_extension(ext: &str) -> Option<Self> {
        ImageFormat::from_extension(ext).and_then(Self::from_image_format)
    }

    /// Detect the format from the file signature.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        image::guess_format(bytes)
            .ok()
            .and_then(Self::from_image_format)
    }

    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }
}

/// Raw bytes of an uploaded photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub bytes: Vec<u8>,
    pub format: PhotoFormat,
}

/// A dated diary entry holding text, a photo, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    pub date: NaiveDate,
    pub text: Option<String>,
    pub photo: Option<Photo>,
}

/// Reasons a diary submission is rejected.
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("a diary entry needs text or a photo")]
    Empty,
    #[error("unsupported photo type {0:?} (allowed: png, jpg, jpeg)")]
    UnsupportedPhotoType(String),
    #[error("file is not a png or jpeg image")]
    NotAnImage,
    #[error("cannot read photo {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DiaryEntry {
    /// Build an entry, enforcing that text or photo is present.
    ///
    /// Blank text counts as absent.
    pub fn new(
        date: NaiveDate,
        text: Option<String>,
        photo: Option<Photo>,
    ) -> Result<Self, DiaryError> {
        let text = text.filter(|t| !t.trim().is_empty());
        let photo = photo.filter(|p| !p.bytes.is_empty());

        if text.is_none() && photo.is_none() {
            return Err(DiaryError::Empty);
        }

        Ok(Self { date, text, photo })
    }
}

/// State of one session.
#[derive(Debug)]
pub struct Session {
    languages: LanguageCatalog,
    packing: Vec<PackingItem>,
    pins: Vec<PlacePin>,
    diary: Vec<DiaryEntry>,
}

impl Session {
    /// Start a session with an already-loaded language catalog.
    pub fn new(languages: LanguageCatalog) -> Self {
        info!(
            "Session started ({} languages{})",
            languages.len(),
            if languages.is_fallback() { ", fallback" } else { "" }
        );
        Self {
            languages,
            packing: Vec::new(),
            pins: Vec::new(),
            diary: Vec::new(),
        }
    }

    pub fn languages(&self) -> &LanguageCatalog {
        &self.languages
    }

    // ============ PACKING ============

    /// Append an unchecked item. Callers reject empty labels first.
    pub fn append_packing_item(&mut self, label: impl Into<String>) {
        let label = label.into();
        debug!("Packing item added: {}", label);
        self.packing.push(PackingItem {
            label,
            checked: false,
        });
    }

    /// Flip one item's checkbox, returning its new state.
    ///
    /// Out-of-range indexes leave the list untouched.
    pub fn toggle_packing_item(&mut self, index: usize) -> Option<bool> {
        let item = self.packing.get_mut(index)?;
        item.checked = !item.checked;
        Some(item.checked)
    }

    pub fn packing_items(&self) -> &[PackingItem] {
        &self.packing
    }

    // ============ MAP ============

    pub fn append_place_pin(&mut self, pin: PlacePin) {
        debug!(
            "Pin added: {} ({}, {})",
            pin.name, pin.latitude, pin.longitude
        );
        self.pins.push(pin);
    }

    /// Pins in submission order.
    pub fn place_pins(&self) -> &[PlacePin] {
        &self.pins
    }

    // ============ DIARY ============

    pub fn append_diary_entry(&mut self, entry: DiaryEntry) {
        debug!(
            "Diary entry added for {} (text: {}, photo: {})",
            entry.date,
            entry.text.is_some(),
            entry.photo.is_some()
        );
        self.diary.push(entry);
    }

    /// Entries newest first.
    pub fn diary_entries(&self) -> impl Iterator<Item = &DiaryEntry> {
        self.diary.iter().rev()
    }

    pub fn diary_len(&self) -> usize {
        self.diary.len()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        info!(
            "Session ended ({} packing items, {} pins, {} diary entries discarded)",
            self.packing.len(),
            self.pins.len(),
            self.diary.len()
        );
    }
}
