//! Diary panel - dated memories with text and an optional photo.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use super::Outcome;
use crate::session::{DiaryEntry, DiaryError, Photo, PhotoFormat, Session};

pub const HEADING: &str = "Mijn Herinneringen";
pub const INTRO: &str = "Leg je avonturen vast met tekst en beeld.";
pub const PLACEHOLDER: &str = "Je dagboek is nog leeg.";

/// One diary form submission.
#[derive(Debug, Clone)]
pub struct DiaryForm {
    pub date: NaiveDate,
    pub text: String,
    /// Path of the uploaded photo, if any
    pub photo: Option<PathBuf>,
}

/// Collapsed card for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryCard {
    /// Always visible, e.g. "📖 2024-07-14"
    pub header: String,
    pub photo: Option<PhotoSummary>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotoSummary {
    pub format: PhotoFormat,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryView {
    pub heading: &'static str,
    pub intro: &'static str,
    /// Newest first
    pub cards: Vec<DiaryCard>,
    pub placeholder: Option<&'static str>,
}

pub fn render(session: &Session) -> DiaryView {
    let cards: Vec<DiaryCard> = session
        .diary_entries()
        .map(|entry| DiaryCard {
            header: format!("📖 {}", entry.date.format("%Y-%m-%d")),
            photo: entry.photo.as_ref().map(|p| PhotoSummary {
                format: p.format,
                size: p.bytes.len(),
            }),
            text: entry.text.clone(),
        })
        .collect();

    DiaryView {
        heading: HEADING,
        intro: INTRO,
        placeholder: cards.is_empty().then_some(PLACEHOLDER),
        cards,
    }
}

/// Save a memory. Needs text, a photo, or both.
pub fn submit(session: &mut Session, form: DiaryForm) -> Outcome {
    match build_entry(form) {
        Ok(entry) => {
            session.append_diary_entry(entry);
            Outcome::toast("Je avontuur is opgeslagen!")
        }
        Err(DiaryError::Empty) => Outcome::warning("Voeg tekst of een foto toe."),
        Err(e) => Outcome::warning(format!("Foto niet toegevoegd: {}", e)),
    }
}

fn build_entry(form: DiaryForm) -> Result<DiaryEntry, DiaryError> {
    let photo = form.photo.as_deref().map(load_photo).transpose()?;
    DiaryEntry::new(form.date, Some(form.text), photo)
}

/// Read an uploaded photo's raw bytes.
///
/// Only png/jpg/jpeg uploads are accepted, and the content must match.
pub fn load_photo(path: &Path) -> Result<Photo, DiaryError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    PhotoFormat::from_extension(ext)
        .ok_or_else(|| DiaryError::UnsupportedPhotoType(ext.to_string()))?;

    let bytes = std::fs::read(path).map_err(|source| DiaryError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let format = PhotoFormat::sniff(&bytes).ok_or(DiaryError::NotAnImage)?;

    debug!("Loaded {} photo ({} bytes)", format.as_str(), bytes.len());
    Ok(Photo { bytes, format })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguageCatalog;
    use crate::panels::NoticeLevel;
    use tempfile::TempDir;

    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
    }

    fn text_form(d: u32, text: &str) -> DiaryForm {
        DiaryForm {
            date: day(d),
            text: text.to_string(),
            photo: None,
        }
    }

    #[test]
    fn test_text_only_entry_shown_first() {
        let mut session = Session::new(LanguageCatalog::fallback());
        submit(&mut session, text_form(1, "Aangekomen"));
        let outcome = submit(&mut session, text_form(2, "Great day"));
        assert_eq!(outcome, Outcome::toast("Je avontuur is opgeslagen!"));

        let view = render(&session);
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].header, "📖 2024-08-02");
        assert_eq!(view.cards[0].text.as_deref(), Some("Great day"));
        assert_eq!(view.cards[0].photo, None);
    }

    #[test]
    fn test_empty_form_is_rejected() {
        let mut session = Session::new(LanguageCatalog::fallback());
        let outcome = submit(&mut session, text_form(1, ""));
        assert_eq!(outcome, Outcome::warning("Voeg tekst of een foto toe."));
        assert_eq!(session.diary_len(), 0);
        assert_eq!(render(&session).placeholder, Some(PLACEHOLDER));
    }

    #[test]
    fn test_photo_only_entry() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("strand.PNG");
        std::fs::write(&path, PNG_BYTES)?;

        let mut session = Session::new(LanguageCatalog::fallback());
        let outcome = submit(
            &mut session,
            DiaryForm {
                date: day(3),
                text: String::new(),
                photo: Some(path),
            },
        );
        assert!(outcome.has(NoticeLevel::Toast));

        let card = &render(&session).cards[0];
        assert_eq!(card.text, None);
        assert_eq!(
            card.photo,
            Some(PhotoSummary {
                format: PhotoFormat::Png,
                size: PNG_BYTES.len()
            })
        );
        Ok(())
    }

    #[test]
    fn test_wrong_extension_is_rejected() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("kaart.gif");
        std::fs::write(&path, b"GIF89a")?;

        assert!(matches!(
            load_photo(&path),
            Err(DiaryError::UnsupportedPhotoType(ext)) if ext == "gif"
        ));

        let mut session = Session::new(LanguageCatalog::fallback());
        let outcome = submit(
            &mut session,
            DiaryForm {
                date: day(4),
                text: "Met tekst".to_string(),
                photo: Some(path),
            },
        );
        assert!(outcome.has(NoticeLevel::Warning));
        assert_eq!(session.diary_len(), 0);
        Ok(())
    }

    #[test]
    fn test_disguised_file_is_rejected() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("notes.jpg");
        std::fs::write(&path, b"not really a jpeg")?;
        assert!(matches!(load_photo(&path), Err(DiaryError::NotAnImage)));
        Ok(())
    }

    #[test]
    fn test_missing_photo_file() {
        let err = load_photo(Path::new("/nonexistent/foto.jpeg")).unwrap_err();
        assert!(matches!(err, DiaryError::Io { .. }));
    }
}
