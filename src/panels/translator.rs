//! Translator panel - translate free text into a language from the catalog.

use tracing::warn;

use super::{non_empty, NoticeLevel, Outcome};
use crate::providers::Translator;
use crate::session::Session;

pub const HEADING: &str = "🈯 Wereldvertaler";
pub const INTRO: &str = "Vertaal naar bijna elke taal ter wereld.";
pub const COPY_TIP: &str = "Tip: Houd de tekst ingedrukt om te kopiëren op je telefoon!";

/// What the translator panel shows before a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorView {
    pub heading: &'static str,
    pub intro: &'static str,
    /// Target languages, sorted case-sensitively
    pub languages: Vec<String>,
}

pub fn render(session: &Session) -> TranslatorView {
    TranslatorView {
        heading: HEADING,
        intro: INTRO,
        languages: session
            .languages()
            .names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    }
}

/// Translate `text` into the language shown as `language`.
///
/// Empty text is a validation warning and the provider is not called.
pub fn submit(
    session: &Session,
    translator: &dyn Translator,
    text: &str,
    language: &str,
) -> Outcome {
    if non_empty(text).is_none() {
        return Outcome::warning("Voer eerst een tekst in.");
    }

    let Some(code) = session.languages().code_for(language) else {
        return Outcome::warning(format!("Onbekende taal: {}", language));
    };

    match translator.translate(text, code) {
        Ok(translation) => Outcome::new()
            .with(
                NoticeLevel::Success,
                format!("Vertaling naar het {}:", language),
            )
            .with(NoticeLevel::Info, translation)
            .with(NoticeLevel::Toast, COPY_TIP),
        Err(e) => {
            warn!("Translation via {} failed: {}", translator.name(), e);
            Outcome::error(format!("Oeps, er ging iets mis: {}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{load_languages, LanguageCatalog};
    use crate::panels::Notice;
    use crate::providers::fake::FakeTranslator;

    #[test]
    fn test_render_lists_sorted_languages() {
        let session = Session::new(LanguageCatalog::fallback());
        let view = render(&session);
        assert_eq!(view.languages, vec!["Duits", "Engels", "Frans", "Spaans"]);
        assert_eq!(view.heading, HEADING);
    }

    #[test]
    fn test_empty_text_never_calls_provider() {
        let session = Session::new(LanguageCatalog::fallback());
        let translator = FakeTranslator::default();

        for text in ["", "   ", "\n"] {
            let outcome = submit(&session, &translator, text, "Engels");
            assert_eq!(
                outcome.notices,
                vec![Notice {
                    level: NoticeLevel::Warning,
                    message: "Voer eerst een tekst in.".to_string()
                }]
            );
        }
        assert_eq!(translator.calls.get(), 0);
    }

    #[test]
    fn test_success_labels_target_language() {
        let translator = FakeTranslator::default();
        let session = Session::new(load_languages(&translator));

        let outcome = submit(&session, &translator, "Goedemorgen", "Italian");
        assert_eq!(translator.calls.get(), 1);
        assert_eq!(outcome.notices[0].level, NoticeLevel::Success);
        assert_eq!(outcome.notices[0].message, "Vertaling naar het Italian:");
        assert_eq!(outcome.notices[1].message, "[it] Goedemorgen");
        assert!(!outcome.has(NoticeLevel::Error));
    }

    #[test]
    fn test_provider_error_is_reported() {
        let session = Session::new(LanguageCatalog::fallback());
        let translator = FakeTranslator::failing(429);

        let outcome = submit(&session, &translator, "Hallo", "Spaans");
        assert_eq!(outcome.notices.len(), 1);
        assert_eq!(outcome.notices[0].level, NoticeLevel::Error);
        assert!(outcome.notices[0]
            .message
            .starts_with("Oeps, er ging iets mis: "));
        assert!(outcome.notices[0].message.contains("429"));
    }

    #[test]
    fn test_unknown_language_is_warning() {
        let session = Session::new(LanguageCatalog::fallback());
        let translator = FakeTranslator::default();

        let outcome = submit(&session, &translator, "Hallo", "Klingon");
        assert!(outcome.has(NoticeLevel::Warning));
        assert_eq!(translator.calls.get(), 0);
    }
}
