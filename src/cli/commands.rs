//! Command implementations for the WandrWays CLI.
//!
//! Main commands:
//! - run: interactive session with the five panels
//! - languages: list translator target languages

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use wandrways::panels::diary::DiaryForm;
use wandrways::panels::{diary, map, packing, tips, translator, Panel};
use wandrways::{
    load_languages, Config, Geocoder, GoogleTranslator, LanguageCatalog, NominatimGeocoder,
    Session, Translator,
};

use super::output;

const BACK: &str = "⬅  Terug";
const QUIT: &str = "Afsluiten";

/// Run `work` behind a spinner showing `message`.
fn with_spinner<T>(message: &str, work: impl FnOnce() -> T) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = work();

    spinner.finish_and_clear();
    Ok(result)
}

fn build_translator(config: &Config) -> Result<GoogleTranslator> {
    GoogleTranslator::new(&config.translation).context("Cannot create translation client")
}

fn build_geocoder(config: &Config) -> Result<NominatimGeocoder> {
    NominatimGeocoder::new(&config.geocoding).context("Cannot create geocoding client")
}

fn load_catalog(translator: &dyn Translator) -> Result<LanguageCatalog> {
    with_spinner("Talen laden...", || load_languages(translator))
}

/// List the translator's target languages.
pub fn languages(config: &Config) -> Result<()> {
    let translator = build_translator(config)?;
    let catalog = load_catalog(&translator)?;
    output::print_languages(&catalog);
    Ok(())
}

/// Interactive session: pick a panel, act on it, repeat until quit.
pub fn run(config: &Config) -> Result<()> {
    output::print_banner();

    let translator = build_translator(config)?;
    let geocoder = build_geocoder(config)?;

    let mut session = Session::new(load_catalog(&translator)?);
    let theme = ColorfulTheme::default();

    let mut menu: Vec<&str> = Panel::ALL.iter().map(|p| p.label()).collect();
    menu.push(QUIT);

    loop {
        println!();
        let choice = Select::with_theme(&theme)
            .with_prompt("Kies een onderdeel")
            .items(&menu)
            .default(0)
            .interact()?;

        let Some(panel) = Panel::ALL.get(choice).copied() else {
            break;
        };

        match panel {
            Panel::Translator => translator_panel(&theme, &session, &translator)?,
            Panel::Packing => packing_panel(&theme, &mut session)?,
            Panel::Map => map_panel(&theme, &mut session, &geocoder)?,
            Panel::Diary => diary_panel(&theme, &mut session)?,
            Panel::Tips => output::print_tips(&tips::render()),
        }
    }

    info!("Leaving session");
    Ok(())
}

// ============ TRANSLATOR ============

fn translator_panel(
    theme: &ColorfulTheme,
    session: &Session,
    translator: &dyn Translator,
) -> Result<()> {
    let view = translator::render(session);
    output::print_translator(&view);

    let text: String = Input::with_theme(theme)
        .with_prompt("Wat wil je vertalen?")
        .allow_empty(true)
        .interact_text()?;

    let language_idx = Select::with_theme(theme)
        .with_prompt("Naar welke taal?")
        .items(&view.languages)
        .default(0)
        .max_length(12)
        .interact()?;
    let language = &view.languages[language_idx];

    let outcome = if text.trim().is_empty() {
        translator::submit(session, translator, &text, language)
    } else {
        with_spinner("Vertalen...", || {
            translator::submit(session, translator, &text, language)
        })?
    };
    output::print_outcome(&outcome);
    Ok(())
}

// ============ PACKING ============

fn packing_panel(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    const ADD: &str = "Toevoegen aan lijst";
    const CHECK: &str = "Afvinken";

    loop {
        output::print_packing(&packing::render(session));

        let actions = [ADD, CHECK, BACK];
        let action = Select::with_theme(theme)
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[action] {
            ADD => {
                let label: String = Input::with_theme(theme)
                    .with_prompt("Voeg iets toe aan je lijst")
                    .allow_empty(true)
                    .interact_text()?;
                output::print_outcome(&packing::submit(session, &label));
            }
            CHECK => check_items(theme, session)?,
            _ => return Ok(()),
        }
    }
}

/// Show every item as a checkbox and toggle the ones the user changed.
fn check_items(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    let rows = packing::render(session).items;
    if rows.is_empty() {
        return Ok(());
    }

    let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
    let defaults: Vec<bool> = rows.iter().map(|r| r.checked).collect();

    let selected = MultiSelect::with_theme(theme)
        .with_prompt("Spatie om af te vinken, enter om te bevestigen")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    for (idx, was_checked) in defaults.iter().enumerate() {
        if selected.contains(&idx) != *was_checked {
            output::print_outcome(&packing::toggle(session, idx));
        }
    }
    Ok(())
}

// ============ MAP ============

fn map_panel(theme: &ColorfulTheme, session: &mut Session, geocoder: &dyn Geocoder) -> Result<()> {
    const PIN: &str = "Pin plaatsen 📍";

    loop {
        output::print_map(&map::render(session));

        let actions = [PIN, BACK];
        let action = Select::with_theme(theme)
            .items(&actions)
            .default(0)
            .interact()?;
        if actions[action] != PIN {
            return Ok(());
        }

        // A fresh prompt each time: the form is cleared after every submit
        let place: String = Input::with_theme(theme)
            .with_prompt("Voeg een land of stad toe aan de kaart")
            .allow_empty(true)
            .interact_text()?;

        let outcome = with_spinner("Zoeken...", || map::submit(session, geocoder, &place))?;
        output::print_outcome(&outcome);
    }
}

// ============ DIARY ============

fn diary_panel(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    const WRITE: &str = "Herinnering met foto opslaan 📸";

    loop {
        output::print_diary(&diary::render(session));

        let actions = [WRITE, BACK];
        let action = Select::with_theme(theme)
            .items(&actions)
            .default(0)
            .interact()?;
        if actions[action] != WRITE {
            return Ok(());
        }

        let form = read_diary_form(theme)?;
        output::print_outcome(&diary::submit(session, form));
    }
}

fn read_diary_form(theme: &ColorfulTheme) -> Result<DiaryForm> {
    let today = Local::now().date_naive();

    let date_input: String = Input::with_theme(theme)
        .with_prompt("Datum van je avontuur (JJJJ-MM-DD)")
        .default(today.format("%Y-%m-%d").to_string())
        .validate_with(|input: &String| -> std::result::Result<(), &'static str> {
            parse_date(input)
                .map(|_| ())
                .ok_or("Gebruik het formaat JJJJ-MM-DD")
        })
        .interact_text()?;
    let date = parse_date(&date_input).unwrap_or(today);

    let text: String = Input::with_theme(theme)
        .with_prompt("Hoe was je dag?")
        .allow_empty(true)
        .interact_text()?;

    let photo: String = Input::with_theme(theme)
        .with_prompt("Foto (pad naar png/jpg/jpeg, leeg voor geen)")
        .allow_empty(true)
        .interact_text()?;
    let photo = photo.trim();

    Ok(DiaryForm {
        date,
        text,
        photo: (!photo.is_empty()).then(|| PathBuf::from(photo)),
    })
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2024-07-14 "),
            NaiveDate::from_ymd_opt(2024, 7, 14)
        );
        assert_eq!(parse_date("14-07-2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }
}
