//! Terminal rendering of panel views and notices.

use colored::Colorize;
use wandrways::panels::diary::DiaryView;
use wandrways::panels::map::MapView;
use wandrways::panels::packing::PackingView;
use wandrways::panels::tips::TipsView;
use wandrways::panels::translator::TranslatorView;
use wandrways::{LanguageCatalog, Notice, NoticeLevel, Outcome};

pub const TITLE: &str = "🎒 WandrWays";
pub const SUBTITLE: &str = "Jouw ultieme reispartner";

pub fn print_banner() {
    println!("{}", TITLE.bold().cyan());
    println!("{}", SUBTITLE.dimmed());
    println!();
}

pub fn print_heading(text: &str) {
    println!();
    println!("{}", text.bold());
}

pub fn print_divider() {
    println!("{}", "─".repeat(48).dimmed());
}

pub fn print_outcome(outcome: &Outcome) {
    for notice in &outcome.notices {
        print_notice(notice);
    }
}

pub fn print_notice(notice: &Notice) {
    println!("{}", notice_line(notice));
}

/// Notices carry translations and user input, so they are printed verbatim.
fn notice_line(notice: &Notice) -> String {
    let text = notice.message.as_str();
    match notice.level {
        NoticeLevel::Success => format!("  {} {}", "✓".green(), text.green()),
        NoticeLevel::Info => format!("  {}", text.cyan()),
        NoticeLevel::Warning => format!("  {} {}", "!".yellow(), text.yellow()),
        NoticeLevel::Error => format!("  {} {}", "✗".red(), text.red()),
        NoticeLevel::Toast => format!("  {}", text.bold()),
    }
}

pub fn print_translator(view: &TranslatorView) {
    print_heading(view.heading);
    println!("{}", view.intro);
}

pub fn print_packing(view: &PackingView) {
    print_heading(view.heading);
    if let Some(placeholder) = view.placeholder {
        println!("  {}", placeholder.cyan());
        return;
    }
    for (idx, row) in view.items.iter().enumerate() {
        let mark = if row.checked {
            "[x]".green()
        } else {
            "[ ]".normal()
        };
        println!("  {} {}. {}", mark, idx + 1, row.label);
    }
}

pub fn print_map(view: &MapView) {
    print_heading(view.heading);
    if let Some(placeholder) = view.placeholder {
        println!("  {}", placeholder.cyan());
        return;
    }
    for row in &view.grid {
        println!("  {}", row.dimmed());
    }
    for pin in &view.pins {
        println!(
            "  📍 {} {}",
            pin.name.bold(),
            format!("({:.4}, {:.4})", pin.latitude, pin.longitude).dimmed()
        );
    }
    if let Some(summary) = &view.summary {
        println!();
        println!("{}", styled(summary));
    }
}

pub fn print_diary(view: &DiaryView) {
    print_heading(view.heading);
    println!("{}", view.intro);
    print_divider();
    if let Some(placeholder) = view.placeholder {
        println!("  {}", placeholder.cyan());
        return;
    }
    for card in &view.cards {
        println!("{}", card.header.bold());
        if let Some(photo) = card.photo {
            println!(
                "    🖼  foto ({}, {})",
                photo.format.as_str(),
                format_size(photo.size)
            );
        }
        if let Some(text) = &card.text {
            for line in text.lines() {
                println!("    {}", line);
            }
        }
    }
}

pub fn print_tips(view: &TipsView) {
    print_heading(view.heading);
    println!("{}", view.intro);
    for tip in view.tips {
        println!("  {}", styled(tip).cyan());
    }
    print_divider();
    println!("{}", view.inspiration_heading.bold());
    println!("{}", styled(view.inspiration));
}

pub fn print_languages(catalog: &LanguageCatalog) {
    if catalog.is_fallback() {
        println!(
            "{}",
            "Taallijst niet beschikbaar, beperkte keuze:".yellow()
        );
    }
    for entry in catalog.entries() {
        println!("  {:<28} {}", entry.display_name, entry.code.dimmed());
    }
}

/// Apply the `**bold**` and `*italic*` markers used in panel copy.
fn styled(text: &str) -> String {
    text.split("**")
        .enumerate()
        .map(|(idx, part)| {
            if idx % 2 == 1 {
                return part.bold().to_string();
            }
            match (part.find('*'), part.rfind('*')) {
                (Some(start), Some(end)) if start < end => format!(
                    "{}{}{}",
                    &part[..start],
                    part[start + 1..end].italic(),
                    &part[end + 1..]
                ),
                _ => part.to_string(),
            }
        })
        .collect()
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_strips_markers() {
        colored::control::set_override(false);
        assert_eq!(styled("Je hebt al **3** plekken"), "Je hebt al 3 plekken");
        assert_eq!(styled("💡 *Tip: foto*"), "💡 Tip: foto");
        assert_eq!(styled("geen opmaak"), "geen opmaak");
    }

    #[test]
    fn test_notice_prints_message_verbatim() {
        colored::control::set_override(false);
        let info = Notice {
            level: NoticeLevel::Info,
            message: "2 * 3 * 4 = 24".to_string(),
        };
        assert_eq!(notice_line(&info), "  2 * 3 * 4 = 24");

        let toast = Notice {
            level: NoticeLevel::Toast,
            message: "Pin geplaatst op **Paris**!".to_string(),
        };
        assert_eq!(notice_line(&toast), "  Pin geplaatst op **Paris**!");

        let error = Notice {
            level: NoticeLevel::Error,
            message: "Kan *_niet_* vertalen".to_string(),
        };
        assert_eq!(notice_line(&error), "  ✗ Kan *_niet_* vertalen");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
