//! Packing panel - a checklist of things to bring.

use super::{non_empty, Outcome};
use crate::session::Session;

pub const HEADING: &str = "Wat moet er mee?";
pub const PLACEHOLDER: &str = "Je inpaklijst is nog leeg.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxRow {
    pub label: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackingView {
    pub heading: &'static str,
    pub items: Vec<CheckboxRow>,
    /// Set when the list is empty
    pub placeholder: Option<&'static str>,
}

pub fn render(session: &Session) -> PackingView {
    let items: Vec<CheckboxRow> = session
        .packing_items()
        .iter()
        .map(|item| CheckboxRow {
            label: item.label.clone(),
            checked: item.checked,
        })
        .collect();

    PackingView {
        heading: HEADING,
        placeholder: items.is_empty().then_some(PLACEHOLDER),
        items,
    }
}

/// Add an item to the list.
pub fn submit(session: &mut Session, label: &str) -> Outcome {
    match non_empty(label) {
        Some(label) => {
            session.append_packing_item(label);
            Outcome::new()
        }
        None => Outcome::warning("Typ eerst wat je mee wilt nemen."),
    }
}

/// Flip the checkbox of item `index` (0-based).
pub fn toggle(session: &mut Session, index: usize) -> Outcome {
    match session.toggle_packing_item(index) {
        Some(_) => Outcome::new(),
        None => Outcome::warning(format!("Item {} staat niet op je lijst.", index + 1)),
    }
}
