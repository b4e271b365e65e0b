//! Tips panel - static travel advice.

pub const HEADING: &str = "WandrWays Reisadvies";
pub const INTRO: &str = "De gouden regels voor een zorgeloze start van je reis:";

pub const TIPS: [&str; 3] = [
    "1. **Check je lijstje 3x voor vertrek.** 📝",
    "2. **Check je tassen en/of koffers goed na.** 🧳",
    "3. **Leg je paspoort/ID-kaart op een plek waar je het ziet liggen wanneer je vertrekt.** 🛂",
];

pub const INSPIRATION_HEADING: &str = "Extra WandrWays Inspiratie";
pub const INSPIRATION: &str =
    "💡 *Tip: Maak ook altijd even een foto van je belangrijke documenten als backup op je telefoon.*";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipsView {
    pub heading: &'static str,
    pub intro: &'static str,
    pub tips: &'static [&'static str],
    pub inspiration_heading: &'static str,
    pub inspiration: &'static str,
}

pub fn render() -> TipsView {
    TipsView {
        heading: HEADING,
        intro: INTRO,
        tips: &TIPS,
        inspiration_heading: INSPIRATION_HEADING,
        inspiration: INSPIRATION,
    }
}
