//! Panels - the five WandrWays feature views.
//!
//! Every panel is split in two:
//! - handler functions that take the [`Session`](crate::session::Session),
//!   the adapters they need and the user's input, and return an [`Outcome`]
//! - a pure `render` function that projects session state into a view model
//!
//! Handlers never mutate the session when they return a warning or error.

pub mod diary;
pub mod map;
pub mod packing;
pub mod tips;
pub mod translator;

/// Severity of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    /// Validation failure; the action was blocked before any side effect
    Warning,
    /// Recoverable failure of an external call or lookup
    Error,
    /// Short confirmation of a state change
    Toast,
}

/// One message produced by a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Everything a handler wants the user to see after one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notices: Vec<Notice>,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, level: NoticeLevel, message: impl Into<String>) -> Self {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
        self
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new().with(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new().with(NoticeLevel::Error, message)
    }

    pub fn toast(message: impl Into<String>) -> Self {
        Self::new().with(NoticeLevel::Toast, message)
    }

    /// True if any notice has the given level.
    pub fn has(&self, level: NoticeLevel) -> bool {
        self.notices.iter().any(|n| n.level == level)
    }
}

/// The five panels, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Translator,
    Packing,
    Map,
    Diary,
    Tips,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Translator,
        Panel::Packing,
        Panel::Map,
        Panel::Diary,
        Panel::Tips,
    ];

    /// Tab label shown in the panel menu.
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Translator => "🈯 Vertaler",
            Panel::Packing => "📋 Inpaklijst",
            Panel::Map => "🗺️  Landen Tracker",
            Panel::Diary => "✍️  Dagboek",
            Panel::Tips => "💡 Tips & Tricks",
        }
    }
}

/// Trim user input, treating whitespace-only as missing.
pub(crate) fn non_empty(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
