use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// The three top-level views of the application.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Methodology browsing, with the reference sections.
    #[default]
    Guide,
    /// The session currently being edited.
    Session,
    /// Saved sessions.
    History,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Guide => "Methodologies",
            Tab::Session => "Active Session",
            Tab::History => "History",
        }
    }
}
