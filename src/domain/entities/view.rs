//! Top-level views of the library screen.

use serde::{Deserialize, Serialize};

/// Top-level view shown in the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Book listing with the category filter bar.
    #[default]
    Books,
    /// Featured writers.
    Writers,
    /// Community discussion placeholder.
    Community,
    /// Reader profile placeholder.
    Profile,
}

impl View {
    /// Every view, in navigation order.
    pub const ALL: [Self; 4] = [Self::Books, Self::Writers, Self::Community, Self::Profile];

    /// Returns the navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Books => "पुस्तकें",
            Self::Writers => "लेखक",
            Self::Community => "समुदाय",
            Self::Profile => "प्रोफ़ाइल",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Books => 0,
            Self::Writers => 1,
            Self::Community => 2,
            Self::Profile => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
