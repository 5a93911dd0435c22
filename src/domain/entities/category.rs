//! Genres and the category filter built on top of them.

/// Literary genre of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    /// उपन्यास
    Novel,
    /// नाटक
    Play,
    /// कहानी
    Story,
    /// कविता
    Poetry,
}

impl Genre {
    /// Every genre, in the order the filter bar lists them.
    pub const ALL: [Self; 4] = [Self::Novel, Self::Play, Self::Story, Self::Poetry];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Novel => "उपन्यास",
            Self::Play => "नाटक",
            Self::Story => "कहानी",
            Self::Poetry => "कविता",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Category filter applied to the book listing.
///
/// The set is closed: a value of this type is always one of the labels on the
/// filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Sentinel that matches every genre.
    #[default]
    All,
    /// Matches exactly one genre.
    Genre(Genre),
}

impl Category {
    /// Label of the "all" sentinel.
    pub const ALL_LABEL: &'static str = "सभी";

    /// Every category, sentinel first.
    pub const ALL: [Self; 5] = [
        Self::All,
        Self::Genre(Genre::Novel),
        Self::Genre(Genre::Play),
        Self::Genre(Genre::Story),
        Self::Genre(Genre::Poetry),
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Genre(genre) => genre.label(),
        }
    }

    /// Returns whether a book of `genre` belongs to this category.
    #[must_use]
    pub fn matches(self, genre: Genre) -> bool {
        match self {
            Self::All => true,
            Self::Genre(own) => own == genre,
        }
    }

    /// Position on the filter bar.
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next category on the bar, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous category on the bar, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
