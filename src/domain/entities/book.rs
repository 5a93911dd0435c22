//! Book entity.

use super::category::Genre;

/// Unique identifier for a book in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub u64);

impl BookId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BookId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Reader engagement counters shown on a book card.
///
/// Display-only; nothing in the application mutates them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engagement {
    /// Number of likes.
    pub likes: u32,
    /// Number of comments.
    pub comments: u32,
    /// Number of shares.
    pub shares: u32,
}

impl Engagement {
    /// Creates a new set of counters.
    #[must_use]
    pub const fn new(likes: u32, comments: u32, shares: u32) -> Self {
        Self {
            likes,
            comments,
            shares,
        }
    }
}

/// A literary work in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: &'static str,
    author: &'static str,
    genre: Genre,
    cover_url: &'static str,
    year: u16,
    engagement: Engagement,
}

impl Book {
    /// Creates a book with no cover, year or engagement.
    #[must_use]
    pub const fn new(id: u64, title: &'static str, author: &'static str, genre: Genre) -> Self {
        Self {
            id: BookId(id),
            title,
            author,
            genre,
            cover_url: "",
            year: 0,
            engagement: Engagement::new(0, 0, 0),
        }
    }

    /// Sets the cover image reference.
    #[must_use]
    pub const fn with_cover(mut self, cover_url: &'static str) -> Self {
        self.cover_url = cover_url;
        self
    }

    /// Sets the publication year.
    #[must_use]
    pub const fn published(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    /// Sets the engagement counters.
    #[must_use]
    pub const fn with_engagement(mut self, engagement: Engagement) -> Self {
        self.engagement = engagement;
        self
    }

    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn author(&self) -> &'static str {
        self.author
    }

    #[must_use]
    pub const fn genre(&self) -> Genre {
        self.genre
    }

    /// Returns the opaque cover image reference. Empty when unknown.
    #[must_use]
    pub const fn cover_url(&self) -> &'static str {
        self.cover_url
    }

    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[must_use]
    pub const fn engagement(&self) -> Engagement {
        self.engagement
    }
}
