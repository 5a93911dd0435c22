//! Built-in catalogue content.

use crate::domain::entities::{Book, Category, Engagement, Genre, Writer};

static BOOKS: [Book; 3] = [
    Book::new(1, "गोदान", "मुंशी प्रेमचंद", Genre::Novel)
        .with_cover(
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?auto=format&fit=crop&q=80&w=400",
        )
        .published(1936)
        .with_engagement(Engagement::new(2345, 128, 456)),
    Book::new(2, "आंधायुग", "धर्मवीर भारती", Genre::Play)
        .with_cover(
            "https://images.unsplash.com/photo-1519682337058-a94d519337bc?auto=format&fit=crop&q=80&w=400",
        )
        .published(1954)
        .with_engagement(Engagement::new(1890, 89, 234)),
    Book::new(3, "निर्मला", "मुंशी प्रेमचंद", Genre::Novel)
        .with_cover(
            "https://images.unsplash.com/photo-1476275466078-4007374efbbe?auto=format&fit=crop&q=80&w=400",
        )
        .published(1925)
        .with_engagement(Engagement::new(2156, 167, 378)),
];

static WRITERS: [Writer; 2] = [
    Writer::new(1, "राजेश कुमार", "आधुनिक हिंदी कविता और कहानी के लेखक")
        .with_avatar(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=100",
        )
        .with_followers(1234),
    Writer::new(2, "मीरा शर्मा", "उपन्यासकार और समीक्षक")
        .with_avatar(
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=100",
        )
        .with_followers(2345),
];

static RIDDLES: [&str; 5] = [
    "जो बोले वो खो जाए, जो मौन रहे वो पा जाए। क्या है वो?",
    "आँख से देखा न जाए, बिना आँख के पहचाना जाए। क्या है वो?",
    "जब तक जीवित था तब तक चला नहीं, मरने के बाद चलने लगा। क्या है वो?",
    "एक राजा की कोई रानी नहीं, फिर भी राजा के बेटे हैं। कैसे?",
    "जो है वो दिखता नहीं, जो दिखता है वो है नहीं। क्या है वो?",
];

const DISCUSSION_TOPIC: &str = "क्या आधुनिक हिंदी साहित्य में प्रेमचंद की प्रासंगिकता कम हो रही है?";

/// Immutable catalogue content: books, writers, riddles and the discussion stub.
#[derive(Debug, Clone, Copy)]
pub struct Catalogue {
    books: &'static [Book],
    writers: &'static [Writer],
    riddles: &'static [&'static str],
    discussion_topic: &'static str,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalogue {
    /// The catalogue shipped with the application.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            books: &BOOKS,
            writers: &WRITERS,
            riddles: &RIDDLES,
            discussion_topic: DISCUSSION_TOPIC,
        }
    }

    #[must_use]
    pub const fn books(&self) -> &'static [Book] {
        self.books
    }

    #[must_use]
    pub const fn writers(&self) -> &'static [Writer] {
        self.writers
    }

    #[must_use]
    pub const fn riddles(&self) -> &'static [&'static str] {
        self.riddles
    }

    /// Riddle at `index`, or `None` past the end of the list.
    #[must_use]
    pub fn riddle(&self, index: usize) -> Option<&'static str> {
        self.riddles.get(index).copied()
    }

    #[must_use]
    pub const fn discussion_topic(&self) -> &'static str {
        self.discussion_topic
    }

    /// Labels on the filter bar, sentinel first.
    #[must_use]
    pub const fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }
}
