//! Derivation of the visible book listing.

use crate::domain::entities::{Book, Category};

/// Returns the books shown for `category`, in catalogue order.
///
/// [`Category::All`] yields every record; any other category yields the
/// records whose genre equals it. The input is never modified.
#[must_use]
pub fn visible_books(books: &[Book], category: Category) -> Vec<&Book> {
    books
        .iter()
        .filter(|book| category.matches(book.genre()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BookId, Genre};
    use crate::infrastructure::fixtures::Catalogue;

    fn sample() -> Vec<Book> {
        vec![
            Book::new(1, "गोदान", "मुंशी प्रेमचंद", Genre::Novel),
            Book::new(2, "आंधायुग", "धर्मवीर भारती", Genre::Play),
            Book::new(3, "निर्मला", "मुंशी प्रेमचंद", Genre::Novel),
        ]
    }

    fn ids(books: &[&Book]) -> Vec<BookId> {
        books.iter().map(|b| b.id()).collect()
    }

    #[test]
    fn test_novel_yields_matching_books_in_order() {
        let books = sample();
        let visible = visible_books(&books, Category::Genre(Genre::Novel));
        assert_eq!(ids(&visible), [BookId(1), BookId(3)]);
    }

    #[test]
    fn test_all_yields_every_book() {
        let books = sample();
        let visible = visible_books(&books, Category::All);
        assert_eq!(ids(&visible), [BookId(1), BookId(2), BookId(3)]);
    }

    #[test]
    fn test_genre_without_books_yields_nothing() {
        let books = sample();
        assert!(visible_books(&books, Category::Genre(Genre::Poetry)).is_empty());
    }

    #[test]
    fn test_every_category_returns_only_matching_genres() {
        let catalogue = Catalogue::builtin();
        for category in Category::ALL {
            let visible = visible_books(catalogue.books(), category);
            match category {
                Category::All => assert_eq!(visible.len(), catalogue.books().len()),
                Category::Genre(genre) => {
                    assert!(visible.iter().all(|b| b.genre() == genre));
                    let expected = catalogue
                        .books()
                        .iter()
                        .filter(|b| b.genre() == genre)
                        .count();
                    assert_eq!(visible.len(), expected);
                }
            }
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let books = sample();
        for category in Category::ALL {
            assert_eq!(
                visible_books(&books, category),
                visible_books(&books, category)
            );
        }
    }

    #[test]
    fn test_empty_catalogue() {
        assert!(visible_books(&[], Category::All).is_empty());
    }
}
