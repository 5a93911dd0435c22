pub mod catalogue_filter;

pub use catalogue_filter::visible_books;
