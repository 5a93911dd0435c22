//! Domain entity definitions.

mod appearance;
mod book;
mod category;
mod view;
mod writer;

pub use appearance::Appearance;
pub use book::{Book, BookId, Engagement};
pub use category::{Category, Genre};
pub use view::View;
pub use writer::{Writer, WriterId};
