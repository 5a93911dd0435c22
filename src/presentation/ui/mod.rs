//! UI screens.

mod app;
mod library_screen;
pub mod utils;

pub use app::App;
pub use library_screen::{APP_TITLE, COPYRIGHT, LibraryScreen};
