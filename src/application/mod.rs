//! Application layer with the view-state reducer and catalogue services.

/// Catalogue services.
pub mod services;
/// View state and reducer.
pub mod state;

pub use services::visible_books;
pub use state::{ViewEvent, ViewState, reduce};
