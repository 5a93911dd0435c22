//! Sahitya - a terminal catalogue of Hindi literature.
//!
//! The crate renders a fixed catalogue of books, writers and riddles as a
//! single full-screen TUI. All screen state is one `Copy` value driven by a
//! pure reducer; a scoped timer rotates the riddle banner.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the view state, reducer and filtering.
pub mod application;
/// Domain layer containing entities, keybindings and errors.
pub mod domain;
/// Infrastructure layer containing configuration, fixtures and timers.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "sahitya";
