//! Presentation layer with UI components and event handling.

/// Key map and configurable bindings.
pub mod commands;
/// Event handling.
pub mod events;
/// Colour handling.
pub mod theme;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
