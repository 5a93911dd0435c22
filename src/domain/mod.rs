//! Domain layer with catalogue entities and input definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;

pub use entities::{Book, Category, View, Writer};
pub use errors::KeybindingError;
