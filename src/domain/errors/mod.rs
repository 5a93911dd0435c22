//! Domain error types.

mod keybinding_error;

pub use keybinding_error::KeybindingError;
