//! Infrastructure layer: configuration, fixtures and runtime services.

/// Application configuration.
pub mod config;
/// Built-in catalogue content.
pub mod fixtures;
/// Periodic riddle rotation.
pub mod rotation;
/// Terminal background detection.
pub mod terminal_theme;

pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use fixtures::Catalogue;
pub use rotation::{DEFAULT_ROTATION_PERIOD, RotationTimer};
pub use terminal_theme::resolve_appearance;
