//! Colour handling and resolved styles.

pub mod adapter;
mod service;

pub use service::Theme;
