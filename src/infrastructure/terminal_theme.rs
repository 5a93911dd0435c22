//! Terminal background detection for the `auto` theme mode.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::entities::Appearance;
use crate::infrastructure::config::ThemeMode;

const DETECTION_TIMEOUT: Duration = Duration::from_millis(100);

/// Resolves the configured theme mode to a concrete appearance.
///
/// Must run before the terminal is switched to the alternate screen, since the
/// query talks to the terminal directly.
#[must_use]
pub fn resolve_appearance(mode: ThemeMode) -> Appearance {
    match mode {
        ThemeMode::Dark => Appearance::Dark,
        ThemeMode::Light => Appearance::Light,
        ThemeMode::Auto => detect_appearance(),
    }
}

fn detect_appearance() -> Appearance {
    match termbg::theme(DETECTION_TIMEOUT) {
        Ok(termbg::Theme::Light) => {
            debug!("Detected light terminal background");
            Appearance::Light
        }
        Ok(termbg::Theme::Dark) => {
            debug!("Detected dark terminal background");
            Appearance::Dark
        }
        Err(e) => {
            warn!(error = %e, "Terminal background detection failed, using dark");
            Appearance::Dark
        }
    }
}
