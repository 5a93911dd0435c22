//! Event handling.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Classifies raw terminal events before they reach the key map.
pub struct EventHandler;

impl EventHandler {
    /// Key presses only; release and repeat reports are dropped.
    #[must_use]
    pub fn as_key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
            _ => None,
        }
    }

    /// `Ctrl+c` always quits, whatever the configured bindings say.
    #[must_use]
    pub fn is_force_quit(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// New terminal width, if the event is a resize.
    #[must_use]
    pub const fn resized_width(event: &Event) -> Option<u16> {
        match event {
            Event::Resize(width, _) => Some(*width),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, modifiers, kind)
    }

    #[test]
    fn test_force_quit() {
        assert!(EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press
        )));
        assert!(!EventHandler::is_force_quit(&make_key_event(
            KeyCode::Char('c'),
            KeyModifiers::NONE,
            KeyEventKind::Press
        )));
    }

    #[test]
    fn test_only_presses_pass() {
        let press = make_key_event(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Press);
        let release = make_key_event(KeyCode::Char('q'), KeyModifiers::NONE, KeyEventKind::Release);

        assert_eq!(EventHandler::as_key_press(&Event::Key(press)), Some(press));
        assert_eq!(EventHandler::as_key_press(&Event::Key(release)), None);
        assert_eq!(EventHandler::as_key_press(&Event::Resize(80, 24)), None);
    }

    #[test]
    fn test_resize_width() {
        assert_eq!(EventHandler::resized_width(&Event::Resize(132, 40)), Some(132));
        assert_eq!(EventHandler::resized_width(&Event::FocusGained), None);
    }
}
