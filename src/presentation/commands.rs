use crate::domain::errors::KeybindingError;
use crate::domain::keybinding::{Action, Keybind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use tracing::{debug, warn};

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, code: KeyCode, modifiers: KeyModifiers, is_primary| {
            let key = KeyEvent::new(code, modifiers);
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(Action::Quit, KeyCode::Char('q'), KeyModifiers::NONE, true);
        register(Action::Cancel, KeyCode::Esc, KeyModifiers::NONE, true);

        register(Action::ShowBooks, KeyCode::Char('1'), KeyModifiers::NONE, true);
        register(Action::ShowWriters, KeyCode::Char('2'), KeyModifiers::NONE, true);
        register(Action::ShowCommunity, KeyCode::Char('3'), KeyModifiers::NONE, true);
        register(Action::ShowProfile, KeyCode::Char('4'), KeyModifiers::NONE, true);
        register(Action::NextView, KeyCode::Tab, KeyModifiers::NONE, true);
        register(Action::PreviousView, KeyCode::BackTab, KeyModifiers::SHIFT, true);
        register(Action::PreviousView, KeyCode::BackTab, KeyModifiers::NONE, false);

        register(Action::NextCategory, KeyCode::Right, KeyModifiers::NONE, true);
        register(Action::NextCategory, KeyCode::Char('l'), KeyModifiers::NONE, false);
        register(Action::PreviousCategory, KeyCode::Left, KeyModifiers::NONE, true);
        register(Action::PreviousCategory, KeyCode::Char('h'), KeyModifiers::NONE, false);

        register(Action::ToggleMenu, KeyCode::Char('m'), KeyModifiers::NONE, true);
        register(Action::NavigateUp, KeyCode::Up, KeyModifiers::NONE, true);
        register(Action::NavigateUp, KeyCode::Char('k'), KeyModifiers::NONE, false);
        register(Action::NavigateDown, KeyCode::Down, KeyModifiers::NONE, true);
        register(Action::NavigateDown, KeyCode::Char('j'), KeyModifiers::NONE, false);
        register(Action::Select, KeyCode::Enter, KeyModifiers::NONE, true);
        register(Action::Select, KeyCode::Char(' '), KeyModifiers::NONE, false);

        register(Action::ToggleTheme, KeyCode::Char('t'), KeyModifiers::NONE, true);

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the default registry and layers user bindings on top.
    #[must_use]
    pub fn with_overrides(overrides: &HashMap<String, Action>) -> Self {
        let mut registry = Self::default();
        for error in registry.apply_overrides(overrides) {
            warn!(error = %error, "Ignoring invalid keybinding");
        }
        registry
    }

    /// Binds each described key to its action, ahead of any default using
    /// the same key. Returns the descriptions that could not be parsed.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, Action>) -> Vec<KeybindingError> {
        let mut errors = Vec::new();

        for (description, action) in overrides {
            match parse_key(description) {
                Ok(key) => {
                    let same_key =
                        |k: &KeyEvent| k.code == key.code && k.modifiers == key.modifiers;
                    self.input_bindings.retain(|(k, _)| !same_key(k));
                    self.display_bindings.retain(|_, k| !same_key(&*k));
                    self.input_bindings.insert(0, (key, *action));
                    self.display_bindings.insert(*action, key);
                    debug!(key = %description, action = ?action, "Applied keybinding override");
                }
                Err(e) => errors.push(e),
            }
        }

        errors
    }

    #[must_use]
    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    #[must_use]
    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| k.code == key.code && k.modifiers == key.modifiers)
            .map(|(_, a)| *a)
    }

    /// Keybind for `action` using its primary key, if it has one.
    #[must_use]
    pub fn keybind(&self, action: Action, label: &'static str) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}

/// Parses descriptions such as `q`, `Ctrl+q`, `Alt+Enter` or `F5`.
///
/// # Errors
///
/// Returns `KeybindingError` for empty input, unknown key names or unknown
/// modifiers.
pub fn parse_key(description: &str) -> Result<KeyEvent, KeybindingError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(KeybindingError::Empty);
    }

    let (modifier_part, key_part) = match trimmed.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", trimmed),
    };

    let mut modifiers = KeyModifiers::NONE;
    for modifier in modifier_part.split('+').filter(|m| !m.is_empty()) {
        modifiers |= match modifier.to_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "a" | "meta" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return Err(KeybindingError::unknown_modifier(modifier, description)),
        };
    }

    let mut chars = key_part.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if c.is_ascii_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c)
        }
        _ => named_key(key_part)
            .ok_or_else(|| KeybindingError::unknown_key(key_part, description))?,
    };

    Ok(KeyEvent::new(code, modifiers))
}

fn named_key(name: &str) -> Option<KeyCode> {
    let lower = name.to_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "space" => KeyCode::Char(' '),
        "backspace" | "bksp" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => {
            let n = other.strip_prefix('f')?.parse::<u8>().ok()?;
            if (1..=12).contains(&n) {
                KeyCode::F(n)
            } else {
                return None;
            }
        }
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test_case(KeyCode::Char('q'), KeyModifiers::NONE, Some(Action::Quit) ; "quit")]
    #[test_case(KeyCode::Char('3'), KeyModifiers::NONE, Some(Action::ShowCommunity) ; "view_digit")]
    #[test_case(KeyCode::Char('l'), KeyModifiers::NONE, Some(Action::NextCategory) ; "vim_right")]
    #[test_case(KeyCode::BackTab, KeyModifiers::SHIFT, Some(Action::PreviousView) ; "back_tab")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::CONTROL, None ; "ctrl_q_unbound")]
    #[test_case(KeyCode::Char('z'), KeyModifiers::NONE, None ; "unbound")]
    fn test_default_bindings(code: KeyCode, modifiers: KeyModifiers, expected: Option<Action>) {
        let registry = CommandRegistry::new();
        assert_eq!(registry.find_action(key(code, modifiers)), expected);
    }

    #[test]
    fn test_primary_binding_is_displayed() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.get(Action::NextCategory),
            Some(key(KeyCode::Right, KeyModifiers::NONE))
        );
    }

    #[test_case("q", KeyCode::Char('q'), KeyModifiers::NONE ; "plain")]
    #[test_case("Ctrl+q", KeyCode::Char('q'), KeyModifiers::CONTROL ; "ctrl")]
    #[test_case("alt+Enter", KeyCode::Enter, KeyModifiers::ALT ; "alt_named")]
    #[test_case("G", KeyCode::Char('G'), KeyModifiers::SHIFT ; "uppercase_implies_shift")]
    #[test_case("F5", KeyCode::F(5), KeyModifiers::NONE ; "function_key")]
    #[test_case("Ctrl++", KeyCode::Char('+'), KeyModifiers::CONTROL ; "plus_key")]
    #[test_case("space", KeyCode::Char(' '), KeyModifiers::NONE ; "space")]
    fn test_parse_key(description: &str, code: KeyCode, modifiers: KeyModifiers) {
        assert_eq!(parse_key(description), Ok(key(code, modifiers)));
    }

    #[test]
    fn test_parse_key_errors() {
        assert_eq!(parse_key("  "), Err(KeybindingError::Empty));
        assert!(matches!(
            parse_key("Hyper+q"),
            Err(KeybindingError::UnknownModifier { .. })
        ));
        assert!(matches!(
            parse_key("Ctrl+nope"),
            Err(KeybindingError::UnknownKey { .. })
        ));
        assert!(matches!(parse_key("F13"), Err(KeybindingError::UnknownKey { .. })));
    }

    #[test]
    fn test_override_takes_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert("q".to_string(), Action::ToggleTheme);
        overrides.insert("Ctrl+x".to_string(), Action::Quit);
        overrides.insert("Bogus+1".to_string(), Action::Quit);

        let mut registry = CommandRegistry::new();
        let errors = registry.apply_overrides(&overrides);

        assert_eq!(errors.len(), 1);
        assert_eq!(
            registry.find_action(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::ToggleTheme)
        );
        assert_eq!(
            registry.get(Action::Quit),
            Some(key(KeyCode::Char('x'), KeyModifiers::CONTROL))
        );
        assert_eq!(
            registry.get(Action::ToggleTheme),
            Some(key(KeyCode::Char('q'), KeyModifiers::NONE))
        );
    }

    #[test]
    fn test_stolen_key_leaves_action_without_hint() {
        let mut overrides = HashMap::new();
        overrides.insert("t".to_string(), Action::Quit);

        let mut registry = CommandRegistry::new();
        assert!(registry.apply_overrides(&overrides).is_empty());

        assert_eq!(registry.get(Action::ToggleTheme), None);
        assert!(registry.keybind(Action::ToggleTheme, "Theme").is_none());
    }
}
