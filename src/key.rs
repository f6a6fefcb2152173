//! Key bindings for component interaction.
//!
//! A [`Binding`] ties one action to any number of key combinations and
//! carries the help text shown for it. Bindings can be disabled at runtime,
//! which makes them stop matching without being removed. Useful for actions
//! that are temporarily unavailable, like a disabled navigation button.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// Help text for a binding: the keys as displayed, and what they do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Help {
    /// The key combination as shown to the user, e.g. `"ctrl+s"`.
    pub key: String,
    /// Short description of the action, e.g. `"save"`.
    pub desc: String,
}

/// One action's key combinations, help text, and availability.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<(KeyCode, KeyModifiers)>,
    help: Option<Help>,
    disabled: bool,
}

impl Binding {
    /// Creates a binding matching the given unmodified keys.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|code| (code, KeyModifiers::NONE))
                .collect(),
            help: None,
            disabled: false,
        }
    }

    /// Adds a key combination that requires modifiers, e.g. ctrl+s.
    pub fn with_combo(mut self, code: KeyCode, modifiers: KeyModifiers) -> Self {
        self.keys.push((code, modifiers));
        self
    }

    /// Attaches help text to this binding.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Some(Help {
            key: key.into(),
            desc: desc.into(),
        });
        self
    }

    /// The help text, if any was attached.
    pub fn help(&self) -> Option<&Help> {
        self.help.as_ref()
    }

    /// Whether this binding currently matches anything.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Enables or disables this binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the given key message activates this binding.
    pub fn matches(&self, key: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&(key.key, key.modifiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_msg(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_matches_bare_key() {
        let binding = Binding::new(vec![KeyCode::Esc, KeyCode::Char('q')]);
        assert!(binding.matches(&key_msg(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(binding.matches(&key_msg(KeyCode::Char('q'), KeyModifiers::NONE)));
        assert!(!binding.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let binding =
            Binding::new(vec![]).with_combo(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(binding.matches(&key_msg(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key_msg(KeyCode::Char('s'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = Binding::new(vec![KeyCode::Enter]);
        binding.set_enabled(false);
        assert!(!binding.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));

        binding.set_enabled(true);
        assert!(binding.matches(&key_msg(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_round_trips() {
        let binding = Binding::new(vec![KeyCode::Esc]).with_help("esc", "dismiss");
        let help = binding.help().expect("help was attached");
        assert_eq!(help.key, "esc");
        assert_eq!(help.desc, "dismiss");
    }
}
