//! Keyboard mapping
//!
//! Physical keys are tracked individually and folded into the logical
//! `Action` set, so holding `ArrowUp` and `w` together and releasing one still
//! leaves Forward held.

use super::InputSource;
use crate::sim::{Action, TickInput};

/// Physical key (as reported by `KeyboardEvent.key`) to action
const BINDINGS: [(&str, Action); 8] = [
    ("ArrowLeft", Action::Left),
    ("ArrowRight", Action::Right),
    ("ArrowUp", Action::Forward),
    ("w", Action::Forward),
    ("W", Action::Forward),
    ("ArrowDown", Action::Backward),
    ("s", Action::Backward),
    ("S", Action::Backward),
];

fn binding_index(key: &str) -> Option<usize> {
    BINDINGS.iter().position(|(name, _)| *name == key)
}

/// Action bound to a key, if any
pub fn action_for_key(key: &str) -> Option<Action> {
    binding_index(key).map(|i| BINDINGS[i].1)
}

/// Held-key tracker
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    down: [bool; BINDINGS.len()],
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true if the key is bound (the host should
    /// suppress its default action, e.g. page scrolling).
    pub fn key_down(&mut self, key: &str) -> bool {
        match binding_index(key) {
            Some(i) => {
                self.down[i] = true;
                true
            }
            None => false,
        }
    }

    /// Record a key release. Unbound keys are ignored.
    pub fn key_up(&mut self, key: &str) -> bool {
        match binding_index(key) {
            Some(i) => {
                self.down[i] = false;
                true
            }
            None => false,
        }
    }

    /// Release everything (window lost focus)
    pub fn clear(&mut self) {
        self.down = [false; BINDINGS.len()];
    }
}

impl InputSource for Keyboard {
    fn held(&self) -> TickInput {
        let mut input = TickInput::default();
        for (i, (_, action)) in BINDINGS.iter().enumerate() {
            if self.down[i] {
                input.set(*action, true);
            }
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(action_for_key("ArrowLeft"), Some(Action::Left));
        assert_eq!(action_for_key("W"), Some(Action::Forward));
        assert_eq!(action_for_key("s"), Some(Action::Backward));
        assert_eq!(action_for_key("a"), None);
        assert_eq!(action_for_key("Escape"), None);
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut kb = Keyboard::new();
        assert!(!kb.key_down("q"));
        assert_eq!(kb.held(), TickInput::default());
    }

    #[test]
    fn test_alias_keys_fold_into_one_action() {
        let mut kb = Keyboard::new();
        assert!(kb.key_down("ArrowUp"));
        assert!(kb.key_down("w"));
        assert!(kb.held().forward);

        kb.key_up("ArrowUp");
        assert!(kb.held().forward, "w still held");
        kb.key_up("w");
        assert!(!kb.held().forward);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut kb = Keyboard::new();
        kb.key_down("ArrowLeft");
        kb.key_down("S");
        let held = kb.held();
        assert!(held.left && held.backward && !held.right);
        kb.clear();
        assert_eq!(kb.held(), TickInput::default());
    }
}
