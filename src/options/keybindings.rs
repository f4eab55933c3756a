use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Maps physical key strings to [`KeyAction`]s.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"KeyW"`, `"ShiftLeft"`, `"Space"`, etc. Several keys may share one
/// action (both shift keys are pan modifiers by default).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("KeyW".into(), KeyAction::MoveForward),
            ("KeyS".into(), KeyAction::MoveBackward),
            ("KeyA".into(), KeyAction::StrafeLeft),
            ("KeyD".into(), KeyAction::StrafeRight),
            ("KeyQ".into(), KeyAction::MoveDown),
            ("KeyE".into(), KeyAction::MoveUp),
            ("ShiftLeft".into(), KeyAction::PanModifier),
            ("ShiftRight".into(), KeyAction::PanModifier),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: impl Into<String>, action: KeyAction) {
        let _ = self.bindings.insert(key.into(), action);
    }

    /// Remove the binding for `key`, returning the action it had.
    pub fn unbind(&mut self, key: &str) -> Option<KeyAction> {
        self.bindings.remove(key)
    }
}
