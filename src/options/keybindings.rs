use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::SphereError;
use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"ArrowLeft"`, `"Space"`, `"KeyR"`, etc.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `YawLeft` → `"ArrowLeft"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::YawLeft, "ArrowLeft".into()),
            (KeyAction::YawRight, "ArrowRight".into()),
            (KeyAction::PitchUp, "ArrowUp".into()),
            (KeyAction::PitchDown, "ArrowDown".into()),
            (KeyAction::ResetOrientation, "Space".into()),
            (KeyAction::ResetCamera, "KeyR".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings
            .iter()
            .find_map(|(action, bound)| (bound == key).then_some(*action))
    }

    /// Reject a key bound to more than one action.
    pub fn validate(&self) -> Result<(), SphereError> {
        let mut seen = HashSet::with_capacity(self.bindings.len());
        for key in self.bindings.values() {
            if !seen.insert(key.as_str()) {
                return Err(SphereError::config(format!(
                    "keybindings: \"{key}\" is bound to more than one action"
                )));
            }
        }
        Ok(())
    }
}
