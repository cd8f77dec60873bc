use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Which key drives each playback control.
///
/// Keys are host key codes (`"Space"`, `"KeyR"`, `"Escape"`). Only the
/// action table is serialized; the key index is derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeybindingOptions {
    /// Key code per action. Actions left out have no key.
    pub bindings: HashMap<KeyAction, String>,
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::TogglePause, "Space".into()),
            (KeyAction::Pause, "KeyP".into()),
            (KeyAction::Resume, "KeyG".into()),
            (KeyAction::Replay, "KeyR".into()),
            (KeyAction::Restart, "KeyT".into()),
            (KeyAction::Cancel, "Escape".into()),
            (KeyAction::CycleAlgorithm, "Tab".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Re-derive the key index after `bindings` was edited or loaded.
    ///
    /// When two actions share a key the later one in iteration order
    /// wins, so a warning is logged.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            if let Some(previous) = self.key_to_action.insert(key.clone(), *action)
            {
                log::warn!("key {key} bound to both {previous:?} and {action:?}");
            }
        }
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
