// crates/input_core/src/input/consume.rs
use std::collections::HashSet;

use input_shared::{GamepadButton, Key};

/// Physical sources claimed during the current pass.
///
/// Lives for exactly one pass: the resolver clears it before polling a new
/// frame, so a claim never leaks into the next frame.
#[derive(Debug, Clone, Default)]
pub struct ConsumptionRegistry {
    keys: HashSet<Key>,
    buttons: HashSet<GamepadButton>,
}

impl ConsumptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.buttons.clear();
    }

    pub fn claim_key(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn claim_button(&mut self, button: GamepadButton) {
        self.buttons.insert(button);
    }

    pub fn key_claimed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    pub fn button_claimed(&self, button: GamepadButton) -> bool {
        self.buttons.contains(&button)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.buttons.is_empty()
    }
}
