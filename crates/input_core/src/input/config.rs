// crates/input_core/src/input/config.rs
//! Plain-data binding definitions handed over by the host's config layer.
//!
//! Nothing here reads files; hosts deserialize these types from whatever
//! format they ship and pass the result to [`InputResolver::from_config`].
//!
//! [`InputResolver::from_config`]: super::InputResolver::from_config

use std::collections::BTreeMap;

use input_shared::{GamepadAxis, GamepadButton, GamepadId, Key, KeyCode, Mode, Sign};
use serde::{Deserialize, Serialize};

use super::binding::ButtonBinding;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    pub deadzone: f32,
    pub mode: Mode,
    pub stick_as_dpad: bool,
    pub gamepad: Option<GamepadId>,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            deadzone: 0.2,
            mode: Mode::Any,
            stick_as_dpad: false,
            gamepad: Some(GamepadId(0)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDef {
    pub axis: GamepadAxis,
    pub sign: Sign,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingDef {
    pub keys: Vec<Key>,
    pub buttons: Vec<GamepadButton>,
    pub axis: Option<AxisDef>,
    pub scroll: Option<Sign>,
    /// Never read the gamepad for this binding.
    pub joyless: bool,
}

impl BindingDef {
    pub fn into_binding(self) -> ButtonBinding {
        let mut binding = ButtonBinding::new();
        for key in self.keys {
            binding = binding.add_key(key);
        }
        for button in self.buttons {
            binding = binding.add_button(button);
        }
        if let Some(AxisDef { axis, sign }) = self.axis {
            binding = binding.add_axis(axis, sign);
        }
        if let Some(sign) = self.scroll {
            binding = binding.add_scroll(sign);
        }
        if self.joyless {
            binding = binding.exclude_gamepad();
        }
        binding
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub settings: InputSettings,
    pub axes: BTreeMap<String, GamepadAxis>,
    pub bindings: BTreeMap<String, BindingDef>,
}

impl InputConfig {
    /// Canonical movement: WASD and arrows, the d-pad, and the left stick both
    /// as analog axes and as digital directions.
    pub fn movement_defaults() -> Self {
        let dir = |keys: [KeyCode; 2], button, axis, sign| BindingDef {
            keys: keys.into_iter().map(Key::from).collect(),
            buttons: vec![button],
            axis: Some(AxisDef { axis, sign }),
            ..Default::default()
        };

        let mut config = Self::default();
        config.axes.insert("MoveX".into(), GamepadAxis::LeftX);
        config.axes.insert("MoveY".into(), GamepadAxis::LeftY);
        config.bindings.insert(
            "MoveUp".into(),
            dir([KeyCode::KeyW, KeyCode::ArrowUp], GamepadButton::DpadUp, GamepadAxis::LeftY, Sign::Negative),
        );
        config.bindings.insert(
            "MoveDown".into(),
            dir([KeyCode::KeyS, KeyCode::ArrowDown], GamepadButton::DpadDown, GamepadAxis::LeftY, Sign::Positive),
        );
        config.bindings.insert(
            "MoveLeft".into(),
            dir([KeyCode::KeyA, KeyCode::ArrowLeft], GamepadButton::DpadLeft, GamepadAxis::LeftX, Sign::Negative),
        );
        config.bindings.insert(
            "MoveRight".into(),
            dir([KeyCode::KeyD, KeyCode::ArrowRight], GamepadButton::DpadRight, GamepadAxis::LeftX, Sign::Positive),
        );
        config
    }
}
