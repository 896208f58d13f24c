// crates/input_shared/src/input_types.rs
//! Small, copyable identifiers for physical input sources and device classes.

use std::fmt;

use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Stable integer id for a registered binding, assigned in registration order.
pub type ActionId = u32;
pub const ACTION_NOT_FOUND: ActionId = u32::MAX;

/// Device-class filter. Decides which physical sources may drive a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Any,
    KeyboardMouse,
    Gamepad,
}

impl Mode {
    pub fn allows_gamepad(self) -> bool {
        !matches!(self, Mode::KeyboardMouse)
    }

    pub fn allows_keyboard_mouse(self) -> bool {
        !matches!(self, Mode::Gamepad)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::Any => "Any",
            Mode::KeyboardMouse => "Keyboard & Mouse",
            Mode::Gamepad => "Gamepad",
        };
        f.write_str(label)
    }
}

/// Direction used by digital-ized axes and scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// True when `value` lies beyond `threshold` on this side of zero.
    /// Sitting exactly on the threshold does not count.
    pub fn exceeds(self, value: f32, threshold: f32) -> bool {
        match self {
            Sign::Positive => value > threshold,
            Sign::Negative => value < -threshold,
        }
    }
}

/// A keyboard key or a mouse button. Both live in the same "button" namespace:
/// they are bound, polled and consumed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        Key::Keyboard(code)
    }
}

impl From<MouseButton> for Key {
    fn from(button: MouseButton) -> Self {
        Key::Mouse(button)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Keyboard(code) => write!(f, "{code:?}"),
            Key::Mouse(MouseButton::Other(n)) => write!(f, "Mouse {n}"),
            Key::Mouse(button) => write!(f, "Mouse {button:?}"),
        }
    }
}

/// Which connected gamepad the resolver reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GamepadId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    Back,
    Start,
    Guide,
    LeftThumb,
    RightThumb,
    DpadUp,
    DpadRight,
    DpadDown,
    DpadLeft,
}

impl GamepadButton {
    /// Short label suitable for on-screen prompts.
    pub fn label(self) -> &'static str {
        match self {
            GamepadButton::A => "A",
            GamepadButton::B => "B",
            GamepadButton::X => "X",
            GamepadButton::Y => "Y",
            GamepadButton::LeftBumper => "LB",
            GamepadButton::RightBumper => "RB",
            GamepadButton::Back => "Back",
            GamepadButton::Start => "Start",
            GamepadButton::Guide => "Guide",
            GamepadButton::LeftThumb => "LS",
            GamepadButton::RightThumb => "RS",
            GamepadButton::DpadUp => "Up",
            GamepadButton::DpadRight => "Right",
            GamepadButton::DpadDown => "Down",
            GamepadButton::DpadLeft => "Left",
        }
    }

    /// For d-pad buttons, the left-stick axis and direction that can stand in
    /// for them. Vertical axes treat negative values as "up".
    pub fn stick_equivalent(self) -> Option<(GamepadAxis, Sign)> {
        match self {
            GamepadButton::DpadLeft => Some((GamepadAxis::LeftX, Sign::Negative)),
            GamepadButton::DpadRight => Some((GamepadAxis::LeftX, Sign::Positive)),
            GamepadButton::DpadUp => Some((GamepadAxis::LeftY, Sign::Negative)),
            GamepadButton::DpadDown => Some((GamepadAxis::LeftY, Sign::Positive)),
            _ => None,
        }
    }
}

impl fmt::Display for GamepadButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamepadAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
    LeftTrigger,
    RightTrigger,
}
