// crates/input_core/src/input/snapshot.rs
use std::collections::{HashMap, HashSet};

use glam::Vec2;
use input_shared::{GamepadAxis, GamepadButton, GamepadId, Key};

/// Read-only view of raw device state for one frame.
///
/// Implemented by the host's polling layer. Every query is side-effect free.
pub trait DeviceSnapshot {
    /// Cursor position in window coordinates.
    fn cursor(&self) -> Vec2;
    fn previous_cursor(&self) -> Vec2;

    fn key_pressed(&self, key: Key) -> bool;
    /// OS key-repeat fired for `key` this frame.
    fn key_repeated(&self, key: Key) -> bool;

    fn gamepad_present(&self, id: GamepadId) -> bool;
    fn gamepad_pressed(&self, id: GamepadId, button: GamepadButton) -> bool;
    /// Axis value in [-1, 1]; 0 for absent devices.
    fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> f32;

    fn window_focused(&self) -> bool;
    /// Text typed this frame.
    fn typed(&self) -> &str;
    /// Scroll delta this frame, `x` horizontal and `y` vertical.
    fn scroll(&self) -> Vec2;
}

#[derive(Debug, Clone, Default)]
pub struct GamepadSnapshot {
    pub buttons: HashSet<GamepadButton>,
    pub axes: HashMap<GamepadAxis, f32>,
}

/// Owned, plain-data snapshot. Built by [`InputPoller`](super::InputPoller)
/// or directly by hosts and tests.
#[derive(Debug, Clone, Default)]
pub struct FrameSnapshot {
    pub cursor: Vec2,
    pub previous_cursor: Vec2,
    pub pressed: HashSet<Key>,
    pub repeated: HashSet<Key>,
    pub gamepads: HashMap<GamepadId, GamepadSnapshot>,
    pub focused: bool,
    pub typed: String,
    pub scroll: Vec2,
}

impl FrameSnapshot {
    /// An empty snapshot of a focused window.
    pub fn focused() -> Self {
        Self {
            focused: true,
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.pressed.insert(key.into());
        self
    }

    pub fn with_repeat(mut self, key: impl Into<Key>) -> Self {
        self.repeated.insert(key.into());
        self
    }

    pub fn with_gamepad(mut self, id: GamepadId) -> Self {
        self.gamepads.entry(id).or_default();
        self
    }

    pub fn with_button(mut self, id: GamepadId, button: GamepadButton) -> Self {
        self.gamepads.entry(id).or_default().buttons.insert(button);
        self
    }

    pub fn with_axis(mut self, id: GamepadId, axis: GamepadAxis, value: f32) -> Self {
        self.gamepads.entry(id).or_default().axes.insert(axis, value);
        self
    }

    pub fn with_scroll(mut self, x: f32, y: f32) -> Self {
        self.scroll = Vec2::new(x, y);
        self
    }

    pub fn with_cursor(mut self, previous: Vec2, current: Vec2) -> Self {
        self.previous_cursor = previous;
        self.cursor = current;
        self
    }
}

impl DeviceSnapshot for FrameSnapshot {
    fn cursor(&self) -> Vec2 {
        self.cursor
    }

    fn previous_cursor(&self) -> Vec2 {
        self.previous_cursor
    }

    fn key_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    fn key_repeated(&self, key: Key) -> bool {
        self.repeated.contains(&key)
    }

    fn gamepad_present(&self, id: GamepadId) -> bool {
        self.gamepads.contains_key(&id)
    }

    fn gamepad_pressed(&self, id: GamepadId, button: GamepadButton) -> bool {
        self.gamepads
            .get(&id)
            .is_some_and(|pad| pad.buttons.contains(&button))
    }

    fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> f32 {
        self.gamepads
            .get(&id)
            .and_then(|pad| pad.axes.get(&axis).copied())
            .unwrap_or(0.0)
    }

    fn window_focused(&self) -> bool {
        self.focused
    }

    fn typed(&self) -> &str {
        &self.typed
    }

    fn scroll(&self) -> Vec2 {
        self.scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_shared::KeyCode;

    #[test]
    fn absent_gamepad_reads_as_idle() {
        let snap = FrameSnapshot::focused();
        let pad = GamepadId(0);
        assert!(!snap.gamepad_present(pad));
        assert!(!snap.gamepad_pressed(pad, GamepadButton::A));
        assert_eq!(snap.gamepad_axis(pad, GamepadAxis::LeftX), 0.0);
    }

    #[test]
    fn builder_populates_queries() {
        let pad = GamepadId(1);
        let snap = FrameSnapshot::focused()
            .with_key(KeyCode::Space)
            .with_repeat(KeyCode::Space)
            .with_button(pad, GamepadButton::B)
            .with_axis(pad, GamepadAxis::LeftY, -0.7)
            .with_scroll(0.0, 1.0);

        assert!(snap.key_pressed(KeyCode::Space.into()));
        assert!(snap.key_repeated(KeyCode::Space.into()));
        assert!(snap.gamepad_present(pad));
        assert!(snap.gamepad_pressed(pad, GamepadButton::B));
        assert_eq!(snap.gamepad_axis(pad, GamepadAxis::LeftY), -0.7);
        assert_eq!(snap.scroll(), Vec2::new(0.0, 1.0));
    }
}
