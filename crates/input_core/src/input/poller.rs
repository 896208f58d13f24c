// crates/input_core/src/input/poller.rs

use glam::Vec2;
use input_shared::{GamepadAxis, GamepadButton, GamepadId, Key};
use tracing::trace;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::PhysicalKey;

use super::snapshot::FrameSnapshot;

/// Pixel scroll deltas are divided by this to match line-based wheels.
const PIXELS_PER_LINE: f32 = 20.0;

/// Low-level collector that folds winit window events into a [`FrameSnapshot`].
/// Gamepad state is pushed in by whichever gamepad backend the host runs.
pub struct InputPoller {
    frame: FrameSnapshot,
}

impl Default for InputPoller {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPoller {
    pub fn new() -> Self {
        Self {
            frame: FrameSnapshot::default(),
        }
    }

    /// Process a single winit WindowEvent and update the pending snapshot.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => {
                self.handle_keyboard_input(key_event);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_key(Key::Mouse(*button), *state, false);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.set_cursor(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_LINE
                    }
                };
                self.add_scroll(lines);
            }
            WindowEvent::Focused(focused) => self.set_focused(*focused),
            _ => {}
        }
    }

    fn handle_keyboard_input(&mut self, key_event: &KeyEvent) {
        if let PhysicalKey::Code(keycode) = key_event.physical_key {
            self.handle_key(Key::Keyboard(keycode), key_event.state, key_event.repeat);
        }
        if key_event.state == ElementState::Pressed {
            if let Some(text) = &key_event.text {
                self.push_text(text.as_str());
            }
        }
    }

    /// Record a key or mouse button transition. `repeat` marks OS key-repeat.
    pub fn handle_key(&mut self, key: Key, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                self.frame.pressed.insert(key);
                if repeat {
                    self.frame.repeated.insert(key);
                }
            }
            ElementState::Released => {
                self.frame.pressed.remove(&key);
            }
        }
    }

    pub fn set_cursor(&mut self, position: Vec2) {
        self.frame.cursor = position;
    }

    pub fn add_scroll(&mut self, delta: Vec2) {
        self.frame.scroll += delta;
    }

    pub fn push_text(&mut self, text: &str) {
        // Control characters (backspace, enter, ...) arrive as text too.
        self.frame
            .typed
            .extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Releases are not delivered while unfocused, so losing focus drops every
    /// held key.
    pub fn set_focused(&mut self, focused: bool) {
        self.frame.focused = focused;
        if !focused {
            self.frame.pressed.clear();
            self.frame.repeated.clear();
        }
        trace!(focused, "window focus changed");
    }

    pub fn set_gamepad_connected(&mut self, id: GamepadId, connected: bool) {
        if connected {
            self.frame.gamepads.entry(id).or_default();
        } else {
            self.frame.gamepads.remove(&id);
        }
    }

    /// Ignored for gamepads that are not connected.
    pub fn set_gamepad_button(&mut self, id: GamepadId, button: GamepadButton, pressed: bool) {
        if let Some(pad) = self.frame.gamepads.get_mut(&id) {
            if pressed {
                pad.buttons.insert(button);
            } else {
                pad.buttons.remove(&button);
            }
        }
    }

    pub fn set_gamepad_axis(&mut self, id: GamepadId, axis: GamepadAxis, value: f32) {
        if let Some(pad) = self.frame.gamepads.get_mut(&id) {
            pad.axes.insert(axis, value);
        }
    }

    /// Returns true if a given key or mouse button is currently held.
    pub fn is_key_active(&self, key: Key) -> bool {
        self.frame.pressed.contains(&key)
    }

    /// The snapshot accumulated since the last [`end_frame`](Self::end_frame).
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.frame
    }

    /// Drop per-frame data and carry held state into the next frame.
    pub fn end_frame(&mut self) {
        self.frame.previous_cursor = self.frame.cursor;
        self.frame.repeated.clear();
        self.frame.typed.clear();
        self.frame.scroll = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::snapshot::DeviceSnapshot;
    use input_shared::{KeyCode, MouseButton};

    #[test]
    fn keys_track_press_and_release() {
        let mut poller = InputPoller::new();
        let space = Key::from(KeyCode::Space);
        poller.handle_key(space, ElementState::Pressed, false);
        assert!(poller.is_key_active(space));
        assert!(!poller.snapshot().key_repeated(space));

        poller.handle_key(space, ElementState::Pressed, true);
        assert!(poller.snapshot().key_repeated(space));

        poller.end_frame();
        assert!(poller.is_key_active(space));
        assert!(!poller.snapshot().key_repeated(space));

        poller.handle_key(space, ElementState::Released, false);
        assert!(!poller.is_key_active(space));
    }

    #[test]
    fn end_frame_resets_per_frame_data() {
        let mut poller = InputPoller::new();
        poller.set_cursor(Vec2::new(5.0, 6.0));
        poller.add_scroll(Vec2::new(0.0, 1.0));
        poller.add_scroll(Vec2::new(0.0, 1.0));
        poller.push_text("a\u{8}b");
        assert_eq!(poller.snapshot().scroll(), Vec2::new(0.0, 2.0));
        assert_eq!(poller.snapshot().typed(), "ab");

        poller.end_frame();
        let snap = poller.snapshot();
        assert_eq!(snap.previous_cursor(), Vec2::new(5.0, 6.0));
        assert_eq!(snap.cursor(), Vec2::new(5.0, 6.0));
        assert_eq!(snap.scroll(), Vec2::ZERO);
        assert_eq!(snap.typed(), "");
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut poller = InputPoller::new();
        poller.set_focused(true);
        poller.handle_key(Key::Mouse(MouseButton::Left), ElementState::Pressed, false);
        poller.set_focused(false);
        assert!(!poller.snapshot().window_focused());
        assert!(!poller.is_key_active(Key::Mouse(MouseButton::Left)));
    }

    #[test]
    fn gamepad_state_requires_connection() {
        let mut poller = InputPoller::new();
        let pad = GamepadId(0);
        poller.set_gamepad_button(pad, GamepadButton::A, true);
        assert!(!poller.snapshot().gamepad_present(pad));

        poller.set_gamepad_connected(pad, true);
        poller.set_gamepad_button(pad, GamepadButton::A, true);
        poller.set_gamepad_axis(pad, GamepadAxis::LeftX, 0.5);
        assert!(poller.snapshot().gamepad_pressed(pad, GamepadButton::A));
        assert_eq!(poller.snapshot().gamepad_axis(pad, GamepadAxis::LeftX), 0.5);

        poller.set_gamepad_connected(pad, false);
        assert!(!poller.snapshot().gamepad_pressed(pad, GamepadButton::A));
    }

    #[test]
    fn focus_event_is_handled() {
        let mut poller = InputPoller::new();
        poller.handle_event(&WindowEvent::Focused(true));
        assert!(poller.snapshot().window_focused());
    }
}
