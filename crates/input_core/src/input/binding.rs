// crates/input_core/src/input/binding.rs
use input_shared::{GamepadAxis, GamepadButton, GamepadId, Key, Mode, Sign};

use super::button::Button;
use super::consume::ConsumptionRegistry;
use super::snapshot::DeviceSnapshot;

/// Per-pass settings every binding resolves against.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext {
    /// The bound gamepad, only when it is connected this frame.
    pub gamepad: Option<GamepadId>,
    pub mode: Mode,
    pub deadzone: f32,
    pub stick_as_dpad: bool,
    /// Increments once per resolved frame.
    pub pass: u64,
}

/// A logical action and the physical sources that can drive it.
#[derive(Debug, Clone, Default)]
pub struct ButtonBinding {
    keys: Vec<Key>,
    gamepad_buttons: Vec<GamepadButton>,
    digital_axis: Option<(GamepadAxis, Sign)>,
    digital_scroll: Option<Sign>,
    exclude_gamepad: bool,
    button: Button,
    last_mode: Mode,
    // `pressed` as it stood when the pass in `resolved_pass` started.
    pass_start_pressed: bool,
    resolved_pass: Option<u64>,
}

impl ButtonBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buttons(key: impl Into<Key>, button: GamepadButton) -> Self {
        Self::new().add_key(key).add_button(button)
    }

    /// A keyboard/mouse-only binding that never reads the gamepad.
    pub fn joyless(key: impl Into<Key>) -> Self {
        Self::new().add_key(key).exclude_gamepad()
    }

    pub fn add_key(mut self, key: impl Into<Key>) -> Self {
        let key = key.into();
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        self
    }

    pub fn add_button(mut self, button: GamepadButton) -> Self {
        if !self.gamepad_buttons.contains(&button) {
            self.gamepad_buttons.push(button);
        }
        self
    }

    /// Treat `axis` pushed past the dead zone towards `sign` as a press.
    /// Replaces any previously bound axis.
    pub fn add_axis(mut self, axis: GamepadAxis, sign: Sign) -> Self {
        self.digital_axis = Some((axis, sign));
        self
    }

    /// Treat vertical scroll towards `sign` as a press.
    pub fn add_scroll(mut self, sign: Sign) -> Self {
        self.digital_scroll = Some(sign);
        self
    }

    pub fn exclude_gamepad(mut self) -> Self {
        self.exclude_gamepad = true;
        self
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn gamepad_buttons(&self) -> &[GamepadButton] {
        &self.gamepad_buttons
    }

    pub fn digital_axis(&self) -> Option<(GamepadAxis, Sign)> {
        self.digital_axis
    }

    pub fn digital_scroll(&self) -> Option<Sign> {
        self.digital_scroll
    }

    pub fn excludes_gamepad(&self) -> bool {
        self.exclude_gamepad
    }

    pub fn has_source(&self) -> bool {
        !self.keys.is_empty()
            || !self.gamepad_buttons.is_empty()
            || self.digital_axis.is_some()
            || self.digital_scroll.is_some()
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Device class that drove the binding in its last resolution; `Any` when
    /// nothing did.
    pub fn last_mode(&self) -> Mode {
        self.last_mode
    }

    /// Recompute the button from `snapshot`, skipping sources in `consumed`.
    ///
    /// Resolving the same binding twice within one pass compares against the
    /// state from before the pass, so edges stay correct.
    pub fn resolve<S>(&mut self, ctx: &ResolveContext, snapshot: &S, consumed: &ConsumptionRegistry)
    where
        S: DeviceSnapshot + ?Sized,
    {
        if self.resolved_pass != Some(ctx.pass) {
            self.pass_start_pressed = self.button.pressed();
            self.resolved_pass = Some(ctx.pass);
        }

        let mut now_pressed = false;
        let mut now_repeated = false;
        let mut driving_mode = Mode::Any;

        let pad = ctx
            .gamepad
            .filter(|_| !self.exclude_gamepad && ctx.mode.allows_gamepad());

        if let Some(pad) = pad {
            for &button in &self.gamepad_buttons {
                if consumed.button_claimed(button) {
                    continue;
                }
                if snapshot.gamepad_pressed(pad, button) {
                    now_pressed = true;
                    driving_mode = Mode::Gamepad;
                }
                if ctx.stick_as_dpad {
                    if let Some((axis, sign)) = button.stick_equivalent() {
                        if sign.exceeds(snapshot.gamepad_axis(pad, axis), ctx.deadzone) {
                            now_pressed = true;
                            driving_mode = Mode::Gamepad;
                        }
                    }
                }
            }

            if let Some((axis, sign)) = self.digital_axis {
                if sign.exceeds(snapshot.gamepad_axis(pad, axis), ctx.deadzone) {
                    now_pressed = true;
                    driving_mode = Mode::Gamepad;
                }
            }
        }

        if ctx.mode.allows_keyboard_mouse() {
            for &key in &self.keys {
                if consumed.key_claimed(key) {
                    continue;
                }
                if snapshot.key_pressed(key) {
                    now_pressed = true;
                    driving_mode = Mode::KeyboardMouse;
                }
                now_repeated |= snapshot.key_repeated(key);
            }

            if let Some(sign) = self.digital_scroll {
                if sign.exceeds(snapshot.scroll().y, 0.0) {
                    now_pressed = true;
                    driving_mode = Mode::KeyboardMouse;
                }
            }
        }

        self.button = Button::next(self.pass_start_pressed, now_pressed, now_repeated);
        self.last_mode = driving_mode;
    }

    /// Zero the button and claim every bound key and gamepad button for the
    /// rest of the pass. Bindings already resolved this pass keep their state.
    pub fn consume(&mut self, consumed: &mut ConsumptionRegistry) {
        self.button.clear();
        for &key in &self.keys {
            consumed.claim_key(key);
        }
        for &button in &self.gamepad_buttons {
            consumed.claim_button(button);
        }
    }
}
