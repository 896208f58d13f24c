// crates/input_core/src/input/resolver.rs
use std::collections::HashMap;

use glam::{Affine2, Vec2};
use input_shared::{ActionId, GamepadAxis, GamepadId, Mode};
use tracing::{debug, trace, warn};

use super::axis::AxisState;
use super::binding::{ButtonBinding, ResolveContext};
use super::config::{InputConfig, InputSettings};
use super::consume::ConsumptionRegistry;
use super::registry::ActionRegistry;
use super::snapshot::DeviceSnapshot;
use crate::error::{InputError, Result};

/// Window focus as seen by the resolver.
///
/// The first focused frame after a loss is swallowed so residual device state
/// at focus time cannot produce a spurious edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Unfocused,
    JustFocused,
    Focused,
}

/// Result of [`InputResolver::any_just_pressed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnyPress {
    pub action: ActionId,
    pub mode: Mode,
}

/// A binding lookup that may have missed. Every accessor reads `false` (or
/// `Mode::Any`) when the binding does not exist.
#[derive(Debug, Clone, Copy)]
pub struct BindingRef<'a>(Option<&'a ButtonBinding>);

impl<'a> BindingRef<'a> {
    pub fn is_found(&self) -> bool {
        self.0.is_some()
    }

    pub fn binding(&self) -> Option<&'a ButtonBinding> {
        self.0
    }

    pub fn pressed(&self) -> bool {
        self.0.is_some_and(|b| b.button().pressed())
    }

    pub fn just_pressed(&self) -> bool {
        self.0.is_some_and(|b| b.button().just_pressed())
    }

    pub fn just_released(&self) -> bool {
        self.0.is_some_and(|b| b.button().just_released())
    }

    pub fn repeated(&self) -> bool {
        self.0.is_some_and(|b| b.button().repeated())
    }

    pub fn just_pressed_or_repeated(&self) -> bool {
        self.0.is_some_and(|b| b.button().just_pressed_or_repeated())
    }

    pub fn last_mode(&self) -> Mode {
        self.0.map_or(Mode::Any, ButtonBinding::last_mode)
    }
}

/// Owns every logical binding and axis and resolves them once per frame.
pub struct InputResolver {
    actions: ActionRegistry,
    // Indexed by ActionId.
    bindings: Vec<ButtonBinding>,
    axes: HashMap<String, AxisState>,
    consumed: ConsumptionRegistry,

    gamepad: Option<GamepadId>,
    stick_as_dpad: bool,
    deadzone: f32,
    mode: Mode,

    focus: FocusState,
    pass: u64,
    gamepad_connected: bool,

    cursor: Vec2,
    world_cursor: Vec2,
    mouse_moved: bool,
    scroll: Vec2,
    typed: String,
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new(InputSettings::default())
    }
}

impl InputResolver {
    pub fn new(settings: InputSettings) -> Self {
        let mut resolver = Self {
            actions: ActionRegistry::default(),
            bindings: Vec::new(),
            axes: HashMap::new(),
            consumed: ConsumptionRegistry::new(),
            gamepad: settings.gamepad,
            stick_as_dpad: settings.stick_as_dpad,
            deadzone: 0.0,
            mode: settings.mode,
            focus: FocusState::Unfocused,
            pass: 0,
            gamepad_connected: false,
            cursor: Vec2::ZERO,
            world_cursor: Vec2::ZERO,
            mouse_moved: false,
            scroll: Vec2::ZERO,
            typed: String::new(),
        };
        resolver.set_deadzone(settings.deadzone);
        resolver
    }

    /// Build a resolver and register everything in `config`.
    pub fn from_config(config: InputConfig) -> Result<Self> {
        let mut resolver = Self::new(config.settings);
        for (name, axis) in config.axes {
            resolver.register_axis(&name, axis)?;
        }
        for (name, def) in config.bindings {
            resolver.register_binding(&name, def.into_binding())?;
        }
        Ok(resolver)
    }

    // --- Registration ---

    pub fn register_binding(&mut self, name: &str, binding: ButtonBinding) -> Result<ActionId> {
        if !binding.has_source() {
            return Err(InputError::EmptyBinding { name: name.to_string() });
        }
        let id = self.actions.register(name)?;
        debug_assert_eq!(id as usize, self.bindings.len());
        self.bindings.push(binding);
        debug!(name, id, "registered binding");
        Ok(id)
    }

    pub fn register_axis(&mut self, name: &str, source: GamepadAxis) -> Result<()> {
        if self.axes.contains_key(name) {
            return Err(InputError::DuplicateAxis { name: name.to_string() });
        }
        self.axes.insert(name.to_string(), AxisState::new(source));
        debug!(name, ?source, "registered axis");
        Ok(())
    }

    // --- Per-frame resolution ---

    /// Run one resolution pass. `view` maps world space to window space; the
    /// world cursor is the cursor pulled back through it.
    pub fn resolve<S>(&mut self, snapshot: &S, view: Affine2)
    where
        S: DeviceSnapshot + ?Sized,
    {
        self.consumed.clear();

        let cursor = snapshot.cursor();
        self.mouse_moved = cursor != snapshot.previous_cursor();
        self.cursor = cursor;
        self.world_cursor = unproject(view, cursor);

        let window_focused = snapshot.window_focused();
        match (window_focused, self.focus) {
            (true, FocusState::JustFocused | FocusState::Focused) => {
                if self.focus == FocusState::JustFocused {
                    debug!("input focus settled");
                }
                self.focus = FocusState::Focused;
            }
            (true, FocusState::Unfocused) => {
                debug!("window focused; skipping first frame");
                self.focus = FocusState::JustFocused;
                return;
            }
            (false, state) => {
                if state != FocusState::Unfocused {
                    debug!("window lost focus");
                }
                self.focus = FocusState::Unfocused;
                return;
            }
        }

        self.typed.clear();
        self.typed.push_str(snapshot.typed());
        self.scroll = snapshot.scroll();
        self.gamepad_connected = self.gamepad.is_some_and(|id| snapshot.gamepad_present(id));

        let axis_pad = self
            .gamepad
            .filter(|_| self.gamepad_connected && self.mode.allows_gamepad());
        if let Some(pad) = axis_pad {
            for axis in self.axes.values_mut() {
                axis.update(snapshot.gamepad_axis(pad, axis.source()), self.deadzone);
            }
        }

        self.pass += 1;
        let ctx = self.context();
        for binding in &mut self.bindings {
            binding.resolve(&ctx, snapshot, &self.consumed);
        }
        trace!(pass = self.pass, gamepad = self.gamepad_connected, "input resolved");
    }

    /// Re-run resolution for one binding against this frame's claims.
    /// Returns `false` for unknown names.
    pub fn resolve_binding<S>(&mut self, name: &str, snapshot: &S) -> bool
    where
        S: DeviceSnapshot + ?Sized,
    {
        let ctx = self.context();
        let Some(id) = self.actions.get_id(name) else {
            return false;
        };
        self.bindings[id as usize].resolve(&ctx, snapshot, &self.consumed);
        true
    }

    /// Zero the named binding and claim its keys and buttons for the rest of
    /// this frame. Bindings resolved earlier in the frame are unaffected.
    pub fn consume(&mut self, name: &str) -> bool {
        match self.actions.get_id(name) {
            Some(id) => {
                self.bindings[id as usize].consume(&mut self.consumed);
                true
            }
            None => false,
        }
    }

    fn context(&self) -> ResolveContext {
        ResolveContext {
            gamepad: self.gamepad.filter(|_| self.gamepad_connected),
            mode: self.mode,
            deadzone: self.deadzone,
            stick_as_dpad: self.stick_as_dpad,
            pass: self.pass,
        }
    }

    // --- Queries ---

    pub fn get(&self, name: &str) -> BindingRef<'_> {
        BindingRef(self.actions.get_id(name).map(|id| &self.bindings[id as usize]))
    }

    pub fn get_by_id(&self, id: ActionId) -> BindingRef<'_> {
        BindingRef(self.bindings.get(id as usize))
    }

    pub fn action_id(&self, name: &str) -> Option<ActionId> {
        self.actions.get_id(name)
    }

    pub fn action_name(&self, id: ActionId) -> Option<&str> {
        self.actions.name(id)
    }

    /// Filtered value of a logical axis; 0 when unknown.
    pub fn axis(&self, name: &str) -> f32 {
        self.axes.get(name).map_or(0.0, AxisState::filtered)
    }

    pub fn axis_raw(&self, name: &str) -> f32 {
        self.axes.get(name).map_or(0.0, AxisState::raw)
    }

    /// Label for the first source of `name` usable in the current mode, or an
    /// empty string.
    pub fn first_display_label(&self, name: &str) -> String {
        let Some(binding) = self.get(name).binding() else {
            return String::new();
        };
        if self.mode.allows_keyboard_mouse() {
            if let Some(key) = binding.keys().first() {
                return key.to_string();
            }
        }
        if self.mode.allows_gamepad() {
            if let Some(button) = binding.gamepad_buttons().first() {
                return button.label().to_string();
            }
        }
        String::new()
    }

    /// First binding, in registration order, that was just pressed.
    pub fn any_just_pressed(&mut self, consume: bool) -> Option<AnyPress> {
        let index = self
            .bindings
            .iter()
            .position(|b| b.button().just_pressed())?;
        let mode = self.bindings[index].last_mode();
        if consume {
            self.bindings[index].consume(&mut self.consumed);
        }
        Some(AnyPress {
            action: index as ActionId,
            mode,
        })
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn world_cursor(&self) -> Vec2 {
        self.world_cursor
    }

    pub fn mouse_moved(&self) -> bool {
        self.mouse_moved
    }

    /// Scroll delta of the last resolved frame; `y` is vertical.
    pub fn scroll(&self) -> Vec2 {
        self.scroll
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    pub fn is_focused(&self) -> bool {
        self.focus != FocusState::Unfocused
    }

    pub fn consumed(&self) -> &ConsumptionRegistry {
        &self.consumed
    }

    // --- Settings ---

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    /// Negative and NaN values are clamped to zero.
    pub fn set_deadzone(&mut self, deadzone: f32) {
        let clamped = deadzone.max(0.0);
        if clamped != deadzone {
            warn!(deadzone, "invalid deadzone; using 0");
        }
        self.deadzone = clamped;
    }

    pub fn stick_as_dpad(&self) -> bool {
        self.stick_as_dpad
    }

    pub fn set_stick_as_dpad(&mut self, enabled: bool) {
        self.stick_as_dpad = enabled;
    }

    pub fn gamepad(&self) -> Option<GamepadId> {
        self.gamepad
    }

    pub fn set_gamepad(&mut self, gamepad: Option<GamepadId>) {
        self.gamepad = gamepad;
    }
}

fn unproject(view: Affine2, point: Vec2) -> Vec2 {
    // A degenerate view has no inverse; fall back to window coordinates.
    if view.matrix2.determinant().abs() <= f32::EPSILON {
        return point;
    }
    view.inverse().transform_point2(point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::snapshot::FrameSnapshot;
    use input_shared::{GamepadButton, KeyCode};

    const PAD: GamepadId = GamepadId(0);

    fn focused_resolver() -> InputResolver {
        let mut input = InputResolver::default();
        input.resolve(&FrameSnapshot::focused(), Affine2::IDENTITY);
        input
    }

    #[test]
    fn first_focused_frame_is_skipped() {
        let mut input = InputResolver::default();
        input
            .register_binding("jump", ButtonBinding::with_buttons(KeyCode::Space, GamepadButton::A))
            .unwrap();

        let held = FrameSnapshot::focused().with_key(KeyCode::Space);
        input.resolve(&held, Affine2::IDENTITY);
        assert_eq!(input.focus_state(), FocusState::JustFocused);
        assert!(input.is_focused());
        assert!(!input.get("jump").pressed());

        input.resolve(&held, Affine2::IDENTITY);
        assert_eq!(input.focus_state(), FocusState::Focused);
        assert!(input.get("jump").just_pressed());
    }

    #[test]
    fn focus_loss_freezes_bindings() {
        let mut input = focused_resolver();
        input.register_binding("jump", ButtonBinding::joyless(KeyCode::Space)).unwrap();
        input.resolve(&FrameSnapshot::focused().with_key(KeyCode::Space), Affine2::IDENTITY);
        assert!(input.get("jump").just_pressed());

        let mut unfocused = FrameSnapshot::default();
        unfocused.focused = false;
        input.resolve(&unfocused, Affine2::IDENTITY);
        assert_eq!(input.focus_state(), FocusState::Unfocused);
        assert!(input.get("jump").just_pressed());

        // Regaining focus swallows one more frame before resolving again.
        input.resolve(&FrameSnapshot::focused(), Affine2::IDENTITY);
        assert!(input.get("jump").pressed());
        input.resolve(&FrameSnapshot::focused(), Affine2::IDENTITY);
        assert!(input.get("jump").just_released());
    }

    #[test]
    fn registration_errors() {
        let mut input = InputResolver::default();
        assert_eq!(
            input.register_binding("none", ButtonBinding::new()),
            Err(InputError::EmptyBinding { name: "none".into() })
        );
        assert_eq!(input.register_binding("jump", ButtonBinding::joyless(KeyCode::Space)), Ok(0));
        assert_eq!(
            input.register_binding("jump", ButtonBinding::joyless(KeyCode::KeyJ)),
            Err(InputError::DuplicateBinding { name: "jump".into() })
        );
        input.register_axis("move_x", GamepadAxis::LeftX).unwrap();
        assert_eq!(
            input.register_axis("move_x", GamepadAxis::RightX),
            Err(InputError::DuplicateAxis { name: "move_x".into() })
        );
    }

    #[test]
    fn unknown_names_read_as_idle() {
        let mut input = focused_resolver();
        let missing = input.get("nope");
        assert!(!missing.is_found());
        assert!(!missing.pressed());
        assert!(!missing.just_pressed());
        assert!(!missing.just_released());
        assert!(!missing.repeated());
        assert!(!missing.just_pressed_or_repeated());
        assert_eq!(missing.last_mode(), Mode::Any);
        assert_eq!(input.axis("nope"), 0.0);
        assert_eq!(input.first_display_label("nope"), "");
        assert!(!input.consume("nope"));
        assert!(!input.resolve_binding("nope", &FrameSnapshot::focused()));
    }

    #[test]
    fn axes_only_update_with_gamepad() {
        let mut input = focused_resolver();
        input.register_axis("move_x", GamepadAxis::LeftX).unwrap();

        input.resolve(&FrameSnapshot::focused().with_axis(PAD, GamepadAxis::LeftX, 0.25), Affine2::IDENTITY);
        assert!(input.gamepad_connected());
        assert_eq!(input.axis("move_x"), 0.25);

        input.set_mode(Mode::KeyboardMouse);
        input.resolve(&FrameSnapshot::focused().with_axis(PAD, GamepadAxis::LeftX, 0.9), Affine2::IDENTITY);
        assert_eq!(input.axis("move_x"), 0.25);

        input.set_mode(Mode::Any);
        input.resolve(&FrameSnapshot::focused().with_axis(PAD, GamepadAxis::LeftX, 0.1), Affine2::IDENTITY);
        assert_eq!(input.axis("move_x"), 0.0);
        assert_eq!(input.axis_raw("move_x"), 0.1);
    }

    #[test]
    fn cursor_and_frame_data() {
        let mut input = focused_resolver();
        let view = Affine2::from_scale_angle_translation(Vec2::splat(2.0), 0.0, Vec2::new(10.0, 0.0));
        let snap = FrameSnapshot {
            typed: "hi".into(),
            ..FrameSnapshot::focused()
                .with_cursor(Vec2::new(10.0, 10.0), Vec2::new(30.0, 20.0))
                .with_scroll(0.5, -1.0)
        };
        input.resolve(&snap, view);
        assert!(input.mouse_moved());
        assert_eq!(input.cursor(), Vec2::new(30.0, 20.0));
        assert_eq!(input.world_cursor(), Vec2::new(10.0, 10.0));
        assert_eq!(input.scroll(), Vec2::new(0.5, -1.0));
        assert_eq!(input.typed(), "hi");

        let still = FrameSnapshot::focused().with_cursor(Vec2::ONE, Vec2::ONE);
        input.resolve(&still, Affine2::from_scale(Vec2::ZERO));
        assert!(!input.mouse_moved());
        assert_eq!(input.world_cursor(), Vec2::ONE);
    }

    #[test]
    fn display_label_follows_mode() {
        let mut input = focused_resolver();
        input
            .register_binding("jump", ButtonBinding::with_buttons(KeyCode::Space, GamepadButton::A))
            .unwrap();
        input.register_binding("pad_only", ButtonBinding::new().add_button(GamepadButton::Start)).unwrap();

        assert_eq!(input.first_display_label("jump"), "Space");
        assert_eq!(input.first_display_label("pad_only"), "Start");
        input.set_mode(Mode::Gamepad);
        assert_eq!(input.first_display_label("jump"), "A");
        input.set_mode(Mode::KeyboardMouse);
        assert_eq!(input.first_display_label("pad_only"), "");
    }

    #[test]
    fn any_just_pressed_reports_and_consumes() {
        let mut input = focused_resolver();
        input.register_binding("menu", ButtonBinding::joyless(KeyCode::Escape)).unwrap();
        input.register_binding("confirm", ButtonBinding::new().add_button(GamepadButton::A)).unwrap();

        assert_eq!(input.any_just_pressed(false), None);

        input.resolve(&FrameSnapshot::focused().with_button(PAD, GamepadButton::A), Affine2::IDENTITY);
        let hit = input.any_just_pressed(true).unwrap();
        assert_eq!(input.action_name(hit.action), Some("confirm"));
        assert_eq!(hit.mode, Mode::Gamepad);
        assert!(!input.get("confirm").pressed());
        assert!(input.consumed().button_claimed(GamepadButton::A));
        assert_eq!(input.any_just_pressed(false), None);
    }

    #[test]
    fn settings_are_sanitised() {
        let mut input = InputResolver::default();
        input.set_deadzone(-1.0);
        assert_eq!(input.deadzone(), 0.0);
        input.set_deadzone(f32::NAN);
        assert_eq!(input.deadzone(), 0.0);
        input.set_deadzone(0.3);
        assert_eq!(input.deadzone(), 0.3);
    }
}
