// crates/input_core/src/input/axis.rs
use input_shared::GamepadAxis;

/// One logical analog axis read from a single physical gamepad axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    raw: f32,
    filtered: f32,
    source: GamepadAxis,
}

impl AxisState {
    pub fn new(source: GamepadAxis) -> Self {
        Self {
            raw: 0.0,
            filtered: 0.0,
            source,
        }
    }

    /// Replace both values from a fresh device reading.
    /// Readings outside [-1, 1] are clamped; NaN reads as zero.
    pub fn update(&mut self, raw: f32, deadzone: f32) {
        let raw = if raw.is_nan() { 0.0 } else { raw.clamp(-1.0, 1.0) };
        self.raw = raw;
        self.filtered = apply_deadzone(raw, deadzone);
    }

    pub fn raw(&self) -> f32 {
        self.raw
    }

    pub fn filtered(&self) -> f32 {
        self.filtered
    }

    pub fn source(&self) -> GamepadAxis {
        self.source
    }
}

/// Zero inside the dead zone, untouched outside. The boundary counts as inside.
pub fn apply_deadzone(raw: f32, deadzone: f32) -> f32 {
    if raw.abs() > deadzone {
        raw
    } else {
        0.0
    }
}
