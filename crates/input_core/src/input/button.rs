// crates/input_core/src/input/button.rs

/// Edge state of one logical button for the current frame.
///
/// Only `pressed` carries over between frames; the edges are rebuilt every
/// pass from the previous and current `pressed` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
    repeated: bool,
}

impl Button {
    pub fn next(was_pressed: bool, now_pressed: bool, now_repeated: bool) -> Self {
        Self {
            pressed: now_pressed,
            just_pressed: now_pressed && !was_pressed,
            just_released: !now_pressed && was_pressed,
            repeated: now_repeated,
        }
    }

    pub fn pressed(&self) -> bool {
        self.pressed
    }

    pub fn just_pressed(&self) -> bool {
        self.just_pressed
    }

    pub fn just_released(&self) -> bool {
        self.just_released
    }

    /// Key-repeat signal from the OS while a key stays held.
    pub fn repeated(&self) -> bool {
        self.repeated
    }

    pub fn just_pressed_or_repeated(&self) -> bool {
        self.just_pressed || self.repeated
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
