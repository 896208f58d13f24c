// crates/input_shared/src/lib.rs
//! Identifier types shared between hosts and the input resolver.

pub mod input_types;

pub use input_types::{
    ActionId, ACTION_NOT_FOUND, GamepadAxis, GamepadButton, GamepadId, Key, Mode, Sign,
};

// Re-exported so hosts can name keys without depending on winit directly.
pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;
