// crates/input_core/src/lib.rs
//! Per-frame resolution of keyboard, mouse and gamepad state into logical actions.

pub mod error;
pub mod input;

pub use error::{InputError, Result};
pub use input::{
    ActionRegistry, AnyPress, AxisState, BindingRef, Button, ButtonBinding, ConsumptionRegistry,
    DeviceSnapshot, FocusState, FrameSnapshot, InputConfig, InputPoller, InputResolver,
    ResolveContext,
};
