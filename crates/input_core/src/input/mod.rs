// crates/input_core/src/input/mod.rs
pub mod axis;
pub mod binding;
pub mod button;
pub mod config;
pub mod consume;
pub mod poller;
pub mod registry;
pub mod resolver;
pub mod snapshot;

// Re-export core types to keep the API flat: `input_core::input::InputResolver`
pub use axis::AxisState;
pub use binding::{ButtonBinding, ResolveContext};
pub use button::Button;
pub use config::{AxisDef, BindingDef, InputConfig, InputSettings};
pub use consume::ConsumptionRegistry;
pub use poller::InputPoller;
pub use registry::ActionRegistry;
pub use resolver::{AnyPress, BindingRef, FocusState, InputResolver};
pub use snapshot::{DeviceSnapshot, FrameSnapshot, GamepadSnapshot};
