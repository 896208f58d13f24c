// crates/input_core/src/error.rs
//! Configuration errors raised while registering bindings and axes.
//!
//! Resolution itself never fails: unknown names read as "not pressed" and a
//! missing gamepad contributes nothing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("binding `{name}` is already registered")]
    DuplicateBinding { name: String },

    #[error("binding `{name}` has no keys, buttons, axis or scroll bound")]
    EmptyBinding { name: String },

    #[error("axis `{name}` is already registered")]
    DuplicateAxis { name: String },
}

pub type Result<T> = std::result::Result<T, InputError>;
