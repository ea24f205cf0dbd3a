//! Error taxonomy.
//!
//! Querying a control that was never registered is a programming error and is
//! surfaced as [`InputError::UnsupportedAxis`] / [`InputError::UnsupportedButton`].
//! Device disconnection is **not** an error: the manager silently retires the
//! logical device.

use std::path::PathBuf;
use thiserror::Error;

use crate::device::DeviceCategory;

/// Errors raised by devices, drivers and the manager.
#[derive(Error, Debug)]
pub enum InputError {
    /// Axis not registered on this device. `axis` is the logical id
    /// (`axis#3`) or, for typed lookups, the control name (`RightX`).
    #[error("device `{device}` has no axis {axis}")]
    UnsupportedAxis { device: String, axis: String },

    /// Button not registered on this device; `button` as for `UnsupportedAxis`.
    #[error("device `{device}` has no button {button}")]
    UnsupportedButton { device: String, button: String },

    /// An implementation was asked for a native axis it does not expose.
    #[error("no such axis: device `{device}` does not expose native axis {native}")]
    NoSuchAxis { device: String, native: i32 },

    /// An implementation was asked for a native button it does not expose.
    #[error("no such button: device `{device}` does not expose native button {native}")]
    NoSuchButton { device: String, native: i32 },

    /// The button exists but only reports changes through push events.
    #[error("button {button} on `{device}` is event-driven and cannot be polled")]
    NotPollable { device: String, button: i32 },

    /// A typed accessor was used on a device of another category.
    #[error("device `{device}` is a {actual:?}, not a {expected:?}")]
    WrongCategory {
        device: String,
        expected: DeviceCategory,
        actual: DeviceCategory,
    },

    /// Construction attempted against a capabilities report saying "not connected".
    #[error("device `{device}` is not connected")]
    DeviceNotConnected { device: String },

    /// The implementation listed the same native axis twice.
    #[error("device `{device}` reported native axis {native} more than once")]
    DuplicateAxis { device: String, native: i32 },

    /// The implementation listed the same native button twice.
    #[error("device `{device}` reported native button {native} more than once")]
    DuplicateButton { device: String, native: i32 },

    /// A driver with this id is already owned by the manager.
    #[error("driver `{driver}` is already registered")]
    DuplicateDriver { driver: String },

    #[error("invalid input configuration: {source}")]
    Config {
        #[from]
        source: toml::de::Error,
    },

    #[error("failed to read configuration file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode json: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, InputError>;

impl InputError {
    /// `true` for the "control was never registered / not exposed" family.
    pub fn is_unsupported_control(&self) -> bool {
        matches!(
            self,
            InputError::UnsupportedAxis { .. }
                | InputError::UnsupportedButton { .. }
                | InputError::NoSuchAxis { .. }
                | InputError::NoSuchButton { .. }
        )
    }
}
