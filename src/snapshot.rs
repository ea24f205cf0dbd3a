//! Per-frame snapshot of device states.
//!
//! [`Snapshot`] is an **owned**, read-only view of all device states at a point
//! in time (typically "this frame"). It is produced by
//! [`InputManager::snapshot`](crate::manager::InputManager::snapshot) and is cheap
//! to clone for fan-out to multiple consumers.
//!
//! # Semantics
//! - Keys are the `driver/identity` strings of [`DeviceKey`](crate::manager::DeviceKey).
//! - Values map descriptor names to the current axis value / held state.
//! - Polled controls are read when the snapshot is taken; controls that fail to
//!   read are left out.
//!
//! # Example
//! ```no_run
//! use axisgate::InputManager;
//!
//! let mgr = InputManager::new();
//! let snap = mgr.snapshot();
//! for (dev, state) in snap.iter() {
//!     println!("{dev}: X={:.1} left={}", state.get_axis("X"), state.get_button("Left"));
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::input_device::InputDevice;

/// Axis/button states of one device, keyed by descriptor name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceState {
    pub axes: BTreeMap<String, f32>,
    pub buttons: BTreeMap<String, bool>,
}

impl DeviceState {
    /// Value of a named axis (0.0 if missing).
    pub fn get_axis(&self, name: &str) -> f32 {
        self.axes.get(name).copied().unwrap_or(0.0)
    }

    /// State of a named button (false if missing).
    pub fn get_button(&self, name: &str) -> bool {
        self.buttons.get(name).copied().unwrap_or(false)
    }

    fn capture(device: &InputDevice) -> Self {
        let mut state = DeviceState::default();
        for (id, desc) in device.axes() {
            if let Ok(value) = device.get_axis(id) {
                state.axes.insert(desc.name.clone(), value);
            }
        }
        for (id, desc) in device.buttons() {
            if let Ok(pressed) = device.get_button(id) {
                state.buttons.insert(desc.name.clone(), pressed);
            }
        }
        state
    }
}

/// Owned snapshot of current device states (`device key → DeviceState`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot(pub BTreeMap<String, DeviceState>);

impl Snapshot {
    pub(crate) fn capture<'a>(devices: impl Iterator<Item = &'a InputDevice>) -> Self {
        Snapshot(
            devices
                .map(|device| (device.key().to_string(), DeviceState::capture(device)))
                .collect(),
        )
    }

    #[inline]
    pub fn get(&self, device: &str) -> Option<&DeviceState> {
        self.0.get(device)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&String, &DeviceState)> {
        self.0.iter()
    }

    #[inline]
    pub fn into_inner(self) -> BTreeMap<String, DeviceState> {
        self.0
    }

    /// Pretty-printed JSON, for debug overlays and bug reports.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
