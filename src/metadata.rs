//! Device metadata snapshot.
//!
//! [`DeviceInfo`] is a lightweight, cloneable description of a registered
//! logical device suitable for UI display, logging, and listener callbacks.
//! It carries the logical ids minted for the device so tools can show which
//! engine-wide id belongs to which named control.
//!
//! # Example
//! ```no_run
//! use axisgate::InputManager;
//!
//! let mgr = InputManager::new();
//! for info in mgr.device_infos() {
//!     println!("{}: {} axes, {} buttons", info.key, info.axes.len(), info.buttons.len());
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::device::DeviceCategory;
use crate::ids::{AxisId, ButtonId};
use crate::manager::DeviceKey;

/// Snapshot of metadata describing a single logical device.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Manager-assigned key (`driver/identity`).
    pub key: DeviceKey,

    /// Identity string reported by the implementation.
    pub imp_id: String,

    /// Human-readable description from the implementation.
    pub desc: String,

    pub category: DeviceCategory,

    /// `(logical id, descriptor name)` in registration order.
    pub axes: Vec<(AxisId, String)>,

    /// `(logical id, descriptor name)` in registration order.
    pub buttons: Vec<(ButtonId, String)>,
}
