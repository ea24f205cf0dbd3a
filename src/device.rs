//! Device implementation contract.
//!
//! A [`DeviceImp`] is the capability set a driver offers for one physical
//! device: an ordered, frozen list of axis/button descriptors, synchronous
//! getters by native id, and optional push events.
//!
//! # Contract
//! - Descriptor count and order never change for the lifetime of the instance.
//!   Logical ids are assigned in that order.
//! - Polled getters have no side effects visible to the core and may be called
//!   at any frequency.
//! - Event-driven controls raise exactly one [`DeviceEvent`] per state change;
//!   polled controls raise none.
//! - Unknown ids fail with [`InputError::NoSuchAxis`](crate::InputError::NoSuchAxis) /
//!   [`InputError::NoSuchButton`](crate::InputError::NoSuchButton) instead of returning a
//!   sentinel value.

use serde::{Deserialize, Serialize};

use crate::descriptor::{AxisImpDescription, ButtonImpDescription};
use crate::error::Result;
use crate::event::DeviceEvent;

/// Coarse device classification used by typed accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceCategory {
    Keyboard,
    Mouse,
    GameController,
}

pub trait DeviceImp: Send {
    /// Unique identity within the owning driver (slot index, type name, ...).
    fn id(&self) -> &str;

    /// Human-readable description.
    fn desc(&self) -> &str;

    fn category(&self) -> DeviceCategory;

    /// Ordered axis descriptors.
    fn axis_imp_desc(&self) -> &[AxisImpDescription];

    /// Ordered button descriptors.
    fn button_imp_desc(&self) -> &[ButtonImpDescription];

    fn axis_count(&self) -> usize {
        self.axis_imp_desc().len()
    }

    fn button_count(&self) -> usize {
        self.button_imp_desc().len()
    }

    /// Instantaneous value of a polled axis.
    fn get_axis(&self, native_id: i32) -> Result<f32>;

    /// Instantaneous state of a polled button.
    fn get_button(&self, native_id: i32) -> Result<bool>;

    /// Drain push events buffered since the last call.
    ///
    /// Called once per frame by the manager, on the update thread.
    fn poll(&mut self) -> Vec<DeviceEvent> {
        Vec::new()
    }
}

/// Enum whose discriminants are the native ids used by implementations of one category.
pub trait NamedControl: Copy {
    const CATEGORY: DeviceCategory;

    fn native_id(self) -> i32;

    fn control_name(self) -> &'static str;
}
