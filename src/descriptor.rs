//! Axis and button descriptors.
//!
//! Device implementations describe every control they expose with an immutable
//! descriptor. Descriptors carry the **native id** (meaningful only to the
//! implementation that issued it); logical ids are assigned later by
//! [`InputDevice`](crate::input_device::InputDevice).
//!
//! ## Bounds
//! An axis may be bounded by literal values or by two *other axes* of the same
//! device. A mouse X position, for example, is bounded by the `MinX`/`MaxX`
//! axes, which in turn report the current canvas extents. [`AxisBounds`]
//! makes the distinction explicit so an axis id can never be mistaken for a
//! literal range.

use serde::{Deserialize, Serialize};

/// Spatial direction an axis measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDirection {
    X,
    Y,
    Z,
    Other,
}

/// What the axis value represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisNature {
    /// Absolute position (cursor coordinate, stick deflection).
    Position,
    /// Rate of change (relative motion).
    Speed,
    Unspecified,
}

/// Value range of an axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AxisBounds {
    /// No known range.
    Unbound,
    /// Literal range.
    Bounded { min: f32, max: f32 },
    /// Range supplied by two other axes, given by their native ids.
    OtherAxis { min_axis: i32, max_axis: i32 },
}

/// Immutable description of one axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisDescription {
    /// Human-friendly name (`"X"`, `"LeftY"`, `"Wheel"`).
    pub name: String,
    /// Implementation-local id.
    pub native_id: i32,
    pub direction: AxisDirection,
    pub nature: AxisNature,
    pub bounds: AxisBounds,
}

/// Immutable description of one button.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonDescription {
    pub name: String,
    pub native_id: i32,
}

/// An axis descriptor paired with its update model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisImpDescription {
    pub desc: AxisDescription,
    /// `true`: read with [`DeviceImp::get_axis`](crate::device::DeviceImp::get_axis) on demand.
    /// `false`: the value only changes through push events and is cached.
    pub poll: bool,
}

/// A button descriptor paired with its update model.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ButtonImpDescription {
    pub desc: ButtonDescription,
    /// See [`AxisImpDescription::poll`].
    pub poll: bool,
}

impl AxisDescription {
    pub fn new(
        name: impl Into<String>,
        native_id: i32,
        direction: AxisDirection,
        nature: AxisNature,
        bounds: AxisBounds,
    ) -> Self {
        Self {
            name: name.into(),
            native_id,
            direction,
            nature,
            bounds,
        }
    }
}

impl AxisImpDescription {
    /// Polled axis.
    pub fn polled(desc: AxisDescription) -> Self {
        Self { desc, poll: true }
    }

    /// Event-driven axis.
    pub fn pushed(desc: AxisDescription) -> Self {
        Self { desc, poll: false }
    }
}

impl ButtonImpDescription {
    pub fn polled(name: impl Into<String>, native_id: i32) -> Self {
        Self {
            desc: ButtonDescription {
                name: name.into(),
                native_id,
            },
            poll: true,
        }
    }

    pub fn pushed(name: impl Into<String>, native_id: i32) -> Self {
        Self {
            desc: ButtonDescription {
                name: name.into(),
                native_id,
            },
            poll: false,
        }
    }
}
