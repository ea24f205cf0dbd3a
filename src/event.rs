//! Push events.
//!
//! Two layers of events exist:
//! - [`DeviceEvent`]: raised by a device implementation, keyed by **native** ids.
//!   Only event-driven controls (`poll = false`) raise these, exactly one per
//!   discrete state change.
//! - [`InputEvent`]: the same change after the logical device remapped it to
//!   **logical** ids, timestamped and tagged with the owning device. These are what
//!   listeners on the [`InputEventBus`](crate::eventbus::InputEventBus) receive.
//!
//! ## Value conventions
//! - Controller stick axes are normalized to `[-1.0, 1.0]`, triggers to `[0.0, 1.0]`.
//! - Mouse position axes are reported in canvas pixels (raw truth, not normalized).

use crate::ids::{AxisId, ButtonId};
use crate::manager::DeviceKey;

/// Change reported by a device implementation (native ids).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeviceEvent {
    /// An event-driven axis changed.
    AxisChanged { axis: i32, value: f32 },
    /// An event-driven button was pressed (`true`) or released (`false`).
    ButtonChanged { button: i32, pressed: bool },
}

/// Logical change (logical ids).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
    AxisChanged { axis: AxisId, value: f32 },
    ButtonPressed { button: ButtonId },
    ButtonReleased { button: ButtonId },
}

/// Timestamped logical event captured during [`InputManager::tick`](crate::manager::InputManager::tick).
#[derive(Clone, Debug)]
pub struct InputEvent {
    /// Capture time (monotonic).
    pub at: std::time::Instant,
    /// Device the change belongs to.
    pub device: DeviceKey,
    /// Frame during which the event was delivered.
    pub frame: u64,
    pub kind: InputKind,
}

impl InputKind {
    pub fn is_axis(&self) -> bool {
        matches!(self, InputKind::AxisChanged { .. })
    }

    pub fn is_button(&self) -> bool {
        matches!(
            self,
            InputKind::ButtonPressed { .. } | InputKind::ButtonReleased { .. }
        )
    }
}
