//! Logical ids.
//!
//! Logical ids are engine-wide and minted by the manager-owned [`IdAllocator`].
//! Allocation is strictly increasing, so an id retired with its device is never
//! handed to a different physical device during the same run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-wide id of one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisId(pub u32);

/// Engine-wide id of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ButtonId(pub u32);

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis#{}", self.0)
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "button#{}", self.0)
    }
}

/// Mints logical ids. Axes and buttons use separate id spaces.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next_axis: u32,
    next_button: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_axis(&mut self) -> AxisId {
        let id = AxisId(self.next_axis);
        self.next_axis += 1;
        id
    }

    pub fn next_button(&mut self) -> ButtonId {
        let id = ButtonId(self.next_button);
        self.next_button += 1;
        id
    }

    /// Number of axis ids handed out so far (live and retired).
    pub fn axes_issued(&self) -> u32 {
        self.next_axis
    }

    pub fn buttons_issued(&self) -> u32 {
        self.next_button
    }
}
