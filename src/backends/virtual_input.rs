use parking_lot::Mutex;
use std::sync::Arc;

use super::gamepad::{GamepadCapabilities, GamepadSource, GamepadState};
use crate::keys::{ControllerAxis, ControllerButton};

#[derive(Default)]
struct VirtualPad {
    caps: GamepadCapabilities,
    state: GamepadState,
}

/// In-process controller slots.
///
/// Cloning yields another handle to the same slots, so a test can keep one
/// handle while the [`GamepadDriver`](super::gamepad::GamepadDriver) owns the other.
#[derive(Clone, Default)]
pub struct VirtualGamepads {
    slots: Arc<Mutex<Vec<VirtualPad>>>,
}

impl VirtualGamepads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` on a slot that has been plugged at least once; otherwise a no-op.
    fn with_slot(&self, slot: u32, f: impl FnOnce(&mut VirtualPad)) {
        if let Some(pad) = self.slots.lock().get_mut(slot as usize) {
            f(pad);
        }
    }

    /// Plug a pad with `caps` into `slot`. All inputs start neutral.
    pub fn plug(&self, slot: u32, mut caps: GamepadCapabilities) {
        caps.connected = true;
        let mut slots = self.slots.lock();
        let idx = slot as usize;
        if slots.len() <= idx {
            slots.resize_with(idx + 1, VirtualPad::default);
        }
        slots[idx] = VirtualPad {
            caps,
            state: GamepadState {
                connected: true,
                ..GamepadState::default()
            },
        };
    }

    pub fn unplug(&self, slot: u32) {
        self.with_slot(slot, |pad| {
            pad.caps.connected = false;
            pad.state.connected = false;
        });
    }

    pub fn set_axis(&self, slot: u32, axis: ControllerAxis, value: f32) {
        self.with_slot(slot, |pad| pad.state.set_axis(axis, value));
    }

    pub fn press(&self, slot: u32, button: ControllerButton) {
        self.with_slot(slot, |pad| pad.state.set_button(button, true));
    }

    pub fn release(&self, slot: u32, button: ControllerButton) {
        self.with_slot(slot, |pad| pad.state.set_button(button, false));
    }
}

impl GamepadSource for VirtualGamepads {
    fn capabilities(&self, slot: u32) -> GamepadCapabilities {
        self.slots
            .lock()
            .get(slot as usize)
            .map(|pad| pad.caps.clone())
            .unwrap_or_default()
    }

    fn state(&self, slot: u32) -> GamepadState {
        self.slots
            .lock()
            .get(slot as usize)
            .map(|pad| pad.state)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slots_report_disconnected() {
        let pads = VirtualGamepads::new();
        assert!(!pads.capabilities(3).connected);
        pads.plug(1, GamepadCapabilities::standard());
        assert!(pads.capabilities(1).connected);
        assert!(!pads.capabilities(0).connected);
        pads.unplug(1);
        assert!(!pads.state(1).connected);
    }

    #[test]
    fn unknown_slots_are_left_alone() {
        let pads = VirtualGamepads::new();
        pads.unplug(u32::MAX);
        pads.press(u32::MAX - 1, ControllerButton::A);
        pads.set_axis(7, ControllerAxis::LeftX, 1.0);
        pads.release(2, ControllerButton::B);
        assert!(pads.slots.lock().is_empty());
        assert!(!pads.capabilities(7).connected);

        pads.plug(0, GamepadCapabilities::standard());
        pads.press(0, ControllerButton::A);
        pads.set_axis(5, ControllerAxis::LeftX, 1.0);
        assert_eq!(pads.slots.lock().len(), 1);
        assert!(pads.state(0).pressed(ControllerButton::A));
    }
}
