//! Game controller devices and the slot-scanning gamepad driver.
//!
//! # Capability-dependent layout
//! A controller only exposes the axes/buttons its capabilities report. The
//! descriptor list is built once, when the device is constructed, in a fixed
//! canonical order and frozen afterwards:
//!
//! - Axes: `LeftX`, `LeftY`, `RightX`, `RightY`, `LeftTrigger`, `RightTrigger`
//! - Buttons: `DPadUp`, `DPadDown`, `DPadLeft`, `DPadRight`, `A`, `B`, `X`, `Y`,
//!   `LeftStick`, `RightStick`, `LeftShoulder`, `LeftTrigger`, `RightShoulder`,
//!   `RightTrigger`, `Back`, `Start`, `Home`
//!
//! Every control is polled. Sticks report `[-1, 1]` after the configured radial
//! dead zone; triggers report `[0, 1]`. A trigger *button* reads as pressed when
//! its own analog trigger reaches `trigger_threshold` (pads without analog
//! triggers report the digital bit instead).
//!
//! # Hot-plug
//! [`GamepadDriver`] checks every slot's liveness flag on each
//! [`poll_connections`](InputDriver::poll_connections) and queues
//! connect/disconnect notifications. A slot whose device fails to construct is
//! retried on the next poll.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::InputConfig;
use crate::descriptor::{
    AxisBounds, AxisDescription, AxisDirection, AxisImpDescription, AxisNature, ButtonImpDescription,
};
use crate::device::{DeviceCategory, DeviceImp};
use crate::driver::{DriverEvent, InputDriver};
use crate::error::{InputError, Result};
use crate::keys::{ControllerAxis, ControllerButton};

pub const GAMEPAD_DRIVER_ID: &str = "gamepad";

const BUTTON_ORDER: [ControllerButton; 17] = [
    ControllerButton::DPadUp,
    ControllerButton::DPadDown,
    ControllerButton::DPadLeft,
    ControllerButton::DPadRight,
    ControllerButton::A,
    ControllerButton::B,
    ControllerButton::X,
    ControllerButton::Y,
    ControllerButton::LeftStick,
    ControllerButton::RightStick,
    ControllerButton::LeftShoulder,
    ControllerButton::LeftTrigger,
    ControllerButton::RightShoulder,
    ControllerButton::RightTrigger,
    ControllerButton::Back,
    ControllerButton::Start,
    ControllerButton::Home,
];

/// What the hardware in one slot reports it has.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadCapabilities {
    pub connected: bool,
    pub axes: BTreeSet<ControllerAxis>,
    pub buttons: BTreeSet<ControllerButton>,
}

impl GamepadCapabilities {
    /// A connected, standard dual-stick pad with every axis and button.
    pub fn standard() -> Self {
        Self {
            connected: true,
            axes: ControllerAxis::ALL.iter().copied().collect(),
            buttons: ControllerButton::ALL.iter().copied().collect(),
        }
    }
}

/// Instantaneous state of one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GamepadState {
    pub connected: bool,
    /// Indexed by [`ControllerAxis`] discriminant.
    pub axes: [f32; 6],
    /// Bit `n` set = button with native id `n` held.
    pub buttons: u32,
}

impl GamepadState {
    pub fn axis(&self, axis: ControllerAxis) -> f32 {
        self.axes[axis as usize]
    }

    pub fn pressed(&self, button: ControllerButton) -> bool {
        self.buttons & (1 << button as u32) != 0
    }

    pub fn set_axis(&mut self, axis: ControllerAxis, value: f32) {
        self.axes[axis as usize] = value;
    }

    pub fn set_button(&mut self, button: ControllerButton, pressed: bool) {
        if pressed {
            self.buttons |= 1 << button as u32;
        } else {
            self.buttons &= !(1 << button as u32);
        }
    }
}

/// Access to a platform controller API, one slot at a time.
///
/// Implementations must be cheap to query; they are hit on every poll.
pub trait GamepadSource: Send + Sync {
    fn capabilities(&self, slot: u32) -> GamepadCapabilities;

    fn state(&self, slot: u32) -> GamepadState;
}

pub struct GameControllerDevice {
    slot: u32,
    id: String,
    desc: String,
    source: Arc<dyn GamepadSource>,
    axes: Vec<AxisImpDescription>,
    buttons: Vec<ButtonImpDescription>,
    analog_triggers: (bool, bool),
    trigger_threshold: f32,
    stick_deadzone: f32,
}

fn axis_desc(axis: ControllerAxis) -> AxisImpDescription {
    let (direction, bounds) = match axis {
        ControllerAxis::LeftX | ControllerAxis::RightX => {
            (AxisDirection::X, AxisBounds::Bounded { min: -1.0, max: 1.0 })
        }
        ControllerAxis::LeftY | ControllerAxis::RightY => {
            (AxisDirection::Y, AxisBounds::Bounded { min: -1.0, max: 1.0 })
        }
        ControllerAxis::LeftTrigger | ControllerAxis::RightTrigger => {
            (AxisDirection::Other, AxisBounds::Bounded { min: 0.0, max: 1.0 })
        }
    };
    AxisImpDescription::polled(AxisDescription::new(
        axis.name(),
        axis as i32,
        direction,
        AxisNature::Position,
        bounds,
    ))
}

/// Radial dead zone; output is rescaled so it still reaches the rim.
fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> (f32, f32) {
    if deadzone <= 0.0 {
        return (x, y);
    }
    let magnitude = (x * x + y * y).sqrt();
    if magnitude <= deadzone {
        return (0.0, 0.0);
    }
    let scaled = ((magnitude - deadzone) / (1.0 - deadzone)).min(1.0);
    (x / magnitude * scaled, y / magnitude * scaled)
}

impl GameControllerDevice {
    /// Build the device for `slot` from the source's current capabilities report.
    pub fn new(slot: u32, source: Arc<dyn GamepadSource>, config: &InputConfig) -> Result<Self> {
        let caps = source.capabilities(slot);
        if !caps.connected {
            return Err(InputError::DeviceNotConnected {
                device: format!("{GAMEPAD_DRIVER_ID}/{slot}"),
            });
        }

        let axes = ControllerAxis::ALL
            .iter()
            .filter(|a| caps.axes.contains(*a))
            .map(|a| axis_desc(*a))
            .collect();
        let buttons = BUTTON_ORDER
            .iter()
            .filter(|b| caps.buttons.contains(*b))
            .map(|b| ButtonImpDescription::polled(b.name(), *b as i32))
            .collect();

        log::debug!("creating game controller in slot {slot}");
        Ok(Self {
            slot,
            id: slot.to_string(),
            desc: format!("Game controller (slot {slot})"),
            source,
            axes,
            buttons,
            analog_triggers: (
                caps.axes.contains(&ControllerAxis::LeftTrigger),
                caps.axes.contains(&ControllerAxis::RightTrigger),
            ),
            trigger_threshold: config.trigger_threshold,
            stick_deadzone: config.stick_deadzone,
        })
    }

    pub fn slot(&self) -> u32 {
        self.slot
    }

    fn exposes_axis(&self, native_id: i32) -> bool {
        self.axes.iter().any(|a| a.desc.native_id == native_id)
    }

    fn exposes_button(&self, native_id: i32) -> bool {
        self.buttons.iter().any(|b| b.desc.native_id == native_id)
    }

    fn stick(&self, state: &GamepadState, x: ControllerAxis, y: ControllerAxis) -> (f32, f32) {
        apply_deadzone(state.axis(x), state.axis(y), self.stick_deadzone)
    }
}

impl DeviceImp for GameControllerDevice {
    fn id(&self) -> &str {
        &self.id
    }

    fn desc(&self) -> &str {
        &self.desc
    }

    fn category(&self) -> DeviceCategory {
        DeviceCategory::GameController
    }

    fn axis_imp_desc(&self) -> &[AxisImpDescription] {
        &self.axes
    }

    fn button_imp_desc(&self) -> &[ButtonImpDescription] {
        &self.buttons
    }

    fn get_axis(&self, native_id: i32) -> Result<f32> {
        let axis = ControllerAxis::from_native(native_id)
            .filter(|_| self.exposes_axis(native_id))
            .ok_or_else(|| InputError::NoSuchAxis {
                device: self.id.clone(),
                native: native_id,
            })?;

        let state = self.source.state(self.slot);
        if !state.connected {
            // Neutral until the driver retires the device.
            return Ok(0.0);
        }
        Ok(match axis {
            ControllerAxis::LeftX => self.stick(&state, ControllerAxis::LeftX, ControllerAxis::LeftY).0,
            ControllerAxis::LeftY => self.stick(&state, ControllerAxis::LeftX, ControllerAxis::LeftY).1,
            ControllerAxis::RightX => self.stick(&state, ControllerAxis::RightX, ControllerAxis::RightY).0,
            ControllerAxis::RightY => self.stick(&state, ControllerAxis::RightX, ControllerAxis::RightY).1,
            ControllerAxis::LeftTrigger | ControllerAxis::RightTrigger => state.axis(axis).clamp(0.0, 1.0),
        })
    }

    fn get_button(&self, native_id: i32) -> Result<bool> {
        let button = ControllerButton::from_native(native_id)
            .filter(|_| self.exposes_button(native_id))
            .ok_or_else(|| InputError::NoSuchButton {
                device: self.id.clone(),
                native: native_id,
            })?;

        let state = self.source.state(self.slot);
        if !state.connected {
            return Ok(false);
        }
        Ok(match button {
            ControllerButton::LeftTrigger if self.analog_triggers.0 => {
                state.axis(ControllerAxis::LeftTrigger) >= self.trigger_threshold
            }
            ControllerButton::RightTrigger if self.analog_triggers.1 => {
                state.axis(ControllerAxis::RightTrigger) >= self.trigger_threshold
            }
            other => state.pressed(other),
        })
    }
}

/// Scans `max_game_controllers` slots of a [`GamepadSource`].
pub struct GamepadDriver {
    source: Arc<dyn GamepadSource>,
    config: InputConfig,
    connected: Vec<bool>,
    initial: Vec<Box<dyn DeviceImp>>,
}

impl GamepadDriver {
    pub fn new<S: GamepadSource + 'static>(source: S, config: &InputConfig) -> Self {
        let source: Arc<dyn GamepadSource> = Arc::new(source);
        let mut driver = Self {
            source,
            config: config.clone(),
            connected: vec![false; config.max_game_controllers as usize],
            initial: Vec::new(),
        };
        for slot in 0..config.max_game_controllers {
            if let Some(device) = driver.try_open(slot) {
                driver.initial.push(device);
            }
        }
        log::info!("gamepad driver found {} controller(s)", driver.initial.len());
        driver
    }

    fn try_open(&mut self, slot: u32) -> Option<Box<dyn DeviceImp>> {
        if !self.source.capabilities(slot).connected {
            return None;
        }
        match GameControllerDevice::new(slot, Arc::clone(&self.source), &self.config) {
            Ok(device) => {
                self.connected[slot as usize] = true;
                Some(Box::new(device))
            }
            Err(e) => {
                log::warn!("slot {slot}: {e}");
                None
            }
        }
    }
}

impl InputDriver for GamepadDriver {
    fn id(&self) -> &str {
        GAMEPAD_DRIVER_ID
    }

    fn desc(&self) -> &str {
        "Slot-based game controller driver"
    }

    fn take_devices(&mut self) -> Vec<Box<dyn DeviceImp>> {
        std::mem::take(&mut self.initial)
    }

    fn poll_connections(&mut self) -> Vec<DriverEvent> {
        let mut events = Vec::new();
        for slot in 0..self.config.max_game_controllers {
            let was = self.connected[slot as usize];
            let live = self.source.capabilities(slot).connected;
            if live && !was {
                if let Some(device) = self.try_open(slot) {
                    events.push(DriverEvent::Connected(device));
                }
            } else if !live && was {
                self.connected[slot as usize] = false;
                events.push(DriverEvent::Disconnected(slot.to_string()));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadzone_zeroes_small_deflection_and_keeps_rim() {
        assert_eq!(apply_deadzone(0.05, 0.05, 0.2), (0.0, 0.0));
        let (x, y) = apply_deadzone(1.0, 0.0, 0.2);
        assert!((x - 1.0).abs() < 1e-6);
        assert_eq!(y, 0.0);
        assert_eq!(apply_deadzone(0.3, -0.1, 0.0), (0.3, -0.1));
    }

    #[test]
    fn state_bits_round_trip() {
        let mut state = GamepadState::default();
        state.set_button(ControllerButton::Start, true);
        assert!(state.pressed(ControllerButton::Start));
        assert!(!state.pressed(ControllerButton::A));
        state.set_button(ControllerButton::Start, false);
        assert_eq!(state.buttons, 0);
    }
}
