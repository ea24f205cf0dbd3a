#![allow(dead_code)]

use axisgate::backends::desktop::DesktopDriver;
use axisgate::backends::gamepad::{GamepadCapabilities, GamepadDriver};
use axisgate::backends::keyboard::KeyboardFeed;
use axisgate::backends::mouse::MouseFeed;
use axisgate::backends::virtual_input::VirtualGamepads;
use axisgate::{AxisId, ButtonId, InputConfig, InputDevice, InputManager};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct Rig {
    pub input: InputManager,
    pub keys: KeyboardFeed,
    pub pointer: MouseFeed,
    pub pads: VirtualGamepads,
}

/// Desktop driver first, then a gamepad driver with `pads` pre-plugged slots.
pub fn rig(plugged: &[u32]) -> Rig {
    init_logging();
    let config = InputConfig::default();
    let (desktop, keys, pointer) = DesktopDriver::new(&config);
    let pads = VirtualGamepads::new();
    for slot in plugged {
        pads.plug(*slot, GamepadCapabilities::standard());
    }

    let mut input = InputManager::with_config(config.clone());
    input.add_driver(desktop).unwrap();
    input
        .add_driver(GamepadDriver::new(pads.clone(), &config))
        .unwrap();

    Rig {
        input,
        keys,
        pointer,
        pads,
    }
}

pub fn axis_ids(device: &InputDevice) -> Vec<AxisId> {
    device.axes().map(|(id, _)| id).collect()
}

pub fn button_ids(device: &InputDevice) -> Vec<ButtonId> {
    device.buttons().map(|(id, _)| id).collect()
}
