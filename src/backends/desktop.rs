//! Desktop driver: one mouse and one keyboard bound to the host window.
//!
//! The window never gains or loses its mouse/keyboard, so this driver raises
//! no connect/disconnect notifications.

use super::keyboard::{KeyboardDevice, KeyboardFeed};
use super::mouse::{MouseDevice, MouseFeed};
use crate::config::InputConfig;
use crate::device::DeviceImp;
use crate::driver::InputDriver;

pub const DESKTOP_DRIVER_ID: &str = "desktop";

pub struct DesktopDriver {
    mouse: Option<MouseDevice>,
    keyboard: Option<KeyboardDevice>,
}

impl DesktopDriver {
    /// Returns the driver plus the feeds the host window forwards events into.
    pub fn new(config: &InputConfig) -> (Self, KeyboardFeed, MouseFeed) {
        let (keyboard, keys) = KeyboardDevice::new(config.event_queue_capacity);
        let (mouse, pointer) = MouseDevice::new(config.event_queue_capacity);
        (
            Self {
                mouse: Some(mouse),
                keyboard: Some(keyboard),
            },
            keys,
            pointer,
        )
    }
}

impl InputDriver for DesktopDriver {
    fn id(&self) -> &str {
        DESKTOP_DRIVER_ID
    }

    fn desc(&self) -> &str {
        "Window mouse and keyboard input driver"
    }

    /// Mouse first, then keyboard.
    fn take_devices(&mut self) -> Vec<Box<dyn DeviceImp>> {
        let mut out: Vec<Box<dyn DeviceImp>> = Vec::new();
        if let Some(mouse) = self.mouse.take() {
            out.push(Box::new(mouse));
        }
        if let Some(keyboard) = self.keyboard.take() {
            out.push(Box::new(keyboard));
        }
        out
    }
}
