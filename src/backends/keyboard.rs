//! Keyboard device: no axes, one event-driven button per [`KeyCode`].

use crossbeam_channel::Receiver;

use super::{push_queue, EventFeed};
use crate::descriptor::{AxisImpDescription, ButtonImpDescription};
use crate::device::{DeviceCategory, DeviceImp};
use crate::error::{InputError, Result};
use crate::event::DeviceEvent;
use crate::keys::KeyCode;

const KEYBOARD_ID: &str = "keyboard";

/// Host-side handle for forwarding key events.
#[derive(Clone, Debug)]
pub struct KeyboardFeed(EventFeed);

impl KeyboardFeed {
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.0.send(DeviceEvent::ButtonChanged {
            button: key as i32,
            pressed: true,
        })
    }

    pub fn key_up(&self, key: KeyCode) -> bool {
        self.0.send(DeviceEvent::ButtonChanged {
            button: key as i32,
            pressed: false,
        })
    }
}

pub struct KeyboardDevice {
    buttons: Vec<ButtonImpDescription>,
    rx: Receiver<DeviceEvent>,
}

impl KeyboardDevice {
    /// Create the device and the feed the host uses to push key events into it.
    pub fn new(queue_capacity: usize) -> (Self, KeyboardFeed) {
        let (feed, rx) = push_queue(KEYBOARD_ID, queue_capacity);
        let buttons = KeyCode::ALL
            .iter()
            .map(|key| ButtonImpDescription::pushed(key.name(), *key as i32))
            .collect();
        (Self { buttons, rx }, KeyboardFeed(feed))
    }
}

impl DeviceImp for KeyboardDevice {
    fn id(&self) -> &str {
        KEYBOARD_ID
    }

    fn desc(&self) -> &str {
        "Standard keyboard"
    }

    fn category(&self) -> DeviceCategory {
        DeviceCategory::Keyboard
    }

    fn axis_imp_desc(&self) -> &[AxisImpDescription] {
        &[]
    }

    fn button_imp_desc(&self) -> &[ButtonImpDescription] {
        &self.buttons
    }

    fn get_axis(&self, native_id: i32) -> Result<f32> {
        Err(InputError::NoSuchAxis {
            device: KEYBOARD_ID.into(),
            native: native_id,
        })
    }

    fn get_button(&self, native_id: i32) -> Result<bool> {
        if KeyCode::from_native(native_id).is_some() {
            Err(InputError::NotPollable {
                device: KEYBOARD_ID.into(),
                button: native_id,
            })
        } else {
            Err(InputError::NoSuchButton {
                device: KEYBOARD_ID.into(),
                native: native_id,
            })
        }
    }

    fn poll(&mut self) -> Vec<DeviceEvent> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_pushed_button_per_key() {
        let (kb, _feed) = KeyboardDevice::new(8);
        assert_eq!(kb.axis_count(), 0);
        assert_eq!(kb.button_count(), KeyCode::ALL.len());
        assert!(kb.button_imp_desc().iter().all(|b| !b.poll));
    }

    #[test]
    fn getters_refuse_polling() {
        let (kb, _feed) = KeyboardDevice::new(8);
        assert!(matches!(kb.get_axis(0), Err(InputError::NoSuchAxis { .. })));
        assert!(matches!(
            kb.get_button(KeyCode::A as i32),
            Err(InputError::NotPollable { .. })
        ));
        assert!(matches!(kb.get_button(-5), Err(InputError::NoSuchButton { .. })));
    }

    #[test]
    fn feed_events_come_out_of_poll_in_order() {
        let (mut kb, feed) = KeyboardDevice::new(8);
        feed.key_down(KeyCode::W);
        feed.key_up(KeyCode::W);
        assert_eq!(
            kb.poll(),
            vec![
                DeviceEvent::ButtonChanged { button: 87, pressed: true },
                DeviceEvent::ButtonChanged { button: 87, pressed: false },
            ]
        );
        assert!(kb.poll().is_empty());
    }
}
