//! Reference backends.
//!
//! Implementations of [`DeviceImp`](crate::device::DeviceImp) and
//! [`InputDriver`](crate::driver::InputDriver) that cover the three update
//! models the core has to reconcile:
//! - [`keyboard`]: buttons only, every key event-driven;
//! - [`mouse`]: polled axes, event-driven buttons;
//! - [`gamepad`]: a capability-dependent subset of axes/buttons, all polled.
//!
//! The OS capture layer is not part of this crate. A host application forwards
//! window events through the feeds ([`KeyboardFeed`](keyboard::KeyboardFeed),
//! [`MouseFeed`](mouse::MouseFeed)) from whatever thread receives them, and
//! implements [`GamepadSource`](gamepad::GamepadSource) over its controller API.
//!
//! # Feature flags
//! - **`virtual`**: enables [`virtual_input::VirtualGamepads`], an in-process
//!   controller source used by tests and demos (default).

pub mod desktop;
pub mod gamepad;
pub mod keyboard;
pub mod mouse;

#[cfg(feature = "virtual")]
#[cfg_attr(docsrs, doc(cfg(feature = "virtual")))]
pub mod virtual_input;

use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::event::DeviceEvent;

/// Producer side of a bounded push-event queue.
///
/// Safe to clone and move to the thread that receives OS events. Never blocks:
/// when the queue is full the event is dropped and a warning is logged.
#[derive(Clone, Debug)]
pub struct EventFeed {
    device: String,
    tx: Sender<DeviceEvent>,
}

impl EventFeed {
    /// Returns `false` if the event was dropped.
    pub fn send(&self, event: DeviceEvent) -> bool {
        match self.tx.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                log::warn!("`{}`: push queue full, dropping {:?}", self.device, event);
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("`{}`: device gone, dropping event", self.device);
                false
            }
        }
    }
}

/// Bounded queue shared by a feed and the device that drains it.
pub(crate) fn push_queue(device: &str, capacity: usize) -> (EventFeed, Receiver<DeviceEvent>) {
    let (tx, rx) = crossbeam_channel::bounded(capacity.max(1));
    (
        EventFeed {
            device: device.to_string(),
            tx,
        },
        rx,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_queue_drops_instead_of_blocking() {
        let (feed, rx) = push_queue("test", 1);
        assert!(feed.send(DeviceEvent::ButtonChanged { button: 1, pressed: true }));
        assert!(!feed.send(DeviceEvent::ButtonChanged { button: 1, pressed: false }));
        assert_eq!(rx.try_iter().count(), 1);
    }
}
