//! Driver boundary.
//!
//! A driver owns the device implementations of one input source (a window's
//! keyboard and mouse, the controller slots of a gamepad API, ...). The core
//! never discovers devices itself: it takes the driver's current list when the
//! driver is added, then reacts to the notifications the driver queues.

use crate::device::DeviceImp;

/// Connect/disconnect notification raised by a driver.
pub enum DriverEvent {
    /// A device was hot-plugged.
    Connected(Box<dyn DeviceImp>),
    /// The device with this identity ([`DeviceImp::id`]) went away.
    Disconnected(String),
}

impl std::fmt::Debug for DriverEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverEvent::Connected(imp) => f.debug_tuple("Connected").field(&imp.id()).finish(),
            DriverEvent::Disconnected(id) => f.debug_tuple("Disconnected").field(id).finish(),
        }
    }
}

pub trait InputDriver: Send {
    /// Unique driver id.
    fn id(&self) -> &str;

    /// Human-readable description.
    fn desc(&self) -> &str;

    /// Hand over every device currently available.
    ///
    /// Called once, when the driver is added to the manager.
    fn take_devices(&mut self) -> Vec<Box<dyn DeviceImp>>;

    /// Notifications queued since the last call. Never blocks.
    fn poll_connections(&mut self) -> Vec<DriverEvent> {
        Vec::new()
    }
}
