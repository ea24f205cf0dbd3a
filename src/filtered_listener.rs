//! Listener adapter that narrows what reaches another listener.
//!
//! [`EventFilter::Custom`](crate::EventFilter::Custom) only takes a plain `fn`;
//! use [`FilteredListener`] when the predicate has to capture state, or when a
//! listener should only hear about one device's lifecycle.

use crate::event::InputEvent;
use crate::eventbus::InputListener;
use crate::manager::DeviceKey;
use crate::metadata::DeviceInfo;

type Predicate = Box<dyn Fn(&InputEvent) -> bool + Send>;

pub struct FilteredListener<L> {
    inner: L,
    accept: Predicate,
    device: Option<DeviceKey>,
}

impl<L: InputListener> FilteredListener<L> {
    /// Forward input events for which `accept` holds. Lifecycle notifications
    /// are forwarded for every device.
    pub fn new(inner: L, accept: impl Fn(&InputEvent) -> bool + Send + 'static) -> Self {
        Self {
            inner,
            accept: Box::new(accept),
            device: None,
        }
    }

    /// Forward only what concerns `device`, lifecycle included.
    pub fn for_device(inner: L, device: DeviceKey) -> Self {
        let wanted = device.clone();
        Self {
            inner,
            accept: Box::new(move |event: &InputEvent| event.device == wanted),
            device: Some(device),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }

    fn concerns(&self, key: &DeviceKey) -> bool {
        self.device.as_ref().map_or(true, |device| device == key)
    }
}

impl<L: InputListener> InputListener for FilteredListener<L> {
    fn on_input(&mut self, event: &InputEvent) {
        if (self.accept)(event) {
            self.inner.on_input(event);
        }
    }

    fn on_device_connected(&mut self, info: &DeviceInfo) {
        if self.concerns(&info.key) {
            self.inner.on_device_connected(info);
        }
    }

    fn on_device_disconnected(&mut self, key: &DeviceKey) {
        if self.concerns(key) {
            self.inner.on_device_disconnected(key);
        }
    }
}
