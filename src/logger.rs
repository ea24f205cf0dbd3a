use crate::event::InputEvent;
use crate::eventbus::InputListener;
use crate::manager::DeviceKey;
use crate::metadata::DeviceInfo;

/// A listener that forwards every event to the `log` facade.
#[derive(Debug, Default)]
pub struct LoggingListener;

impl LoggingListener {
    pub fn new() -> Self {
        LoggingListener
    }
}

impl InputListener for LoggingListener {
    fn on_input(&mut self, event: &InputEvent) {
        log::debug!("[input] frame {} {}: {:?}", event.frame, event.device, event.kind);
    }

    fn on_device_connected(&mut self, info: &DeviceInfo) {
        log::info!("[input] connected {} ({:?}, {})", info.key, info.category, info.desc);
    }

    fn on_device_disconnected(&mut self, key: &DeviceKey) {
        log::info!("[input] disconnected {key}");
    }
}
