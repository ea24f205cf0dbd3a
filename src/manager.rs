//! Input manager.
//!
//! [`InputManager`] owns every driver and every live [`InputDevice`]. It is an
//! explicit value owned by the engine's update loop; independent managers
//! (one per test, for example) never share ids or devices.
//!
//! # Frame protocol
//! Call [`InputManager::tick`] exactly once per frame, before any consumer
//! reads button edges for that frame. A tick:
//! 1. drains driver connect/disconnect notifications (hot-plug),
//! 2. delivers each device's buffered push events,
//! 3. advances button edge state,
//! 4. dispatches lifecycle notifications and the frame's events to the bus.
//!
//! Calling `tick` twice in one frame consumes the edges of that frame.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use crate::config::InputConfig;
use crate::device::{DeviceCategory, DeviceImp};
use crate::driver::{DriverEvent, InputDriver};
use crate::error::{InputError, Result};
use crate::event::InputEvent;
use crate::eventbus::InputEventBus;
use crate::ids::IdAllocator;
use crate::input_device::InputDevice;
use crate::metadata::DeviceInfo;
use crate::snapshot::Snapshot;

/// Manager-wide device key: owning driver id plus the implementation's identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceKey {
    pub driver: String,
    pub device: String,
}

impl DeviceKey {
    pub fn new(driver: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            driver: driver.into(),
            device: device.into(),
        }
    }
}

impl fmt::Display for DeviceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.driver, self.device)
    }
}

pub struct InputManager {
    config: InputConfig,
    ids: IdAllocator,
    drivers: HashMap<String, Box<dyn InputDriver>>,
    driver_order: Vec<String>,
    devices: HashMap<DeviceKey, InputDevice>,
    // Connection order; `game_controller(i)` indexes into it.
    device_order: Vec<DeviceKey>,
    bus: InputEventBus,
    frame: u64,
    frame_events: Vec<InputEvent>,
    // Lifecycle changes since the last dispatch, in the order they happened.
    pending: Vec<Lifecycle>,
}

enum Lifecycle {
    Connected(DeviceInfo),
    Disconnected(DeviceKey),
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            config,
            ids: IdAllocator::new(),
            drivers: HashMap::new(),
            driver_order: Vec::new(),
            devices: HashMap::new(),
            device_order: Vec::new(),
            bus: InputEventBus::new(),
            frame: 0,
            frame_events: Vec::new(),
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Take ownership of `driver` and register every device it currently reports.
    ///
    /// Devices whose construction fails are skipped (and logged); the driver is
    /// still added.
    pub fn add_driver<D: InputDriver + 'static>(&mut self, driver: D) -> Result<()> {
        self.add_boxed_driver(Box::new(driver))
    }

    pub fn add_boxed_driver(&mut self, mut driver: Box<dyn InputDriver>) -> Result<()> {
        let driver_id = driver.id().to_string();
        if self.drivers.contains_key(&driver_id) {
            return Err(InputError::DuplicateDriver { driver: driver_id });
        }

        log::info!("adding input driver `{}` ({})", driver_id, driver.desc());
        for imp in driver.take_devices() {
            self.connect(&driver_id, imp);
        }

        self.driver_order.push(driver_id.clone());
        self.drivers.insert(driver_id, driver);
        Ok(())
    }

    /// Drop a driver and retire all of its devices.
    pub fn remove_driver(&mut self, driver_id: &str) -> bool {
        if self.drivers.remove(driver_id).is_none() {
            return false;
        }
        self.driver_order.retain(|id| id != driver_id);

        let owned: Vec<DeviceKey> = self
            .device_order
            .iter()
            .filter(|key| key.driver == driver_id)
            .cloned()
            .collect();
        for key in owned {
            self.retire(&key);
        }
        log::info!("removed input driver `{driver_id}`");
        true
    }

    pub fn driver_ids(&self) -> impl Iterator<Item = &str> {
        self.driver_order.iter().map(String::as_str)
    }

    fn connect(&mut self, driver_id: &str, imp: Box<dyn DeviceImp>) {
        let key = DeviceKey::new(driver_id, imp.id());
        if self.devices.contains_key(&key) {
            log::warn!("`{key}` connected again without a disconnect; retiring the old instance");
            self.retire(&key);
        }

        let first_axis = self.ids.axes_issued();
        let first_button = self.ids.buttons_issued();
        match InputDevice::new(key.clone(), imp, &mut self.ids) {
            Ok(device) => {
                log::info!(
                    "registered `{key}` ({:?}): axes {}..{}, buttons {}..{}",
                    device.category(),
                    first_axis,
                    self.ids.axes_issued(),
                    first_button,
                    self.ids.buttons_issued()
                );
                self.pending.push(Lifecycle::Connected(device.info()));
                self.device_order.push(key.clone());
                self.devices.insert(key, device);
            }
            Err(e) => log::warn!("not registering `{key}`: {e}"),
        }
    }

    fn retire(&mut self, key: &DeviceKey) -> bool {
        if self.devices.remove(key).is_none() {
            return false;
        }
        self.device_order.retain(|k| k != key);
        log::info!("retired `{key}`");
        self.pending.push(Lifecycle::Disconnected(key.clone()));
        true
    }

    /// Advance one frame. See the module docs for the exact order.
    pub fn tick(&mut self) {
        for driver_id in self.driver_order.clone() {
            let notifications = match self.drivers.get_mut(&driver_id) {
                Some(driver) => driver.poll_connections(),
                None => continue,
            };
            for notification in notifications {
                match notification {
                    DriverEvent::Connected(imp) => self.connect(&driver_id, imp),
                    DriverEvent::Disconnected(device) => {
                        let key = DeviceKey::new(driver_id.as_str(), device);
                        if !self.retire(&key) {
                            log::debug!("disconnect for unknown device `{key}`");
                        }
                    }
                }
            }
        }

        let now = Instant::now();
        self.frame_events.clear();
        for key in &self.device_order {
            let Some(device) = self.devices.get_mut(key) else {
                continue;
            };
            for kind in device.deliver_events() {
                self.frame_events.push(InputEvent {
                    at: now,
                    device: key.clone(),
                    frame: self.frame,
                    kind,
                });
            }
            device.tick();
        }
        if !self.frame_events.is_empty() {
            log::debug!("frame {}: {} input event(s)", self.frame, self.frame_events.len());
        }

        for change in std::mem::take(&mut self.pending) {
            match change {
                Lifecycle::Connected(info) => self.bus.emit_connected(&info),
                Lifecycle::Disconnected(key) => self.bus.emit_disconnected(&key),
            }
        }
        self.bus.emit_all(&self.frame_events);

        self.frame += 1;
    }

    /// Number of completed ticks.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Events delivered during the last tick, in delivery order.
    pub fn events(&self) -> &[InputEvent] {
        &self.frame_events
    }

    pub fn device(&self, key: &DeviceKey) -> Option<&InputDevice> {
        self.devices.get(key)
    }

    /// Live devices in connection order.
    pub fn devices(&self) -> impl Iterator<Item = &InputDevice> {
        self.device_order.iter().filter_map(|key| self.devices.get(key))
    }

    pub fn devices_of(&self, category: DeviceCategory) -> impl Iterator<Item = &InputDevice> {
        self.devices().filter(move |device| device.category() == category)
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// First connected keyboard.
    pub fn keyboard(&self) -> Option<&InputDevice> {
        self.devices_of(DeviceCategory::Keyboard).next()
    }

    /// First connected mouse.
    pub fn mouse(&self) -> Option<&InputDevice> {
        self.devices_of(DeviceCategory::Mouse).next()
    }

    /// `index`-th connected game controller, in connection order.
    pub fn game_controller(&self, index: usize) -> Option<&InputDevice> {
        self.devices_of(DeviceCategory::GameController).nth(index)
    }

    pub fn device_infos(&self) -> Vec<DeviceInfo> {
        self.devices().map(InputDevice::info).collect()
    }

    pub fn event_bus(&self) -> &InputEventBus {
        &self.bus
    }

    pub fn event_bus_mut(&mut self) -> &mut InputEventBus {
        &mut self.bus
    }

    /// Owned view of every device's current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.devices())
    }
}

impl fmt::Debug for InputManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputManager")
            .field("drivers", &self.driver_order)
            .field("devices", &self.device_order)
            .field("frame", &self.frame)
            .finish()
    }
}
