use crate::event::{InputEvent, InputKind};
use crate::manager::DeviceKey;
use crate::metadata::DeviceInfo;
use std::collections::BTreeMap;

/// Trait for reacting to logical input events and device lifecycle changes.
///
/// Listeners run on the update thread at the end of
/// [`InputManager::tick`](crate::manager::InputManager::tick), after edge state
/// for the frame has been computed.
pub trait InputListener: Send {
    fn on_input(&mut self, event: &InputEvent);

    fn on_device_connected(&mut self, _info: &DeviceInfo) {}

    fn on_device_disconnected(&mut self, _key: &DeviceKey) {}
}

/// Determines which kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    AxesOnly,
    ButtonsOnly,
    Custom(fn(&InputEvent) -> bool),
}

/// Listener id returned by [`InputEventBus::add_listener`].
pub type ListenerId = u64;

/// Metadata-wrapped listener with filters and control flags.
struct ListenerEntry {
    listener: Box<dyn InputListener>,
    enabled: bool,
    filter: EventFilter,
    tag: Option<DeviceKey>,
}

impl ListenerEntry {
    fn wants_device(&self, key: &DeviceKey) -> bool {
        self.tag.as_ref().map_or(true, |wanted| wanted == key)
    }
}

#[derive(Default)]
pub struct InputEventBus {
    next_id: ListenerId,
    // Ordered so listeners run in registration order.
    listeners: BTreeMap<ListenerId, ListenerEntry>,
}

impl InputEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener with optional filtering and device tag.
    pub fn add_listener(
        &mut self,
        listener: impl InputListener + 'static,
        filter: EventFilter,
        tag: Option<DeviceKey>,
    ) -> ListenerId {
        let id = self.next_id;
        self.listeners.insert(
            id,
            ListenerEntry {
                listener: Box::new(listener),
                enabled: true,
                filter,
                tag,
            },
        );
        self.next_id += 1;
        id
    }

    pub fn enable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Mutes a listener without removing it.
    pub fn disable(&mut self, id: ListenerId) {
        if let Some(entry) = self.listeners.get_mut(&id) {
            entry.enabled = false;
        }
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    fn emit(&mut self, event: &InputEvent) {
        for entry in self.listeners.values_mut() {
            if !entry.enabled || !entry.wants_device(&event.device) {
                continue;
            }

            let passes_filter = match entry.filter {
                EventFilter::All => true,
                EventFilter::AxesOnly => matches!(event.kind, InputKind::AxisChanged { .. }),
                EventFilter::ButtonsOnly => event.kind.is_button(),
                EventFilter::Custom(f) => f(event),
            };

            if passes_filter {
                entry.listener.on_input(event);
            }
        }
    }

    /// Emits a batch of events to matching listeners.
    pub fn emit_all(&mut self, events: &[InputEvent]) {
        for event in events {
            self.emit(event);
        }
    }

    pub fn emit_connected(&mut self, info: &DeviceInfo) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.wants_device(&info.key) {
                entry.listener.on_device_connected(info);
            }
        }
    }

    pub fn emit_disconnected(&mut self, key: &DeviceKey) {
        for entry in self.listeners.values_mut() {
            if entry.enabled && entry.wants_device(key) {
                entry.listener.on_device_disconnected(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{AxisId, ButtonId};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use std::time::Instant;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<InputKind>>>);

    impl InputListener for Recorder {
        fn on_input(&mut self, event: &InputEvent) {
            self.0.lock().push(event.kind);
        }
    }

    fn event(device: &str, kind: InputKind) -> InputEvent {
        InputEvent {
            at: Instant::now(),
            device: DeviceKey::new("drv", device),
            frame: 0,
            kind,
        }
    }

    #[test]
    fn filters_and_tags_apply() {
        let mut bus = InputEventBus::new();
        let all = Recorder::default();
        let buttons = Recorder::default();
        let tagged = Recorder::default();
        bus.add_listener(all.clone(), EventFilter::All, None);
        bus.add_listener(buttons.clone(), EventFilter::ButtonsOnly, None);
        bus.add_listener(tagged.clone(), EventFilter::All, Some(DeviceKey::new("drv", "b")));

        bus.emit_all(&[
            event("a", InputKind::AxisChanged { axis: AxisId(0), value: 0.5 }),
            event("b", InputKind::ButtonPressed { button: ButtonId(1) }),
        ]);

        assert_eq!(all.0.lock().len(), 2);
        assert_eq!(*buttons.0.lock(), vec![InputKind::ButtonPressed { button: ButtonId(1) }]);
        assert_eq!(tagged.0.lock().len(), 1);
    }

    #[test]
    fn disabled_listeners_are_skipped() {
        let mut bus = InputEventBus::new();
        let rec = Recorder::default();
        let id = bus.add_listener(rec.clone(), EventFilter::All, None);
        bus.disable(id);
        bus.emit_all(&[event("a", InputKind::ButtonReleased { button: ButtonId(0) })]);
        assert!(rec.0.lock().is_empty());

        bus.enable(id);
        bus.emit_all(&[event("a", InputKind::ButtonReleased { button: ButtonId(0) })]);
        assert_eq!(rec.0.lock().len(), 1);

        assert!(bus.remove_listener(id));
        assert!(bus.is_empty());
    }
}
