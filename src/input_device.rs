//! Logical device.
//!
//! [`InputDevice`] wraps one [`DeviceImp`] and hides its native-id space behind
//! engine-wide logical ids. Registration happens once, in [`InputDevice::new`],
//! walking the implementation's descriptor lists in the order it reports them;
//! the native→logical tables are never mutated afterwards.
//!
//! Reads are uniform regardless of the update model:
//! - polled controls forward to the implementation's getter on every call;
//! - event-driven controls return the last value delivered by a push event
//!   (initially `0.0` / released).
//!
//! Button edges (`is_button_down` / `is_button_up`) are computed once per frame in
//! [`InputDevice::tick`], which only the manager calls. Repeated reads within a
//! frame observe the same edge.

use std::collections::{HashMap, HashSet};

use crate::descriptor::{AxisBounds, AxisDescription, AxisImpDescription, ButtonDescription, ButtonImpDescription};
use crate::device::{DeviceCategory, DeviceImp, NamedControl};
use crate::error::{InputError, Result};
use crate::event::{DeviceEvent, InputKind};
use crate::ids::{AxisId, ButtonId, IdAllocator};
use crate::manager::DeviceKey;
use crate::metadata::DeviceInfo;

struct AxisSlot {
    id: AxisId,
    desc: AxisDescription,
    poll: bool,
    cached: f32,
}

struct ButtonSlot {
    id: ButtonId,
    desc: ButtonDescription,
    poll: bool,
    cached: bool,
    edge: EdgeState,
}

/// Previous/current pair for one button, advanced once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct EdgeState {
    previous: bool,
    current: bool,
    pressed_latch: bool,
    released_latch: bool,
    down: bool,
    up: bool,
}

impl EdgeState {
    fn latch(&mut self, pressed: bool) {
        if pressed {
            self.pressed_latch = true;
        } else {
            self.released_latch = true;
        }
    }

    fn advance(&mut self, sample: bool) {
        self.previous = self.current;
        self.current = sample;
        // Latches keep a press+release inside one frame from being lost.
        self.down = (self.current && !self.previous) || self.pressed_latch;
        self.up = (!self.current && self.previous) || self.released_latch;
        self.pressed_latch = false;
        self.released_latch = false;
    }
}

/// Bounds of an axis with `OtherAxis` references resolved to logical ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResolvedBounds {
    Unbound,
    Values { min: f32, max: f32 },
    Axes { min: AxisId, max: AxisId },
}

/// Engine-facing view of one physical device.
pub struct InputDevice {
    key: DeviceKey,
    imp: Box<dyn DeviceImp>,
    axis_map: HashMap<i32, AxisId>,
    button_map: HashMap<i32, ButtonId>,
    axes: Vec<AxisSlot>,
    buttons: Vec<ButtonSlot>,
    axis_index: HashMap<AxisId, usize>,
    button_index: HashMap<ButtonId, usize>,
}

impl InputDevice {
    /// Wrap `imp` and register all of its controls.
    ///
    /// Fails with [`InputError::DuplicateAxis`] / [`InputError::DuplicateButton`]
    /// when the implementation lists a native id twice. Validation runs before
    /// any id is minted.
    pub fn new(key: DeviceKey, imp: Box<dyn DeviceImp>, ids: &mut IdAllocator) -> Result<Self> {
        let mut seen = HashSet::new();
        for axis in imp.axis_imp_desc() {
            if !seen.insert(axis.desc.native_id) {
                return Err(InputError::DuplicateAxis {
                    device: key.to_string(),
                    native: axis.desc.native_id,
                });
            }
        }
        seen.clear();
        for button in imp.button_imp_desc() {
            if !seen.insert(button.desc.native_id) {
                return Err(InputError::DuplicateButton {
                    device: key.to_string(),
                    native: button.desc.native_id,
                });
            }
        }

        let axis_descs: Vec<AxisImpDescription> = imp.axis_imp_desc().to_vec();
        let button_descs: Vec<ButtonImpDescription> = imp.button_imp_desc().to_vec();

        let mut device = Self {
            key,
            imp,
            axis_map: HashMap::with_capacity(axis_descs.len()),
            button_map: HashMap::with_capacity(button_descs.len()),
            axes: Vec::with_capacity(axis_descs.len()),
            buttons: Vec::with_capacity(button_descs.len()),
            axis_index: HashMap::with_capacity(axis_descs.len()),
            button_index: HashMap::with_capacity(button_descs.len()),
        };

        for axis in axis_descs {
            device.register_axis(axis, ids);
        }
        for button in button_descs {
            device.register_button(button, ids);
        }

        log::debug!(
            "registered {} axes and {} buttons for `{}`",
            device.axes.len(),
            device.buttons.len(),
            device.key
        );
        Ok(device)
    }

    fn register_axis(&mut self, axis: AxisImpDescription, ids: &mut IdAllocator) {
        let id = ids.next_axis();
        self.axis_map.insert(axis.desc.native_id, id);
        self.axis_index.insert(id, self.axes.len());
        self.axes.push(AxisSlot {
            id,
            desc: axis.desc,
            poll: axis.poll,
            cached: 0.0,
        });
    }

    fn register_button(&mut self, button: ButtonImpDescription, ids: &mut IdAllocator) {
        let id = ids.next_button();
        self.button_map.insert(button.desc.native_id, id);
        self.button_index.insert(id, self.buttons.len());
        self.buttons.push(ButtonSlot {
            id,
            desc: button.desc,
            poll: button.poll,
            cached: false,
            edge: EdgeState::default(),
        });
    }

    pub fn key(&self) -> &DeviceKey {
        &self.key
    }

    /// Identity reported by the implementation.
    pub fn imp_id(&self) -> &str {
        self.imp.id()
    }

    pub fn desc(&self) -> &str {
        self.imp.desc()
    }

    pub fn category(&self) -> DeviceCategory {
        self.imp.category()
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Logical id of a native axis, if registered.
    pub fn axis_id(&self, native_id: i32) -> Option<AxisId> {
        self.axis_map.get(&native_id).copied()
    }

    pub fn button_id(&self, native_id: i32) -> Option<ButtonId> {
        self.button_map.get(&native_id).copied()
    }

    /// Registered axes in registration order.
    pub fn axes(&self) -> impl Iterator<Item = (AxisId, &AxisDescription)> {
        self.axes.iter().map(|slot| (slot.id, &slot.desc))
    }

    pub fn buttons(&self) -> impl Iterator<Item = (ButtonId, &ButtonDescription)> {
        self.buttons.iter().map(|slot| (slot.id, &slot.desc))
    }

    /// Logical id of the axis whose descriptor carries `name`.
    pub fn axis_named(&self, name: &str) -> Option<AxisId> {
        self.axes.iter().find(|slot| slot.desc.name == name).map(|slot| slot.id)
    }

    pub fn button_named(&self, name: &str) -> Option<ButtonId> {
        self.buttons.iter().find(|slot| slot.desc.name == name).map(|slot| slot.id)
    }

    pub fn axis_description(&self, axis: AxisId) -> Result<&AxisDescription> {
        Ok(&self.axis_slot(axis)?.desc)
    }

    pub fn button_description(&self, button: ButtonId) -> Result<&ButtonDescription> {
        Ok(&self.button_slot(button)?.desc)
    }

    fn axis_slot(&self, axis: AxisId) -> Result<&AxisSlot> {
        self.axis_index
            .get(&axis)
            .map(|&i| &self.axes[i])
            .ok_or_else(|| InputError::UnsupportedAxis {
                device: self.key.to_string(),
                axis: axis.to_string(),
            })
    }

    fn button_slot(&self, button: ButtonId) -> Result<&ButtonSlot> {
        self.button_index
            .get(&button)
            .map(|&i| &self.buttons[i])
            .ok_or_else(|| InputError::UnsupportedButton {
                device: self.key.to_string(),
                button: button.to_string(),
            })
    }

    /// Current axis value.
    pub fn get_axis(&self, axis: AxisId) -> Result<f32> {
        let slot = self.axis_slot(axis)?;
        if slot.poll {
            self.imp.get_axis(slot.desc.native_id)
        } else {
            Ok(slot.cached)
        }
    }

    /// Current held state.
    pub fn get_button(&self, button: ButtonId) -> Result<bool> {
        let slot = self.button_slot(button)?;
        if slot.poll {
            self.imp.get_button(slot.desc.native_id)
        } else {
            Ok(slot.cached)
        }
    }

    /// `true` only during the frame the button went down.
    pub fn is_button_down(&self, button: ButtonId) -> Result<bool> {
        Ok(self.button_slot(button)?.edge.down)
    }

    /// `true` only during the frame the button went up.
    pub fn is_button_up(&self, button: ButtonId) -> Result<bool> {
        Ok(self.button_slot(button)?.edge.up)
    }

    /// Bounds of `axis`, with `OtherAxis` references mapped to logical ids.
    pub fn axis_bounds(&self, axis: AxisId) -> Result<ResolvedBounds> {
        let slot = self.axis_slot(axis)?;
        Ok(match slot.desc.bounds {
            AxisBounds::Unbound => ResolvedBounds::Unbound,
            AxisBounds::Bounded { min, max } => ResolvedBounds::Values { min, max },
            AxisBounds::OtherAxis { min_axis, max_axis } => {
                let lookup = |native: i32| {
                    self.axis_id(native).ok_or_else(|| InputError::NoSuchAxis {
                        device: self.key.to_string(),
                        native,
                    })
                };
                ResolvedBounds::Axes {
                    min: lookup(min_axis)?,
                    max: lookup(max_axis)?,
                }
            }
        })
    }

    /// Numeric `(min, max)` range of `axis`, reading bounding axes if needed.
    pub fn axis_range(&self, axis: AxisId) -> Result<Option<(f32, f32)>> {
        match self.axis_bounds(axis)? {
            ResolvedBounds::Unbound => Ok(None),
            ResolvedBounds::Values { min, max } => Ok(Some((min, max))),
            ResolvedBounds::Axes { min, max } => Ok(Some((self.get_axis(min)?, self.get_axis(max)?))),
        }
    }

    fn expect_category(&self, expected: DeviceCategory) -> Result<()> {
        let actual = self.category();
        if actual != expected {
            return Err(InputError::WrongCategory {
                device: self.key.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn named_axis<A: NamedControl>(&self, axis: A) -> Result<AxisId> {
        self.expect_category(A::CATEGORY)?;
        self.axis_id(axis.native_id()).ok_or_else(|| InputError::UnsupportedAxis {
            device: self.key.to_string(),
            axis: axis.control_name().to_string(),
        })
    }

    fn named_button<B: NamedControl>(&self, button: B) -> Result<ButtonId> {
        self.expect_category(B::CATEGORY)?;
        self.button_id(button.native_id()).ok_or_else(|| InputError::UnsupportedButton {
            device: self.key.to_string(),
            button: button.control_name().to_string(),
        })
    }

    /// Typed form of [`get_axis`](Self::get_axis), e.g. `device.axis_of(ControllerAxis::LeftX)`.
    pub fn axis_of<A: NamedControl>(&self, axis: A) -> Result<f32> {
        self.get_axis(self.named_axis(axis)?)
    }

    pub fn button_of<B: NamedControl>(&self, button: B) -> Result<bool> {
        self.get_button(self.named_button(button)?)
    }

    pub fn is_down_of<B: NamedControl>(&self, button: B) -> Result<bool> {
        self.is_button_down(self.named_button(button)?)
    }

    pub fn is_up_of<B: NamedControl>(&self, button: B) -> Result<bool> {
        self.is_button_up(self.named_button(button)?)
    }

    /// Drain the implementation's push queue and apply it to the caches.
    ///
    /// Returns the changes in logical ids, in delivery order.
    pub(crate) fn deliver_events(&mut self) -> Vec<InputKind> {
        let events = self.imp.poll();
        let mut out = Vec::with_capacity(events.len());

        for event in events {
            match event {
                DeviceEvent::AxisChanged { axis, value } => {
                    let Some(&i) = self.axis_map.get(&axis).and_then(|id| self.axis_index.get(id)) else {
                        log::warn!("`{}`: push event for unknown axis {axis}", self.key);
                        continue;
                    };
                    let slot = &mut self.axes[i];
                    if slot.poll {
                        log::warn!("`{}`: ignoring push event for polled axis `{}`", self.key, slot.desc.name);
                        continue;
                    }
                    slot.cached = value;
                    out.push(InputKind::AxisChanged { axis: slot.id, value });
                }
                DeviceEvent::ButtonChanged { button, pressed } => {
                    let Some(&i) = self.button_map.get(&button).and_then(|id| self.button_index.get(id)) else {
                        log::warn!("`{}`: push event for unknown button {button}", self.key);
                        continue;
                    };
                    let slot = &mut self.buttons[i];
                    if slot.poll {
                        log::warn!("`{}`: ignoring push event for polled button `{}`", self.key, slot.desc.name);
                        continue;
                    }
                    if slot.cached == pressed {
                        continue;
                    }
                    slot.cached = pressed;
                    slot.edge.latch(pressed);
                    out.push(if pressed {
                        InputKind::ButtonPressed { button: slot.id }
                    } else {
                        InputKind::ButtonReleased { button: slot.id }
                    });
                }
            }
        }
        out
    }

    /// Advance edge state by one frame.
    pub(crate) fn tick(&mut self) {
        for slot in &mut self.buttons {
            let sample = if slot.poll {
                match self.imp.get_button(slot.desc.native_id) {
                    Ok(pressed) => pressed,
                    Err(e) => {
                        log::warn!("`{}`: failed to sample `{}`: {e}", self.key, slot.desc.name);
                        slot.edge.current
                    }
                }
            } else {
                slot.cached
            };
            slot.edge.advance(sample);
        }
    }

    pub fn info(&self) -> DeviceInfo {
        DeviceInfo {
            key: self.key.clone(),
            imp_id: self.imp.id().to_string(),
            desc: self.imp.desc().to_string(),
            category: self.category(),
            axes: self.axes.iter().map(|slot| (slot.id, slot.desc.name.clone())).collect(),
            buttons: self.buttons.iter().map(|slot| (slot.id, slot.desc.name.clone())).collect(),
        }
    }
}

impl std::fmt::Debug for InputDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputDevice")
            .field("key", &self.key)
            .field("category", &self.category())
            .field("axes", &self.axes.len())
            .field("buttons", &self.buttons.len())
            .finish()
    }
}
