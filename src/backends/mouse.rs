//! Mouse device.
//!
//! Seven polled axes (`X`, `Y`, `Wheel`, `MinX`, `MaxX`, `MinY`, `MaxY`) and
//! three event-driven buttons (`Left`, `Middle`, `Right`). `X`/`Y` are bounded by
//! the `Min*`/`Max*` axes, which report the canvas extents, so consumers can
//! normalize the cursor without knowing the window size.

use crossbeam_channel::Receiver;
use parking_lot::Mutex;
use std::sync::Arc;

use super::{push_queue, EventFeed};
use crate::descriptor::{
    AxisBounds, AxisDescription, AxisDirection, AxisImpDescription, AxisNature, ButtonImpDescription,
};
use crate::device::{DeviceCategory, DeviceImp};
use crate::error::{InputError, Result};
use crate::event::DeviceEvent;
use crate::keys::{MouseAxis, MouseButton};

const MOUSE_ID: &str = "mouse";

/// Pointer state written by the host, read by polls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    /// Accumulated wheel position.
    pub wheel: f32,
    pub width: f32,
    pub height: f32,
}

/// Host-side handle for forwarding pointer input.
#[derive(Clone, Debug)]
pub struct MouseFeed {
    events: EventFeed,
    pointer: Arc<Mutex<PointerState>>,
}

impl MouseFeed {
    pub fn move_to(&self, x: f32, y: f32) {
        let mut p = self.pointer.lock();
        p.x = x;
        p.y = y;
    }

    pub fn scroll(&self, delta: f32) {
        self.pointer.lock().wheel += delta;
    }

    pub fn resize(&self, width: f32, height: f32) {
        let mut p = self.pointer.lock();
        p.width = width;
        p.height = height;
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.events.send(DeviceEvent::ButtonChanged {
            button: button as i32,
            pressed: true,
        })
    }

    pub fn button_up(&self, button: MouseButton) -> bool {
        self.events.send(DeviceEvent::ButtonChanged {
            button: button as i32,
            pressed: false,
        })
    }
}

pub struct MouseDevice {
    axes: Vec<AxisImpDescription>,
    buttons: Vec<ButtonImpDescription>,
    pointer: Arc<Mutex<PointerState>>,
    rx: Receiver<DeviceEvent>,
}

fn position_axis(axis: MouseAxis, direction: AxisDirection, bounds: AxisBounds) -> AxisImpDescription {
    AxisImpDescription::polled(AxisDescription::new(
        axis.name(),
        axis as i32,
        direction,
        AxisNature::Position,
        bounds,
    ))
}

impl MouseDevice {
    pub fn new(queue_capacity: usize) -> (Self, MouseFeed) {
        let (events, rx) = push_queue(MOUSE_ID, queue_capacity);
        let pointer = Arc::new(Mutex::new(PointerState::default()));

        let axes = vec![
            position_axis(
                MouseAxis::X,
                AxisDirection::X,
                AxisBounds::OtherAxis {
                    min_axis: MouseAxis::MinX as i32,
                    max_axis: MouseAxis::MaxX as i32,
                },
            ),
            position_axis(
                MouseAxis::Y,
                AxisDirection::Y,
                AxisBounds::OtherAxis {
                    min_axis: MouseAxis::MinY as i32,
                    max_axis: MouseAxis::MaxY as i32,
                },
            ),
            position_axis(MouseAxis::Wheel, AxisDirection::Z, AxisBounds::Unbound),
            position_axis(MouseAxis::MinX, AxisDirection::X, AxisBounds::Unbound),
            position_axis(MouseAxis::MaxX, AxisDirection::X, AxisBounds::Unbound),
            position_axis(MouseAxis::MinY, AxisDirection::Y, AxisBounds::Unbound),
            position_axis(MouseAxis::MaxY, AxisDirection::Y, AxisBounds::Unbound),
        ];
        let buttons = [MouseButton::Left, MouseButton::Middle, MouseButton::Right]
            .iter()
            .map(|b| ButtonImpDescription::pushed(b.name(), *b as i32))
            .collect();

        let feed = MouseFeed {
            events,
            pointer: Arc::clone(&pointer),
        };
        (
            Self {
                axes,
                buttons,
                pointer,
                rx,
            },
            feed,
        )
    }
}

impl DeviceImp for MouseDevice {
    fn id(&self) -> &str {
        MOUSE_ID
    }

    fn desc(&self) -> &str {
        "Standard mouse"
    }

    fn category(&self) -> DeviceCategory {
        DeviceCategory::Mouse
    }

    fn axis_imp_desc(&self) -> &[AxisImpDescription] {
        &self.axes
    }

    fn button_imp_desc(&self) -> &[ButtonImpDescription] {
        &self.buttons
    }

    fn get_axis(&self, native_id: i32) -> Result<f32> {
        let p = *self.pointer.lock();
        match MouseAxis::from_native(native_id) {
            Some(MouseAxis::X) => Ok(p.x),
            Some(MouseAxis::Y) => Ok(p.y),
            Some(MouseAxis::Wheel) => Ok(p.wheel),
            Some(MouseAxis::MinX) | Some(MouseAxis::MinY) => Ok(0.0),
            Some(MouseAxis::MaxX) => Ok(p.width),
            Some(MouseAxis::MaxY) => Ok(p.height),
            None => Err(InputError::NoSuchAxis {
                device: MOUSE_ID.into(),
                native: native_id,
            }),
        }
    }

    fn get_button(&self, native_id: i32) -> Result<bool> {
        if MouseButton::from_native(native_id).is_some() {
            Err(InputError::NotPollable {
                device: MOUSE_ID.into(),
                button: native_id,
            })
        } else {
            Err(InputError::NoSuchButton {
                device: MOUSE_ID.into(),
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
    fn axes_follow_pointer_state() {
        let (mouse, feed) = MouseDevice::new(4);
        feed.resize(800.0, 600.0);
        feed.move_to(12.0, 34.0);
        feed.scroll(1.0);
        feed.scroll(0.5);

        assert_eq!(mouse.get_axis(MouseAxis::X as i32).unwrap(), 12.0);
        assert_eq!(mouse.get_axis(MouseAxis::Y as i32).unwrap(), 34.0);
        assert_eq!(mouse.get_axis(MouseAxis::Wheel as i32).unwrap(), 1.5);
        assert_eq!(mouse.get_axis(MouseAxis::MaxX as i32).unwrap(), 800.0);
        assert_eq!(mouse.get_axis(MouseAxis::MinY as i32).unwrap(), 0.0);
        assert!(mouse.get_axis(0).is_err());
    }

    #[test]
    fn descriptor_order_is_fixed() {
        let (mouse, _feed) = MouseDevice::new(4);
        let names: Vec<&str> = mouse.axis_imp_desc().iter().map(|a| a.desc.name.as_str()).collect();
        assert_eq!(names, ["X", "Y", "Wheel", "MinX", "MaxX", "MinY", "MaxY"]);
        let buttons: Vec<&str> = mouse.button_imp_desc().iter().map(|b| b.desc.name.as_str()).collect();
        assert_eq!(buttons, ["Left", "Middle", "Right"]);
    }
}
