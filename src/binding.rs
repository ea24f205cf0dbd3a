//! Named action bindings.
//!
//! A [`BindingProfile`] maps action names to controls identified by device
//! category and descriptor name, so game code can read `"jump"` instead of a
//! logical id. Profiles are plain data and load from TOML:
//!
//! ```toml
//! name = "default"
//!
//! [[bindings]]
//! action = "move_x"
//! category = "GameController"
//! control = { Axis = "LeftX" }
//! deadzone = 0.15
//!
//! [[bindings]]
//! action = "jump"
//! category = "Keyboard"
//! control = { Button = "Space" }
//! ```
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::device::DeviceCategory;
use crate::error::Result;
use crate::input_device::InputDevice;
use crate::manager::InputManager;

/// Control on a device, by descriptor name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlRef {
    Axis(String),
    Button(String),
}

/// Maps a control to a named action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    pub action: String,
    pub category: DeviceCategory,
    pub control: ControlRef,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub deadzone: f32,
}

/// Serializable profile of input bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingProfile {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bindings: Vec<Binding>,
}

/// Action values produced by [`BindingProfile::resolve`].
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingOutput {
    pub axes: HashMap<String, f32>,
    pub buttons: HashMap<String, bool>,
}

impl BindingOutput {
    pub fn axis(&self, action: &str) -> f32 {
        self.axes.get(action).copied().unwrap_or(0.0)
    }

    pub fn button(&self, action: &str) -> bool {
        self.buttons.get(action).copied().unwrap_or(false)
    }
}

impl BindingProfile {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Reads every binding from the first device of its category that exposes
    /// the named control. Bindings with no such device are left out.
    pub fn resolve(&self, manager: &InputManager) -> BindingOutput {
        let mut output = BindingOutput::default();

        for binding in &self.bindings {
            let found = manager
                .devices_of(binding.category)
                .find_map(|device| read_control(device, &binding.control));

            match found {
                Some(ControlValue::Axis(mut value)) => {
                    if binding.invert {
                        value = -value;
                    }
                    if value.abs() < binding.deadzone {
                        value = 0.0;
                    }
                    output.axes.insert(binding.action.clone(), value);
                }
                Some(ControlValue::Button(pressed)) => {
                    let held = output.buttons.entry(binding.action.clone()).or_insert(false);
                    *held |= pressed;
                }
                None => log::trace!("binding `{}` has no matching device", binding.action),
            }
        }

        output
    }
}

enum ControlValue {
    Axis(f32),
    Button(bool),
}

fn read_control(device: &InputDevice, control: &ControlRef) -> Option<ControlValue> {
    match control {
        ControlRef::Axis(name) => {
            let id = device.axis_named(name)?;
            device.get_axis(id).ok().map(ControlValue::Axis)
        }
        ControlRef::Button(name) => {
            let id = device.button_named(name)?;
            device.get_button(id).ok().map(ControlValue::Button)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_loads_from_toml() {
        let profile = BindingProfile::from_toml_str(
            r#"
            name = "default"

            [[bindings]]
            action = "move_x"
            category = "GameController"
            control = { Axis = "LeftX" }
            deadzone = 0.15

            [[bindings]]
            action = "jump"
            category = "Keyboard"
            control = { Button = "Space" }
            "#,
        )
        .unwrap();

        assert_eq!(profile.bindings.len(), 2);
        assert_eq!(profile.bindings[0].control, ControlRef::Axis("LeftX".into()));
        assert_eq!(profile.bindings[1].category, DeviceCategory::Keyboard);
        assert!(!profile.bindings[1].invert);
    }

    #[test]
    fn no_devices_resolves_to_nothing() {
        let profile = BindingProfile {
            name: "empty".into(),
            description: None,
            bindings: vec![Binding {
                action: "fire".into(),
                category: DeviceCategory::Mouse,
                control: ControlRef::Button("Left".into()),
                invert: false,
                deadzone: 0.0,
            }],
        };
        let output = profile.resolve(&InputManager::new());
        assert!(!output.button("fire"));
        assert!(output.buttons.is_empty());
    }
}
