//! axisgate: runtime input device abstraction.
//!
//! Unifies hot-pluggable keyboards, mice and game controllers behind one
//! addressing scheme: every axis and button a device exposes is assigned an
//! engine-wide logical id ([`AxisId`], [`ButtonId`]) when the device connects.
//! Those ids stay valid for the lifetime of that device instance and are never
//! reused for another device during the same run.
//!
//! ```no_run
//! use axisgate::backends::desktop::DesktopDriver;
//! use axisgate::keys::KeyCode;
//! use axisgate::{InputConfig, InputManager};
//!
//! let config = InputConfig::default();
//! let (desktop, keys, _pointer) = DesktopDriver::new(&config);
//! let mut input = InputManager::with_config(config);
//! input.add_driver(desktop).expect("fresh manager");
//!
//! keys.key_down(KeyCode::Space); // typically from the window's event thread
//! input.tick();
//! let kb = input.keyboard().expect("desktop driver registers a keyboard");
//! assert!(kb.is_down_of(KeyCode::Space).unwrap());
//! ```

pub mod backends;
pub mod binding;
pub mod config;
pub mod descriptor;
pub mod device;
pub mod driver;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod filtered_listener;
pub mod ids;
pub mod input_device;
pub mod keys;
pub mod logger;
pub mod manager;
pub mod metadata;
pub mod snapshot;

pub use binding::*;
pub use config::InputConfig;
pub use descriptor::*;
pub use device::*;
pub use driver::*;
pub use error::{InputError, Result};
pub use event::*;
pub use eventbus::*;
pub use ids::{AxisId, ButtonId};
pub use input_device::{InputDevice, ResolvedBounds};
pub use manager::*;
pub use metadata::DeviceInfo;
pub use snapshot::{DeviceState, Snapshot};
