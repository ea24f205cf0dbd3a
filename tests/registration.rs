mod common;

use std::collections::HashSet;

use axisgate::backends::desktop::DesktopDriver;
use axisgate::keys::{ControllerAxis, MouseAxis};
use axisgate::{
    AxisBounds, AxisDescription, AxisDirection, AxisId, AxisImpDescription, AxisNature,
    ButtonImpDescription, DeviceCategory, DeviceImp, DeviceKey, InputConfig, InputDriver,
    InputError, InputManager, ResolvedBounds,
};
use common::{axis_ids, button_ids, rig};

#[test]
fn mouse_axes_are_numbered_in_descriptor_order() {
    let rig = rig(&[]);
    let mouse = rig.input.mouse().unwrap();

    let layout: Vec<(u32, &str)> = mouse.axes().map(|(id, d)| (id.0, d.name.as_str())).collect();
    assert_eq!(
        layout,
        vec![
            (0, "X"),
            (1, "Y"),
            (2, "Wheel"),
            (3, "MinX"),
            (4, "MaxX"),
            (5, "MinY"),
            (6, "MaxY"),
        ]
    );
}

#[test]
fn axis_zero_tracks_the_pointer_every_tick() {
    let mut rig = rig(&[]);
    rig.pointer.resize(1280.0, 720.0);

    for x in [0.0, 15.5, 640.0, 1279.0] {
        rig.pointer.move_to(x, 10.0);
        rig.input.tick();
        let mouse = rig.input.mouse().unwrap();
        assert_eq!(mouse.get_axis(AxisId(0)).unwrap(), x);
        assert_eq!(mouse.axis_of(MouseAxis::X).unwrap(), x);
    }
}

#[test]
fn mouse_x_is_bounded_by_its_extent_axes() {
    let rig = rig(&[]);
    rig.pointer.resize(800.0, 600.0);
    let mouse = rig.input.mouse().unwrap();
    let x = mouse.axis_id(MouseAxis::X as i32).unwrap();

    assert_eq!(
        mouse.axis_bounds(x).unwrap(),
        ResolvedBounds::Axes {
            min: mouse.axis_id(MouseAxis::MinX as i32).unwrap(),
            max: mouse.axis_id(MouseAxis::MaxX as i32).unwrap(),
        }
    );
    assert_eq!(mouse.axis_range(x).unwrap(), Some((0.0, 800.0)));

    let wheel = mouse.axis_id(MouseAxis::Wheel as i32).unwrap();
    assert_eq!(mouse.axis_range(wheel).unwrap(), None);
}

#[test]
fn native_to_logical_is_injective_for_every_device() {
    let rig = rig(&[0, 1]);
    for device in rig.input.devices() {
        let axes = axis_ids(device);
        let unique: HashSet<_> = axes.iter().collect();
        assert_eq!(unique.len(), axes.len(), "{}", device.key());

        let buttons = button_ids(device);
        let unique: HashSet<_> = buttons.iter().collect();
        assert_eq!(unique.len(), buttons.len(), "{}", device.key());

        for (id, desc) in device.axes() {
            assert_eq!(device.axis_id(desc.native_id), Some(id));
        }
        for (id, desc) in device.buttons() {
            assert_eq!(device.button_id(desc.native_id), Some(id));
        }
    }
}

#[test]
fn identical_controllers_get_disjoint_ids() {
    let rig = rig(&[0, 1]);
    let first = rig.input.game_controller(0).unwrap();
    let second = rig.input.game_controller(1).unwrap();
    assert_eq!(first.axis_count(), second.axis_count());

    let a: HashSet<_> = axis_ids(first).into_iter().collect();
    let b: HashSet<_> = axis_ids(second).into_iter().collect();
    assert!(a.is_disjoint(&b));

    let a: HashSet<_> = button_ids(first).into_iter().collect();
    let b: HashSet<_> = button_ids(second).into_iter().collect();
    assert!(a.is_disjoint(&b));

    // Same native id on both pads, different logical ids.
    let native = ControllerAxis::LeftX as i32;
    assert_ne!(first.axis_id(native), second.axis_id(native));
}

#[test]
fn same_setup_yields_same_ids_in_independent_managers() {
    let one = rig(&[0]);
    let two = rig(&[0]);
    let infos_one = one.input.device_infos();
    let infos_two = two.input.device_infos();
    assert_eq!(infos_one, infos_two);
}

#[test]
fn unregistered_ids_are_unsupported_for_every_category() {
    let rig = rig(&[0]);
    for category in [
        DeviceCategory::Keyboard,
        DeviceCategory::Mouse,
        DeviceCategory::GameController,
    ] {
        let device = rig.input.devices_of(category).next().unwrap();
        let err = device.get_axis(AxisId(10_000)).unwrap_err();
        assert!(err.is_unsupported_control(), "{category:?}: {err}");
        let err = device.get_button(axisgate::ButtonId(10_000)).unwrap_err();
        assert!(err.is_unsupported_control(), "{category:?}: {err}");
    }
}

struct BrokenImp {
    buttons: Vec<ButtonImpDescription>,
    axes: Vec<AxisImpDescription>,
}

impl DeviceImp for BrokenImp {
    fn id(&self) -> &str {
        "broken"
    }
    fn desc(&self) -> &str {
        "lists a native id twice"
    }
    fn category(&self) -> DeviceCategory {
        DeviceCategory::GameController
    }
    fn axis_imp_desc(&self) -> &[AxisImpDescription] {
        &self.axes
    }
    fn button_imp_desc(&self) -> &[ButtonImpDescription] {
        &self.buttons
    }
    fn get_axis(&self, _native_id: i32) -> axisgate::Result<f32> {
        Ok(0.0)
    }
    fn get_button(&self, _native_id: i32) -> axisgate::Result<bool> {
        Ok(false)
    }
}

struct BrokenDriver(Option<BrokenImp>);

impl InputDriver for BrokenDriver {
    fn id(&self) -> &str {
        "broken"
    }
    fn desc(&self) -> &str {
        "driver violating the descriptor contract"
    }
    fn take_devices(&mut self) -> Vec<Box<dyn DeviceImp>> {
        self.0
            .take()
            .map(|imp| Box::new(imp) as Box<dyn DeviceImp>)
            .into_iter()
            .collect()
    }
}

#[test]
fn duplicate_registration_keeps_the_device_out() {
    common::init_logging();
    let axis = AxisImpDescription::polled(AxisDescription::new(
        "X",
        1,
        AxisDirection::X,
        AxisNature::Position,
        AxisBounds::Unbound,
    ));
    let imp = BrokenImp {
        axes: vec![axis.clone(), axis],
        buttons: vec![],
    };

    let mut input = InputManager::new();
    input.add_driver(BrokenDriver(Some(imp))).unwrap();
    assert_eq!(input.device_count(), 0);
    assert!(input.device(&DeviceKey::new("broken", "broken")).is_none());
}

#[test]
fn adding_a_driver_twice_is_rejected() {
    common::init_logging();
    let config = InputConfig::default();
    let mut input = InputManager::with_config(config.clone());
    let (first, _, _) = DesktopDriver::new(&config);
    let (second, _, _) = DesktopDriver::new(&config);
    input.add_driver(first).unwrap();
    assert!(matches!(
        input.add_driver(second),
        Err(InputError::DuplicateDriver { .. })
    ));
    assert_eq!(input.device_count(), 2);
}
