mod common;

use axisgate::keys::{ControllerButton, KeyCode, MouseButton};
use axisgate::{AxisId, InputError};
use common::rig;

#[test]
fn keyboard_has_only_event_driven_buttons() {
    let rig = rig(&[]);
    let kb = rig.input.keyboard().unwrap();
    assert_eq!(kb.axis_count(), 0);
    assert_eq!(kb.button_count(), KeyCode::ALL.len());

    // Mouse took axis ids 0..=6; none of them belong to the keyboard.
    for id in 0..7 {
        assert!(matches!(
            kb.get_axis(AxisId(id)),
            Err(InputError::UnsupportedAxis { .. })
        ));
    }
}

#[test]
fn key_press_edges_for_exactly_one_tick() {
    let mut rig = rig(&[]);
    let a = rig.input.keyboard().unwrap().button_id(KeyCode::A as i32).unwrap();

    rig.keys.key_down(KeyCode::A);
    rig.input.tick();
    let kb = rig.input.keyboard().unwrap();
    assert!(kb.is_button_down(a).unwrap());
    // Same answer however often it is asked within the frame.
    assert!(kb.is_button_down(a).unwrap());
    assert!(kb.get_button(a).unwrap());
    assert!(!kb.is_button_up(a).unwrap());

    for _ in 0..3 {
        rig.input.tick();
        let kb = rig.input.keyboard().unwrap();
        assert!(!kb.is_button_down(a).unwrap());
        assert!(kb.get_button(a).unwrap());
    }

    rig.keys.key_up(KeyCode::A);
    rig.input.tick();
    let kb = rig.input.keyboard().unwrap();
    assert!(kb.is_button_up(a).unwrap());
    assert!(!kb.get_button(a).unwrap());

    rig.input.tick();
    assert!(!rig.input.keyboard().unwrap().is_button_up(a).unwrap());
}

#[test]
fn tap_inside_one_frame_is_not_lost() {
    let mut rig = rig(&[]);
    rig.keys.key_down(KeyCode::Space);
    rig.keys.key_up(KeyCode::Space);
    rig.input.tick();

    let kb = rig.input.keyboard().unwrap();
    assert!(kb.is_down_of(KeyCode::Space).unwrap());
    assert!(kb.is_up_of(KeyCode::Space).unwrap());
    assert!(!kb.button_of(KeyCode::Space).unwrap());
}

#[test]
fn mouse_buttons_are_pushed_and_cached() {
    let mut rig = rig(&[]);
    rig.pointer.button_down(MouseButton::Right);
    rig.input.tick();

    let mouse = rig.input.mouse().unwrap();
    assert!(mouse.is_down_of(MouseButton::Right).unwrap());
    assert!(mouse.button_of(MouseButton::Right).unwrap());
    assert!(!mouse.button_of(MouseButton::Left).unwrap());

    rig.input.tick();
    let mouse = rig.input.mouse().unwrap();
    assert!(!mouse.is_down_of(MouseButton::Right).unwrap());
    assert!(mouse.button_of(MouseButton::Right).unwrap());
}

#[test]
fn polled_controller_buttons_edge_on_state_change() {
    let mut rig = rig(&[0]);
    rig.pads.press(0, ControllerButton::A);
    rig.input.tick();
    let pad = rig.input.game_controller(0).unwrap();
    assert!(pad.is_down_of(ControllerButton::A).unwrap());
    assert!(pad.button_of(ControllerButton::A).unwrap());

    rig.input.tick();
    let pad = rig.input.game_controller(0).unwrap();
    assert!(!pad.is_down_of(ControllerButton::A).unwrap());
    assert!(pad.button_of(ControllerButton::A).unwrap());

    rig.pads.release(0, ControllerButton::A);
    rig.input.tick();
    let pad = rig.input.game_controller(0).unwrap();
    assert!(pad.is_up_of(ControllerButton::A).unwrap());
    assert!(!pad.button_of(ControllerButton::A).unwrap());
}

#[test]
fn events_of_the_frame_are_exposed_in_order() {
    let mut rig = rig(&[]);
    rig.keys.key_down(KeyCode::W);
    rig.pointer.button_down(MouseButton::Left);
    rig.input.tick();

    // Mouse registered before the keyboard, so its events come first.
    let events = rig.input.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].device.device, "mouse");
    assert_eq!(events[1].device.device, "keyboard");
    assert!(events.iter().all(|e| e.frame == 0));
    assert_eq!(rig.input.frame(), 1);

    rig.input.tick();
    assert!(rig.input.events().is_empty());
}
