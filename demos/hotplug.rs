use axisgate::backends::desktop::DesktopDriver;
use axisgate::backends::gamepad::{GamepadCapabilities, GamepadDriver};
use axisgate::backends::virtual_input::VirtualGamepads;
use axisgate::keys::{ControllerAxis, ControllerButton, KeyCode};
use axisgate::logger::LoggingListener;
use axisgate::{EventFilter, InputConfig, InputManager};

fn main() -> axisgate::Result<()> {
    env_logger::init();

    let config = InputConfig::default();
    let (desktop, keys, pointer) = DesktopDriver::new(&config);
    let pads = VirtualGamepads::new();

    let mut input = InputManager::with_config(config.clone());
    input
        .event_bus_mut()
        .add_listener(LoggingListener::new(), EventFilter::All, None);
    input.add_driver(desktop)?;
    input.add_driver(GamepadDriver::new(pads.clone(), &config))?;

    pointer.resize(1024.0, 768.0);
    for frame in 0..8u32 {
        match frame {
            1 => pads.plug(0, GamepadCapabilities::standard()),
            2 => {
                pads.set_axis(0, ControllerAxis::LeftX, 0.8);
                pads.press(0, ControllerButton::A);
                keys.key_down(KeyCode::Space);
            }
            4 => {
                keys.key_up(KeyCode::Space);
            }
            6 => pads.unplug(0),
            _ => {}
        }
        pointer.move_to(frame as f32 * 100.0, 50.0);
        input.tick();

        if let Some(pad) = input.game_controller(0) {
            println!(
                "frame {frame}: LeftX={:.2} A down={}",
                pad.axis_of(ControllerAxis::LeftX)?,
                pad.is_down_of(ControllerButton::A)?
            );
        }
    }

    println!("{}", input.snapshot().to_json()?);
    Ok(())
}
