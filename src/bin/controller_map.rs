//! Show decoded controller events by name.
//!
//! Finds the Stadia controller (or opens the device given as the first
//! argument) and prints each event the games would actually see: d-pad
//! directions, stick deflections past the thresholds, and the fire button.

use anyhow::Result;
use evdev::Device;

use matrix_arcade::input::{self, ControlEvent};

fn main() -> Result<()> {
    env_logger::init();

    let mut device = match std::env::args().nth(1) {
        Some(path) => Device::open(&path)?,
        None => input::find_controller(input::CONTROLLER_NAME)?,
    };
    println!(
        "Reading from {}",
        device.name().unwrap_or("<unnamed>")
    );
    println!("Please press the different buttons and sticks");

    loop {
        for event in device.fetch_events()? {
            let Some(control) = input::decode(&event) else {
                continue;
            };
            match control {
                ControlEvent::South => println!("Button A pressed"),
                ControlEvent::DpadX(-1) => println!("Left pressed"),
                ControlEvent::DpadX(1) => println!("Right pressed"),
                ControlEvent::DpadY(-1) => println!("Up pressed"),
                ControlEvent::DpadY(1) => println!("Down pressed"),
                ControlEvent::DpadX(_) | ControlEvent::DpadY(_) => {}
                ControlEvent::Stick { axis, dir } => {
                    if dir != 0 {
                        println!("Stick {axis:?} held toward {dir}");
                    }
                }
            }
        }
    }
}
