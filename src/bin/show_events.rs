//! Dump raw input events from one device.
//!
//! Usage: `show_events [/dev/input/eventN]` (defaults to event0). Every
//! non-sync event prints as (type, code, value); stop with Ctrl-C.

use anyhow::Result;
use evdev::{Device, EventType};

const DEFAULT_DEVICE: &str = "/dev/input/event0";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DEVICE.to_string());
    let mut device = Device::open(&path)?;
    println!(
        "Reading from {} ({})",
        path,
        device.name().unwrap_or("<unnamed>")
    );
    println!("Press all controller buttons:");

    loop {
        for event in device.fetch_events()? {
            if event.event_type() == EventType::SYNCHRONIZATION {
                continue;
            }
            println!(
                "Type: {:?} Code: {} Value: {}",
                event.event_type(),
                event.code(),
                event.value()
            );
        }
    }
}
