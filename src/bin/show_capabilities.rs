//! Print one device's identity and what it can report.
//!
//! Usage: `show_capabilities [/dev/input/eventN]` (defaults to event0).

use anyhow::Result;
use evdev::Device;

const DEFAULT_DEVICE: &str = "/dev/input/event0";

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DEVICE.to_string());
    let device = Device::open(&path)?;

    println!("Device: {}", device.name().unwrap_or("<unnamed>"));
    println!("Path:   {path}");
    println!("Phys:   {}", device.physical_path().unwrap_or("<none>"));

    let id = device.input_id();
    println!(
        "Id:     bus {:?} vendor {:04x} product {:04x} version {:04x}",
        id.bus_type(),
        id.vendor(),
        id.product(),
        id.version()
    );

    if let Some(keys) = device.supported_keys() {
        println!("Keys:");
        for key in keys.iter() {
            println!("  {key:?}");
        }
    }
    if let Some(axes) = device.supported_absolute_axes() {
        println!("Absolute axes:");
        for axis in axes.iter() {
            println!("  {axis:?}");
        }
    }

    Ok(())
}
