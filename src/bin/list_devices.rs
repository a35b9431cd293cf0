//! List every input event device with its path, name and physical location.
//!
//! Handy for finding which /dev/input/eventN the controller landed on.

fn main() {
    env_logger::init();

    println!("Searching and listing input devices");
    let mut count = 0;
    for (path, device) in evdev::enumerate() {
        println!(
            "Path: {} Name: {} Phys: {}",
            path.display(),
            device.name().unwrap_or("<unnamed>"),
            device.physical_path().unwrap_or("<none>")
        );
        count += 1;
    }

    if count == 0 {
        eprintln!("no input devices visible; check permissions on /dev/input");
        std::process::exit(1);
    }
}
