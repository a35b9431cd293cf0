//! Analog stick smoke test: move a dot around the panel.
//!
//! Exercises the whole input path (reader thread, held-direction table,
//! poller) and the panel without any game rules in the way. Requires the
//! `hardware` feature.

#[cfg(feature = "hardware")]
fn main() -> anyhow::Result<()> {
    demo::run()
}

#[cfg(not(feature = "hardware"))]
fn main() {
    eprintln!("analog_demo drives the LED panel; build with `--features hardware`.");
}

#[cfg(feature = "hardware")]
mod demo {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::thread;

    use matrix_arcade::consts::{POLL_INTERVAL, TICK};
    use matrix_arcade::input::{self, ControlEvent, StickState};
    use matrix_arcade::panel::Panel;
    use matrix_arcade::{Canvas, PanelSettings, Rgb, signal};

    const DOT_COLOR: Rgb = Rgb::new(255, 0, 0);
    const RING_COLOR: Rgb = Rgb::new(200, 200, 200);

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();

        let settings = PanelSettings::load();
        let mut controller = input::find_controller(input::CONTROLLER_NAME)?;
        let running = signal::run_flag()?;
        let mut panel = Panel::open(&settings)?;

        let (cols, rows) = (settings.grid_cols(), settings.grid_rows());
        let stick = Arc::new(StickState::new());
        let x = Arc::new(AtomicI32::new(cols / 2));
        let y = Arc::new(AtomicI32::new(rows / 2));

        {
            let stick = Arc::clone(&stick);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                while signal::is_running(&running) {
                    let events = match controller.fetch_events() {
                        Ok(events) => events,
                        Err(e) => {
                            log::warn!("controller read failed: {e}");
                            break;
                        }
                    };
                    for event in events {
                        if let Some(ControlEvent::Stick { axis, dir }) = input::decode(&event) {
                            stick.set(axis, dir);
                        }
                    }
                }
            });
        }

        {
            let stick = Arc::clone(&stick);
            let running = Arc::clone(&running);
            let x = Arc::clone(&x);
            let y = Arc::clone(&y);
            thread::spawn(move || {
                while signal::is_running(&running) {
                    let _ = x.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
                        Some((v + stick.x() as i32).clamp(0, cols - 1))
                    });
                    let _ = y.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
                        Some((v + stick.y() as i32).clamp(0, rows - 1))
                    });
                    thread::sleep(POLL_INTERVAL);
                }
            });
        }

        while signal::is_running(&running) {
            let (px, py) = (x.load(Ordering::Relaxed), y.load(Ordering::Relaxed));

            panel.clear();
            panel.set_pixel(px, py, DOT_COLOR);
            panel.draw_circle(px, py, 1, RING_COLOR);
            panel.present();

            thread::sleep(TICK);
        }

        println!("\nShutting down cleanly.");
        Ok(())
    }
}
