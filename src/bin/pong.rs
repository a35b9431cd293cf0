//! Pong on the LED panel.
//!
//! D-pad up/down moves the paddle; the run ends when the five lives are
//! spent. Requires the `hardware` feature and a connected Stadia controller.

#[cfg(feature = "hardware")]
fn main() -> anyhow::Result<()> {
    game::run()
}

#[cfg(not(feature = "hardware"))]
fn main() {
    eprintln!("pong drives the LED panel; build with `--features hardware`.");
}

#[cfg(feature = "hardware")]
mod game {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::thread;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use matrix_arcade::consts::{FLICKER_PHASE, TICK};
    use matrix_arcade::games::GamePhase;
    use matrix_arcade::games::pong::{self, PongEvent, PongState};
    use matrix_arcade::input::{self, ControlEvent};
    use matrix_arcade::panel::Panel;
    use matrix_arcade::{Canvas, PanelSettings, Rgb, signal};

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();

        let settings = PanelSettings::load();
        let mut controller = input::find_controller(input::CONTROLLER_NAME)?;
        log::info!(
            "controller: {}",
            controller.name().unwrap_or("<unnamed>")
        );

        let running = signal::run_flag()?;
        let mut panel = Panel::open(&settings)?;

        let seed: u64 = rand::random();
        log::info!("run seed: {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut state = PongState::new(settings.grid_cols(), settings.grid_rows(), &mut rng);

        // The reader thread owns the device and is the only writer of the
        // paddle cell; the loop below only reads it.
        let paddle_y = Arc::new(AtomicI32::new(state.paddle.pos.y));
        {
            let paddle_y = Arc::clone(&paddle_y);
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
                        if let Some(ControlEvent::DpadY(dir)) = input::decode(&event) {
                            let _ = paddle_y.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |y| {
                                Some(pong::step_paddle_y(y, dir))
                            });
                        }
                    }
                }
            });
        }

        while signal::is_running(&running) && state.phase == GamePhase::Playing {
            state.paddle.pos.y = paddle_y.load(Ordering::Relaxed);
            let event = pong::tick(&mut state, &mut rng);

            panel.clear();
            pong::draw(&state, &mut panel);
            panel.present();

            if let Some(PongEvent::LifeLost) = event {
                log::info!("life lost, {} remaining", state.lives);
                flicker(&mut panel, state.lives);
            }

            thread::sleep(TICK);
        }

        println!("\nShutting down cleanly.");
        Ok(())
    }

    /// Life-lost cue: three black/red flashes with a message.
    fn flicker(panel: &mut Panel, lives: i32) {
        let message = pong::flicker_message(lives);
        for _ in 0..3 {
            panel.fill(Rgb::BLACK);
            panel.present();
            thread::sleep(FLICKER_PHASE);

            panel.fill(pong::FLICKER_FILL);
            panel.draw_text(10, 20, message, pong::FLICKER_TEXT);
            panel.present();
            thread::sleep(FLICKER_PHASE);
        }
    }
}
