//! Snake on the LED panel.
//!
//! Flick the left stick to steer; eat the yellow fruit, avoid your tail and
//! the edges. Requires the `hardware` feature and a connected Stadia
//! controller.

#[cfg(feature = "hardware")]
fn main() -> anyhow::Result<()> {
    game::run()
}

#[cfg(not(feature = "hardware"))]
fn main() {
    eprintln!("snake drives the LED panel; build with `--features hardware`.");
}

#[cfg(feature = "hardware")]
mod game {
    use std::sync::Arc;
    use std::sync::mpsc;
    use std::thread;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use matrix_arcade::consts::TICK;
    use matrix_arcade::games::GamePhase;
    use matrix_arcade::games::snake::{self, SnakeState};
    use matrix_arcade::input;
    use matrix_arcade::panel::Panel;
    use matrix_arcade::{Canvas, PanelSettings, signal};

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
        let mut state = SnakeState::new(settings.grid_cols(), settings.grid_rows(), &mut rng);

        // Direction changes travel over a channel; the loop drains it each
        // tick and the last flick wins.
        let (dir_tx, dir_rx) = mpsc::channel();
        {
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
                        let Some(control) = input::decode(&event) else {
                            continue;
                        };
                        if let Some(direction) = snake::direction_for(control) {
                            if dir_tx.send(direction).is_err() {
                                return;
                            }
                        }
                    }
                }
            });
        }

        while signal::is_running(&running) && state.phase == GamePhase::Playing {
            for direction in dir_rx.try_iter() {
                state.direction = Some(direction);
            }
            snake::tick(&mut state, &mut rng);

            panel.clear();
            snake::draw(&state, &mut panel);
            panel.present();

            thread::sleep(TICK);
        }

        log::info!("final score: {}", state.score);
        println!("\nShutting down cleanly.");
        Ok(())
    }
}
