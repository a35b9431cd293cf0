//! Starfighter on the LED panel.
//!
//! Hold the left stick to move, press A to fire. The enemy never stops
//! shooting; outlast its shield. Requires the `hardware` feature and a
//! connected Stadia controller.

#[cfg(feature = "hardware")]
fn main() -> anyhow::Result<()> {
    game::run()
}

#[cfg(not(feature = "hardware"))]
fn main() {
    eprintln!("starfighter drives the LED panel; build with `--features hardware`.");
}

#[cfg(feature = "hardware")]
mod game {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use matrix_arcade::consts::{POLL_INTERVAL, TICK};
    use matrix_arcade::games::GamePhase;
    use matrix_arcade::games::starfighter::{self, StarfighterState};
    use matrix_arcade::input::{self, ControlEvent, StickState};
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

        let mut state = StarfighterState::new(settings.grid_cols(), settings.grid_rows());

        // Reader thread: stick deflections land in the held-direction table,
        // fire presses in the channel. Poller thread: steps the fighter cell
        // from the table at its own cadence, decoupled from the frame rate.
        let stick = Arc::new(StickState::new());
        let fighter_y = Arc::new(AtomicI32::new(state.fighter.pos.y));
        let (fire_tx, fire_rx) = mpsc::channel();

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
                        match input::decode(&event) {
                            Some(ControlEvent::South) => {
                                if fire_tx.send(()).is_err() {
                                    return;
                                }
                            }
                            Some(ControlEvent::Stick { axis, dir }) => stick.set(axis, dir),
                            _ => {}
                        }
                    }
                }
            });
        }
        spawn_poller(
            Arc::clone(&stick),
            Arc::clone(&fighter_y),
            Arc::clone(&running),
            settings.grid_rows(),
            POLL_INTERVAL,
        );

        while signal::is_running(&running) && state.phase == GamePhase::Playing {
            state.fighter.pos.y = fighter_y.load(Ordering::Relaxed);
            let fire_pressed = fire_rx.try_iter().count() > 0;
            starfighter::tick(&mut state, fire_pressed);

            panel.clear();
            starfighter::draw(&state, &mut panel);
            panel.present();

            thread::sleep(TICK);
        }

        log::info!(
            "shields at exit: fighter {}, enemy {}",
            state.fighter.shield,
            state.enemy.shield
        );
        println!("\nShutting down cleanly.");
        Ok(())
    }

    /// Continuous-movement poller: while the vertical stick is held, step
    /// the fighter cell once per interval, clamped to the play area.
    fn spawn_poller(
        stick: Arc<StickState>,
        fighter_y: Arc<AtomicI32>,
        running: Arc<AtomicBool>,
        rows: i32,
        interval: Duration,
    ) {
        thread::spawn(move || {
            while signal::is_running(&running) {
                let dir = stick.y();
                if dir != 0 {
                    let _ = fighter_y.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |y| {
                        Some(starfighter::step_fighter_y(y, dir, rows))
                    });
                }
                thread::sleep(interval);
            }
        });
    }
}
