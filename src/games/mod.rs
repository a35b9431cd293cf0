//! Deterministic game simulations
//!
//! All gameplay logic lives here. These modules must stay pure:
//! - Fixed timestep only (the binaries own the 75 ms cadence)
//! - Seeded RNG only, passed in by the caller
//! - No rendering or device dependencies; drawing goes through [`crate::Canvas`]

pub mod pong;
pub mod snake;
pub mod starfighter;

/// Phase of a game run: every game goes Playing -> GameOver, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}
