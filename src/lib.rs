//! Matrix Arcade - small games for an RGB LED matrix panel
//!
//! Core modules:
//! - `games`: Deterministic game simulations (Pong, Snake, Starfighter)
//! - `geom`: Integer collision predicates
//! - `canvas`: Drawing trait shared by the panel and the test buffer
//! - `panel`: LED matrix settings and driver wrapper (`hardware` feature)
//! - `input`: Gamepad discovery and event decoding
//! - `signal`: SIGINT-driven shutdown flag

pub mod canvas;
pub mod games;
pub mod geom;
pub mod input;
pub mod panel;
pub mod signal;

pub use canvas::{Canvas, PixelBuffer, Rgb};
pub use panel::PanelSettings;

/// Shared timing constants
pub mod consts {
    use std::time::Duration;

    /// Fixed frame interval for every game loop (≈13 Hz, as the panel likes)
    pub const TICK: Duration = Duration::from_millis(75);

    /// Default cadence for the held-stick position poller (Starfighter)
    pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

    /// Duration of each flicker phase in the Pong life-lost cue
    pub const FLICKER_PHASE: Duration = Duration::from_millis(150);
}
