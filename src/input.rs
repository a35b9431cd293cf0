//! Gamepad discovery and event decoding
//!
//! The games are written against a Stadia controller: d-pad on the hat axes,
//! analog sticks reporting 0..=255, fire on the south button. Everything the
//! game loops consume goes through [`ControlEvent`], so the per-game reader
//! threads stay a few lines long.

use std::sync::atomic::{AtomicI8, Ordering};

use evdev::{AbsoluteAxisType, Device, InputEvent, InputEventKind, Key};
use thiserror::Error;

/// Device-name prefix the games look for
pub const CONTROLLER_NAME: &str = "Google LLC Stadia Controller";

/// Stick value above which the axis reads as pushed toward max
pub const STICK_HIGH: i32 = 245;
/// Stick value below which the axis reads as pushed toward min
pub const STICK_LOW: i32 = 10;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no controller matching \"{0}\" found")]
    NoController(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Locate the controller among the system input devices.
///
/// Scans every event device and keeps the last one whose name starts with
/// `name_prefix`; a pad that exposes several interfaces resolves to the
/// highest-numbered one.
pub fn find_controller(name_prefix: &str) -> Result<Device, InputError> {
    let mut found = None;
    for (path, device) in evdev::enumerate() {
        if device
            .name()
            .is_some_and(|name| name.starts_with(name_prefix))
        {
            log::debug!("controller candidate at {}", path.display());
            found = Some(device);
        }
    }
    found.ok_or_else(|| InputError::NoController(name_prefix.to_string()))
}

/// Analog stick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickAxis {
    X,
    Y,
}

/// A raw input event translated to controller vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Left stick pushed past a threshold (`dir` -1/0/1) on one axis
    Stick { axis: StickAxis, dir: i8 },
    /// D-pad horizontal, value -1/0/1
    DpadX(i32),
    /// D-pad vertical, value -1/0/1
    DpadY(i32),
    /// South (A) button pressed
    South,
}

/// Map a stick sample to a held direction: -1, 0 or 1.
pub fn stick_direction(value: i32) -> i8 {
    if value > STICK_HIGH {
        1
    } else if value < STICK_LOW {
        -1
    } else {
        0
    }
}

/// Translate one evdev event into a [`ControlEvent`], if it maps to one.
///
/// Key events count on press only (value 1); repeats and releases fall
/// through.
pub fn decode(event: &InputEvent) -> Option<ControlEvent> {
    match event.kind() {
        InputEventKind::Key(Key::BTN_SOUTH) if event.value() == 1 => Some(ControlEvent::South),
        InputEventKind::AbsAxis(AbsoluteAxisType::ABS_HAT0X) => {
            Some(ControlEvent::DpadX(event.value()))
        }
        InputEventKind::AbsAxis(AbsoluteAxisType::ABS_HAT0Y) => {
            Some(ControlEvent::DpadY(event.value()))
        }
        InputEventKind::AbsAxis(AbsoluteAxisType::ABS_X) => Some(ControlEvent::Stick {
            axis: StickAxis::X,
            dir: stick_direction(event.value()),
        }),
        InputEventKind::AbsAxis(AbsoluteAxisType::ABS_Y) => Some(ControlEvent::Stick {
            axis: StickAxis::Y,
            dir: stick_direction(event.value()),
        }),
        _ => None,
    }
}

/// Per-axis held-direction table
///
/// The reader thread is the sole writer, a poller or game loop the sole
/// reader, so relaxed atomics are all the discipline this needs.
#[derive(Debug, Default)]
pub struct StickState {
    x: AtomicI8,
    y: AtomicI8,
}

impl StickState {
    pub const fn new() -> Self {
        Self {
            x: AtomicI8::new(0),
            y: AtomicI8::new(0),
        }
    }

    pub fn set(&self, axis: StickAxis, dir: i8) {
        match axis {
            StickAxis::X => self.x.store(dir, Ordering::Relaxed),
            StickAxis::Y => self.y.store(dir, Ordering::Relaxed),
        }
    }

    pub fn x(&self) -> i8 {
        self.x.load(Ordering::Relaxed)
    }

    pub fn y(&self) -> i8 {
        self.y.load(Ordering::Relaxed)
    }
}
