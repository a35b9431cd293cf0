//! Snake on a 64x32 grid
//!
//! The head walks one cell per tick in the last direction flicked on the
//! analog stick; the tail follows the leader. Eating the fruit grows the tail
//! by one and moves the fruit. Running into the tail or leaving the playable
//! area (everything below the score strip) ends the run. There is no
//! reversal guard: flicking straight back into a tail of two or more is
//! fatal, as tradition demands.

use glam::IVec2;
use rand::Rng;

use super::GamePhase;
use crate::canvas::{Canvas, Rgb};
use crate::geom::points_coincide;
use crate::input::{ControlEvent, StickAxis};

// ── Tuning ──────────────────────────────────────────────────────────────

/// Cells the head moves per tick
const STEP: i32 = 1;
/// Rows 0..=SCORE_FLOOR belong to the HUD; the head dies on row SCORE_FLOOR
/// itself. The fruit band starts at this same row, so a fruit can land one
/// cell out of reach
const SCORE_FLOOR: i32 = 8;

const HEAD_COLOR: Rgb = Rgb::new(0, 0, 255);
const TAIL_COLOR: Rgb = Rgb::new(0, 100, 255);
const FRUIT_COLOR: Rgb = Rgb::new(250, 250, 0);
const HUD_COLOR: Rgb = Rgb::new(150, 150, 150);

// ── State ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -STEP),
            Direction::Down => IVec2::new(0, STEP),
            Direction::Left => IVec2::new(-STEP, 0),
            Direction::Right => IVec2::new(STEP, 0),
        }
    }
}

/// Map a decoded controller event to a snake direction.
///
/// Only full stick deflections register; the d-pad and buttons are unused
/// here.
pub fn direction_for(event: ControlEvent) -> Option<Direction> {
    match event {
        ControlEvent::Stick {
            axis: StickAxis::X,
            dir: 1,
        } => Some(Direction::Right),
        ControlEvent::Stick {
            axis: StickAxis::X,
            dir: -1,
        } => Some(Direction::Left),
        ControlEvent::Stick {
            axis: StickAxis::Y,
            dir: 1,
        } => Some(Direction::Down),
        ControlEvent::Stick {
            axis: StickAxis::Y,
            dir: -1,
        } => Some(Direction::Up),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Fruit {
    pub pos: IVec2,
    min: IVec2,
    max: IVec2,
}

impl Fruit {
    fn new(cols: i32, rows: i32, rng: &mut impl Rng) -> Self {
        let mut fruit = Self {
            pos: IVec2::ZERO,
            min: IVec2::new(0, SCORE_FLOOR),
            max: IVec2::new(cols - 1, rows - 1),
        };
        fruit.reset(rng);
        fruit
    }

    /// Move the fruit to a fresh random cell
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.pos = IVec2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        );
    }
}

#[derive(Debug, Clone)]
pub struct SnakeState {
    cols: i32,
    rows: i32,
    pub head: IVec2,
    /// None until the first stick input; the head holds still meanwhile
    pub direction: Option<Direction>,
    /// Tail cells, index 0 closest to the head
    pub tail: Vec<IVec2>,
    pub fruit: Fruit,
    pub score: u32,
    pub phase: GamePhase,
}

impl SnakeState {
    pub fn new(cols: i32, rows: i32, rng: &mut impl Rng) -> Self {
        Self {
            cols,
            rows,
            head: IVec2::new(cols / 2, rows / 2),
            direction: None,
            tail: Vec::new(),
            fruit: Fruit::new(cols, rows, rng),
            score: 0,
            phase: GamePhase::Playing,
        }
    }
}

// ── Update ──────────────────────────────────────────────────────────────

/// Advance the game by one frame.
///
/// Order per tick: settle the fruit against the head's resting position,
/// shift the tail toward the head, move the head, then check for death.
/// A fatal tick still finishes (and renders, caller-side) before the phase
/// check stops the loop.
pub fn tick(state: &mut SnakeState, rng: &mut impl Rng) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    if points_coincide(state.head, state.fruit.pos) {
        state.tail.push(state.head);
        state.score += 1;
        state.fruit.reset(rng);
    }

    // Follow the leader, back to front; the front segment takes the head's
    // pre-move cell
    for i in (1..state.tail.len()).rev() {
        state.tail[i] = state.tail[i - 1];
    }
    if let Some(first) = state.tail.first_mut() {
        *first = state.head;
    }

    if let Some(direction) = state.direction {
        state.head += direction.delta();
    }

    let head = state.head;
    if state.tail.iter().any(|&cell| points_coincide(head, cell)) {
        state.phase = GamePhase::GameOver;
    }
    if !(0..state.cols).contains(&head.x) || !((SCORE_FLOOR + 1)..state.rows).contains(&head.y) {
        state.phase = GamePhase::GameOver;
    }
}

// ── Drawing ─────────────────────────────────────────────────────────────

pub fn draw(state: &SnakeState, canvas: &mut impl Canvas) {
    canvas.set_pixel(state.fruit.pos.x, state.fruit.pos.y, FRUIT_COLOR);
    for cell in &state.tail {
        canvas.set_pixel(cell.x, cell.y, TAIL_COLOR);
    }
    canvas.set_pixel(state.head.x, state.head.y, HEAD_COLOR);

    // Score strip
    canvas.draw_text(1, 6, &state.score.to_string(), HUD_COLOR);
    canvas.draw_line(0, 7, state.cols - 1, 7, HUD_COLOR);
}
