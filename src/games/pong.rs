//! Single-player Pong
//!
//! The paddle guards the left edge; the other three walls reflect the ball.
//! Letting the ball out on the left costs a life, flashes the panel and
//! respawns the ball with a fresh random diagonal. The run ends when the
//! lives are spent — the tick that spends the last life still plays out in
//! full (respawn included) and the caller exits on the next iteration.

use glam::IVec2;
use rand::Rng;

use super::GamePhase;
use crate::canvas::{Canvas, Rgb};
use crate::geom::{self, Circle, Segment};

// ── Tuning ──────────────────────────────────────────────────────────────

pub const START_LIVES: i32 = 5;

const PADDLE_X: i32 = 1;
const PADDLE_HEIGHT: i32 = 6;
/// Cells the paddle moves per d-pad event
const PADDLE_STEP: i32 = 2;
/// Up moves need center >= this, down moves need center <= the other
const PADDLE_UP_LIMIT: i32 = 5;
const PADDLE_DOWN_LIMIT: i32 = 26;

const BALL_RADIUS: i32 = 2;
/// Magnitude of each velocity component after a respawn
const BALL_STEP: i32 = 2;

/// Margin between the grid edge and the reflecting band, both axes
const WALL_MARGIN: i32 = 4;

const FRAME_COLOR: Rgb = Rgb::new(200, 200, 200);
const PADDLE_COLOR: Rgb = Rgb::new(200, 200, 200);
const BALL_COLOR: Rgb = Rgb::new(10, 10, 200);

/// Red shown while the life-lost cue flashes
pub const FLICKER_FILL: Rgb = Rgb::new(200, 0, 0);
/// Color of the flicker message text
pub const FLICKER_TEXT: Rgb = Rgb::new(255, 255, 0);

// ── State ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Paddle {
    pub pos: IVec2,
    pub height: i32,
}

impl Paddle {
    fn new(rows: i32) -> Self {
        Self {
            pos: IVec2::new(PADDLE_X, rows / 2),
            height: PADDLE_HEIGHT,
        }
    }

    /// The vertical line the ball collides with
    pub fn segment(&self) -> Segment {
        let half = self.height / 2;
        Segment::new(
            IVec2::new(self.pos.x, self.pos.y - half),
            IVec2::new(self.pos.x, self.pos.y + half),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub radius: i32,
}

#[derive(Debug, Clone)]
pub struct PongState {
    cols: i32,
    rows: i32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub lives: i32,
    pub phase: GamePhase,
}

/// Raised by [`tick`] so the binary can run the flicker cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PongEvent {
    LifeLost,
}

impl PongState {
    pub fn new(cols: i32, rows: i32, rng: &mut impl Rng) -> Self {
        let mut state = Self {
            cols,
            rows,
            paddle: Paddle::new(rows),
            ball: Ball {
                pos: IVec2::ZERO,
                vel: IVec2::ZERO,
                radius: BALL_RADIUS,
            },
            lives: START_LIVES,
            phase: GamePhase::Playing,
        };
        state.respawn_ball(rng);
        state
    }

    /// Fixed respawn point, right of center so the ball re-enters toward play
    fn respawn_point(&self) -> IVec2 {
        IVec2::new(self.cols / 2 + 10, self.rows / 2)
    }

    fn respawn_ball(&mut self, rng: &mut impl Rng) {
        self.ball.pos = self.respawn_point();
        self.ball.vel = IVec2::new(random_step(rng), random_step(rng));
    }
}

fn random_step(rng: &mut impl Rng) -> i32 {
    if rng.random_bool(0.5) {
        BALL_STEP
    } else {
        -BALL_STEP
    }
}

// ── Update ──────────────────────────────────────────────────────────────

/// Advance the game by one frame.
///
/// Order matches the playfield rules: move the ball, settle the left edge
/// (life loss + respawn), reflect off the remaining walls, then check the
/// paddle. When the last life goes, the phase flips to `GameOver` after the
/// respawn has already happened, so this frame still renders normally.
pub fn tick(state: &mut PongState, rng: &mut impl Rng) -> Option<PongEvent> {
    if state.phase == GamePhase::GameOver {
        return None;
    }

    let mut event = None;
    state.ball.pos += state.ball.vel;

    if state.ball.pos.x <= 0 {
        state.lives -= 1;
        event = Some(PongEvent::LifeLost);
        state.respawn_ball(rng);
        if state.lives <= 0 {
            state.phase = GamePhase::GameOver;
        }
    }

    // Reflect off the right wall and the horizontal band. Position reflects
    // across the bound so the ball never renders outside [margin, edge].
    let right = state.cols - WALL_MARGIN;
    if state.ball.pos.x > right {
        state.ball.pos.x = 2 * right - state.ball.pos.x;
        state.ball.vel.x = -state.ball.vel.x;
    }
    let top = WALL_MARGIN;
    let bottom = state.rows - WALL_MARGIN;
    if state.ball.pos.y < top {
        state.ball.pos.y = 2 * top - state.ball.pos.y;
        state.ball.vel.y = -state.ball.vel.y;
    } else if state.ball.pos.y > bottom {
        state.ball.pos.y = 2 * bottom - state.ball.pos.y;
        state.ball.vel.y = -state.ball.vel.y;
    }

    if geom::circle_hits_segment(
        Circle::new(state.ball.pos, state.ball.radius),
        state.paddle.segment(),
    ) {
        state.ball.vel.x = -state.ball.vel.x;
    }

    event
}

/// One d-pad step of the paddle center, clamped to the playable band.
///
/// Used inside the reader thread's atomic update, hence value-in/value-out.
pub fn step_paddle_y(current: i32, dir: i32) -> i32 {
    if dir == -1 && current >= PADDLE_UP_LIMIT {
        current - PADDLE_STEP
    } else if dir == 1 && current <= PADDLE_DOWN_LIMIT {
        current + PADDLE_STEP
    } else {
        current
    }
}

/// Message shown while the flicker cue plays
pub fn flicker_message(lives: i32) -> &'static str {
    if lives > 0 {
        "Next chance"
    } else if lives == 0 {
        "You will die"
    } else {
        "You lost all"
    }
}

// ── Drawing ─────────────────────────────────────────────────────────────

pub fn draw(state: &PongState, canvas: &mut impl Canvas) {
    let (cols, rows) = (state.cols, state.rows);

    // Ball: outline plus a 3x3 core so it reads as solid on the panel
    let ball = &state.ball;
    canvas.draw_circle(ball.pos.x, ball.pos.y, ball.radius as u32, BALL_COLOR);
    for dy in -1..=1 {
        canvas.draw_line(
            ball.pos.x - 1,
            ball.pos.y + dy,
            ball.pos.x + 1,
            ball.pos.y + dy,
            BALL_COLOR,
        );
    }

    // Court frame: top, bottom and the right wall
    canvas.draw_line(0, 0, cols - 1, 0, FRAME_COLOR);
    canvas.draw_line(0, rows - 1, cols - 1, rows - 1, FRAME_COLOR);
    canvas.draw_line(cols - 1, 0, cols - 1, rows - 1, FRAME_COLOR);

    // Paddle: two columns wide
    let seg = state.paddle.segment();
    canvas.draw_line(seg.a.x, seg.a.y, seg.b.x, seg.b.y, PADDLE_COLOR);
    canvas.draw_line(seg.a.x - 1, seg.a.y, seg.b.x - 1, seg.b.y, PADDLE_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn state() -> (PongState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(7);
        let state = PongState::new(64, 32, &mut rng);
        (state, rng)
    }

    #[test]
    fn new_ball_spawns_at_fixed_point_with_diagonal_step() {
        let (state, _) = state();
        assert_eq!(state.ball.pos, IVec2::new(42, 16));
        assert_eq!(state.ball.vel.x.abs(), 2);
        assert_eq!(state.ball.vel.y.abs(), 2);
        assert_eq!(state.lives, START_LIVES);
    }

    #[test]
    fn left_edge_exit_costs_one_life_and_respawns() {
        let (mut state, mut rng) = state();
        state.ball.pos = IVec2::new(2, 16);
        state.ball.vel = IVec2::new(-2, 0);

        let event = tick(&mut state, &mut rng);

        assert_eq!(event, Some(PongEvent::LifeLost));
        assert_eq!(state.lives, START_LIVES - 1);
        assert_eq!(state.ball.pos, IVec2::new(42, 16));
        assert_eq!(state.ball.vel.x.abs(), 2);
        assert_eq!(state.ball.vel.y.abs(), 2);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn ball_y_stays_inside_reflecting_band() {
        let (mut state, mut rng) = state();
        // Park the paddle out of the ball's path
        state.paddle.pos.y = 3;
        for _ in 0..1000 {
            tick(&mut state, &mut rng);
            assert!(
                (4..=28).contains(&state.ball.pos.y),
                "ball escaped the band at {:?}",
                state.ball.pos
            );
        }
    }

    #[test]
    fn paddle_hit_reverses_horizontal_velocity() {
        let (mut state, mut rng) = state();
        state.paddle.pos = IVec2::new(1, 16);
        state.ball.pos = IVec2::new(4, 16);
        state.ball.vel = IVec2::new(-2, 0);

        tick(&mut state, &mut rng);

        assert_eq!(state.ball.pos, IVec2::new(2, 16));
        assert_eq!(state.ball.vel, IVec2::new(2, 0));
    }

    #[test]
    fn last_life_plays_one_full_tick_before_game_over() {
        let (mut state, mut rng) = state();
        state.lives = 1;
        state.ball.pos = IVec2::new(2, 16);
        state.ball.vel = IVec2::new(-2, 0);

        // The losing tick still runs to completion: decrement, cue, respawn.
        let event = tick(&mut state, &mut rng);
        assert_eq!(event, Some(PongEvent::LifeLost));
        assert_eq!(state.lives, 0);
        assert_eq!(state.ball.pos, IVec2::new(42, 16));
        assert_eq!(state.phase, GamePhase::GameOver);

        // The next tick is a no-op; the loop exits here.
        let ball = state.ball.clone();
        assert_eq!(tick(&mut state, &mut rng), None);
        assert_eq!(state.ball.pos, ball.pos);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn paddle_steps_clamp_at_the_band() {
        assert_eq!(step_paddle_y(16, -1), 14);
        assert_eq!(step_paddle_y(16, 1), 18);
        assert_eq!(step_paddle_y(5, -1), 3);
        assert_eq!(step_paddle_y(4, -1), 4);
        assert_eq!(step_paddle_y(26, 1), 28);
        assert_eq!(step_paddle_y(27, 1), 27);
        assert_eq!(step_paddle_y(16, 0), 16);
    }

    #[test]
    fn flicker_message_tracks_remaining_lives() {
        assert_eq!(flicker_message(3), "Next chance");
        assert_eq!(flicker_message(0), "You will die");
        assert_eq!(flicker_message(-1), "You lost all");
    }

    #[test]
    fn draw_renders_court_paddle_and_ball() {
        let (state, _) = state();
        let mut buf = crate::canvas::PixelBuffer::new(64, 32);
        draw(&state, &mut buf);

        // Frame corners
        assert_eq!(buf.get(0, 0), Some(FRAME_COLOR));
        assert_eq!(buf.get(63, 31), Some(FRAME_COLOR));
        // Paddle columns at the default center
        assert_eq!(buf.get(1, 16), Some(PADDLE_COLOR));
        assert_eq!(buf.get(0, 13), Some(PADDLE_COLOR));
        // Ball core
        assert_eq!(buf.get(42, 16), Some(BALL_COLOR));
    }
}
