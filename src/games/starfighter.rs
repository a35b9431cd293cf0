//! Starfighter: a one-on-one shoot-out across the panel
//!
//! The player's fighter sits at the left edge and moves vertically while the
//! stick is held; the enemy patrols the right edge on a fixed bounce. Each
//! side has one bullet slot and a shield of ten. The enemy re-arms the
//! instant its bullet dies, so it never stops shooting; the player only
//! fires on a button press and must wait out the bullet's full traversal.
//! First shield to zero loses.

use glam::IVec2;

use super::GamePhase;
use crate::canvas::{Canvas, Rgb};
use crate::geom::{self, Rect};

// ── Tuning ──────────────────────────────────────────────────────────────

pub const SHIP_WIDTH: i32 = 5;
pub const SHIP_HEIGHT: i32 = 5;
pub const START_SHIELD: i32 = 10;

/// Cells the fighter moves per poll while the stick is held
pub const FIGHTER_STEP: i32 = 1;
const FIGHTER_BULLET_STEP: i32 = 2;
const ENEMY_BULLET_STEP: i32 = 3;
/// Enemy patrol turns around at y <= this
const PATROL_TOP: i32 = 2;

// Icon cells: 0 empty, 1 hull, 2 trim
const FIGHTER_ICON: [[u8; 5]; 5] = [
    [2, 1, 1, 1, 0],
    [0, 1, 1, 0, 0],
    [2, 1, 1, 1, 1],
    [0, 1, 1, 0, 0],
    [2, 1, 1, 1, 0],
];
const ENEMY_ICON: [[u8; 5]; 5] = [
    [0, 0, 0, 1, 2],
    [0, 0, 1, 1, 2],
    [1, 1, 1, 1, 0],
    [0, 0, 1, 1, 2],
    [0, 0, 0, 1, 2],
];

const HULL_COLOR: Rgb = Rgb::new(100, 100, 100);
const TRIM_COLOR: Rgb = Rgb::new(200, 0, 0);
const SHIELD_COLOR: Rgb = Rgb::new(200, 200, 200);
const FIGHTER_BULLET_COLOR: Rgb = Rgb::new(0, 0, 200);
const ENEMY_BULLET_COLOR: Rgb = Rgb::new(0, 200, 0);

// ── State ───────────────────────────────────────────────────────────────

/// A single bullet slot; at most one per ship is ever in flight
#[derive(Debug, Clone, Copy, Default)]
pub struct Bullet {
    pub in_flight: bool,
    pub pos: IVec2,
}

#[derive(Debug, Clone)]
pub struct Fighter {
    pub pos: IVec2,
    pub shield: i32,
    pub bullet: Bullet,
}

impl Fighter {
    fn new(rows: i32) -> Self {
        Self {
            pos: IVec2::new(1, rows / 2 - SHIP_HEIGHT / 2),
            shield: START_SHIELD,
            bullet: Bullet::default(),
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, SHIP_WIDTH, SHIP_HEIGHT)
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: IVec2,
    pub shield: i32,
    pub bullet: Bullet,
    vel_y: i32,
}

impl Enemy {
    fn new(cols: i32, rows: i32) -> Self {
        Self {
            pos: IVec2::new(cols - SHIP_WIDTH - 1, rows / 2 - SHIP_HEIGHT / 2),
            shield: START_SHIELD,
            bullet: Bullet::default(),
            vel_y: 1,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos, SHIP_WIDTH, SHIP_HEIGHT)
    }
}

#[derive(Debug, Clone)]
pub struct StarfighterState {
    cols: i32,
    rows: i32,
    pub fighter: Fighter,
    pub enemy: Enemy,
    pub phase: GamePhase,
}

impl StarfighterState {
    pub fn new(cols: i32, rows: i32) -> Self {
        Self {
            cols,
            rows,
            fighter: Fighter::new(rows),
            enemy: Enemy::new(cols, rows),
            phase: GamePhase::Playing,
        }
    }
}

// ── Update ──────────────────────────────────────────────────────────────

/// Advance the game by one frame.
///
/// `fire_pressed` is whether any fire press arrived since the last tick;
/// presses while the player's bullet is in flight are dropped here, which is
/// what keeps the one-bullet rule honest.
pub fn tick(state: &mut StarfighterState, fire_pressed: bool) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Player bullet: arm on press, fly right, die at the far edge
    let fighter = &mut state.fighter;
    if fire_pressed && !fighter.bullet.in_flight {
        fighter.bullet.in_flight = true;
        fighter.bullet.pos = IVec2::new(SHIP_WIDTH, fighter.pos.y + SHIP_HEIGHT / 2);
    }
    if fighter.bullet.in_flight {
        fighter.bullet.pos.x += FIGHTER_BULLET_STEP;
        if fighter.bullet.pos.x >= state.cols {
            fighter.bullet = Bullet::default();
        }
    }

    // Enemy patrol: bounce between the top rows and the floor
    let enemy = &mut state.enemy;
    enemy.pos.y += enemy.vel_y;
    if enemy.pos.y <= PATROL_TOP || enemy.pos.y >= state.rows - SHIP_HEIGHT {
        enemy.vel_y = -enemy.vel_y;
    }

    // Enemy bullet: re-armed the moment the slot is free, so the cadence
    // never breaks
    if !enemy.bullet.in_flight {
        enemy.bullet.in_flight = true;
        enemy.bullet.pos = IVec2::new(enemy.pos.x, enemy.pos.y + SHIP_HEIGHT / 2);
    }
    enemy.bullet.pos.x -= ENEMY_BULLET_STEP;
    if enemy.bullet.pos.x <= 0 {
        enemy.bullet.in_flight = false;
    }

    // Impacts: a bullet inside the opposing hitbox spends a shield point
    if geom::point_in_rect(state.fighter.bullet.pos, state.enemy.hitbox()) {
        state.fighter.bullet = Bullet::default();
        state.enemy.shield -= 1;
    }
    if geom::point_in_rect(state.enemy.bullet.pos, state.fighter.hitbox()) {
        state.enemy.bullet = Bullet::default();
        state.fighter.shield -= 1;
    }

    if state.fighter.shield <= 0 || state.enemy.shield <= 0 {
        state.phase = GamePhase::GameOver;
    }
}

/// One poll step of the fighter while the stick is held, clamped to the
/// play area. Value-in/value-out so the poller can use it in an atomic
/// update.
pub fn step_fighter_y(current: i32, dir: i8, rows: i32) -> i32 {
    if dir == 1 && current < rows - SHIP_HEIGHT {
        current + FIGHTER_STEP
    } else if dir == -1 && current > PATROL_TOP {
        current - FIGHTER_STEP
    } else {
        current
    }
}

// ── Drawing ─────────────────────────────────────────────────────────────

fn draw_icon(canvas: &mut impl Canvas, icon: &[[u8; 5]; 5], origin: IVec2) {
    for (y, row) in icon.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let color = match cell {
                1 => HULL_COLOR,
                2 => TRIM_COLOR,
                _ => continue,
            };
            canvas.set_pixel(origin.x + x as i32, origin.y + y as i32, color);
        }
    }
}

pub fn draw(state: &StarfighterState, canvas: &mut impl Canvas) {
    draw_icon(canvas, &FIGHTER_ICON, state.fighter.pos);
    draw_icon(canvas, &ENEMY_ICON, state.enemy.pos);

    if state.fighter.bullet.in_flight {
        let b = state.fighter.bullet.pos;
        canvas.set_pixel(b.x, b.y, FIGHTER_BULLET_COLOR);
    }
    if state.enemy.bullet.in_flight {
        let b = state.enemy.bullet.pos;
        canvas.set_pixel(b.x, b.y, ENEMY_BULLET_COLOR);
    }

    // Shield bars along the top row, one growing from each side
    canvas.draw_line(1, 0, state.fighter.shield, 0, SHIELD_COLOR);
    canvas.draw_line(
        state.cols - 2,
        0,
        state.cols - 2 - state.enemy.shield,
        0,
        SHIELD_COLOR,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> StarfighterState {
        StarfighterState::new(64, 32)
    }

    #[test]
    fn ships_start_facing_each_other() {
        let s = state();
        assert_eq!(s.fighter.pos, IVec2::new(1, 14));
        assert_eq!(s.enemy.pos, IVec2::new(58, 14));
        assert_eq!(s.fighter.shield, START_SHIELD);
        assert_eq!(s.enemy.shield, START_SHIELD);
    }

    #[test]
    fn fire_arms_one_bullet_at_the_nose() {
        let mut s = state();
        tick(&mut s, true);
        assert!(s.fighter.bullet.in_flight);
        // Armed at (5, y + 2), then advanced once within the same tick
        assert_eq!(s.fighter.bullet.pos, IVec2::new(7, 16));
    }

    #[test]
    fn presses_during_flight_are_dropped() {
        let mut s = state();
        tick(&mut s, true);
        let pos = s.fighter.bullet.pos;
        tick(&mut s, true);
        // Still the same bullet, two cells further; no re-arm happened
        assert!(s.fighter.bullet.in_flight);
        assert_eq!(s.fighter.bullet.pos.x, pos.x + 2);
    }

    #[test]
    fn player_can_refire_only_after_the_far_edge() {
        let mut s = state();
        // Park the enemy high so the player's bullet row misses it entirely
        s.fighter.pos.y = 25;
        s.enemy.pos.y = 2;
        s.enemy.vel_y = 0;
        tick(&mut s, true);
        let mut flights = 0;
        while s.fighter.bullet.in_flight {
            flights += 1;
            tick(&mut s, true);
            assert!(flights < 64, "bullet never reached the far edge");
        }
        // Slot free again: the next press arms a fresh bullet
        tick(&mut s, true);
        assert!(s.fighter.bullet.in_flight);
        assert_eq!(s.fighter.bullet.pos.x, SHIP_WIDTH + 2);
    }

    #[test]
    fn bullet_into_enemy_spends_shield_and_clears() {
        let mut s = state();
        s.enemy.pos.y = 14;
        s.enemy.vel_y = 0;
        s.fighter.bullet.in_flight = true;
        s.fighter.bullet.pos = IVec2::new(57, 16);
        tick(&mut s, false);
        assert_eq!(s.enemy.shield, START_SHIELD - 1);
        assert!(!s.fighter.bullet.in_flight);
    }

    #[test]
    fn enemy_bullet_cadence_never_stops() {
        let mut s = state();
        let mut was_grounded = false;
        for _ in 0..100 {
            tick(&mut s, false);
            if s.phase == GamePhase::GameOver {
                break;
            }
            // A bullet that died (edge or impact) is back in flight one tick
            // later; the slot never idles for two consecutive frames.
            if was_grounded {
                assert!(s.enemy.bullet.in_flight);
            }
            was_grounded = !s.enemy.bullet.in_flight;
        }
    }

    #[test]
    fn enemy_rearms_from_its_nose_after_despawn() {
        let mut s = state();
        s.enemy.vel_y = 0;
        s.enemy.bullet.in_flight = false;
        let expected_y = s.enemy.pos.y + SHIP_HEIGHT / 2;
        tick(&mut s, false);
        assert!(s.enemy.bullet.in_flight);
        assert_eq!(
            s.enemy.bullet.pos,
            IVec2::new(s.enemy.pos.x - ENEMY_BULLET_STEP, expected_y)
        );
    }

    #[test]
    fn enemy_patrol_stays_in_band() {
        let mut s = state();
        // Keep the fighter clear of the bullet lane so the run lasts
        s.fighter.pos.y = 25;
        for _ in 0..300 {
            tick(&mut s, false);
            if s.phase == GamePhase::GameOver {
                break;
            }
            assert!(
                (PATROL_TOP..=(32 - SHIP_HEIGHT)).contains(&s.enemy.pos.y),
                "enemy left the patrol band at {:?}",
                s.enemy.pos
            );
        }
    }

    #[test]
    fn zero_shield_ends_the_run() {
        let mut s = state();
        s.enemy.vel_y = 0;
        s.enemy.shield = 1;
        s.fighter.bullet.in_flight = true;
        s.fighter.bullet.pos = IVec2::new(57, 16);
        tick(&mut s, false);
        assert_eq!(s.enemy.shield, 0);
        assert_eq!(s.phase, GamePhase::GameOver);

        // The terminal tick is the last one that does anything
        let enemy_y = s.enemy.pos.y;
        tick(&mut s, false);
        assert_eq!(s.enemy.pos.y, enemy_y);
    }

    #[test]
    fn fighter_steps_clamp_to_play_area() {
        assert_eq!(step_fighter_y(14, 1, 32), 15);
        assert_eq!(step_fighter_y(14, -1, 32), 13);
        assert_eq!(step_fighter_y(26, 1, 32), 27);
        assert_eq!(step_fighter_y(27, 1, 32), 27);
        assert_eq!(step_fighter_y(3, -1, 32), 2);
        assert_eq!(step_fighter_y(2, -1, 32), 2);
        assert_eq!(step_fighter_y(14, 0, 32), 14);
    }

    #[test]
    fn draw_renders_icons_and_shield_bars() {
        let s = state();
        let mut buf = crate::canvas::PixelBuffer::new(64, 32);
        draw(&s, &mut buf);

        // Fighter trim at its left column, hull in the middle row
        assert_eq!(buf.get(1, 14), Some(TRIM_COLOR));
        assert_eq!(buf.get(5, 16), Some(HULL_COLOR));
        // Enemy trim on its right column
        assert_eq!(buf.get(62, 14), Some(TRIM_COLOR));
        // Shield bars at full strength
        assert_eq!(buf.get(1, 0), Some(SHIELD_COLOR));
        assert_eq!(buf.get(10, 0), Some(SHIELD_COLOR));
        assert_eq!(buf.get(62, 0), Some(SHIELD_COLOR));
        assert_eq!(buf.get(52, 0), Some(SHIELD_COLOR));
    }
}
