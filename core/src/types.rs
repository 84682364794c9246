use serde::{Deserialize, Serialize};

use crate::console::Gamepad;

pub type Tick = u32;

// ── Facing / stance ─────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Horizontal sign used in movement and swing math: Left = -1, Right = +1.
pub fn direction_sign(facing: Facing) -> i32 {
    match facing {
        Facing::Left => -1,
        Facing::Right => 1,
    }
}

/// Combat posture. Only changeable while grounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stance {
    High,
    Mid,
    Low,
}

/// Vertical sign used in swing geometry: High = -1, Mid = 0, Low = +1.
pub fn stance_offset(stance: Stance) -> i32 {
    match stance {
        Stance::High => -1,
        Stance::Mid => 0,
        Stance::Low => 1,
    }
}

// ── Player ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Which gamepad drives this player.
    pub gamepad: Gamepad,
    /// Draw-colors value applied before this player's draw calls.
    pub draw_colors: u16,
    /// Feet-center position, integer screen coordinates.
    pub x: i32,
    pub y: i32,
    /// Recomputed from input every tick.
    pub vx: i32,
    /// Persists across airborne ticks; the fraction below one pixel
    /// stays here rather than in `y`.
    pub vy: f64,
    pub facing: Facing,
    pub stance: Stance,
    pub health: i32,
    /// Reserved for lunge attacks; initialized, never updated yet.
    pub lunge_timer: i32,
    /// Reserved for hit stun; initialized, never updated yet.
    pub stun_timer: i32,
}

// ── Session ─────────────────────────────────────────────────

/// Whole-session state: the start gate, the frame counter driving the
/// background animation, and both players.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub started: bool,
    pub t: Tick,
    pub players: [PlayerState; 2],
}

// ── Config ──────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Feet line; `y` is clamped to never exceed this.
    pub ground_level: i32,
    /// Pixels per tick while a direction is held.
    pub walk_speed: i32,
    /// Added to vy every airborne tick.
    pub gravity: f64,
    /// vy set on a grounded jump (negative = up).
    pub jump_velocity: f64,
    /// Skip the title gate and begin in the running state.
    pub start_immediately: bool,
}
