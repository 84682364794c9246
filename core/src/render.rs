use crate::console::{blit_flag, Console};
use crate::constants::*;
use crate::sprites::{self, sprite_for_stance};
use crate::types::{direction_sign, stance_offset, Facing, PlayerState, SessionState, Tick};

/// Body sprite plus weapon swing for one player.
///
/// The host's draw primitives read the draw-colors register at call
/// time, so the register is written immediately before each draw call.
pub fn draw_player(console: &mut impl Console, p: &PlayerState) {
    let id = sprite_for_stance(p.stance);
    let sprite = sprites::get(id);
    let w = sprite.width as i32;
    let h = sprite.height as i32;

    // Position is feet-center; blit takes the top-left corner.
    let mut flags = sprite.flags;
    if p.facing == Facing::Left {
        flags |= blit_flag::FLIP_X;
    }
    console.set_draw_colors(p.draw_colors);
    console.blit(id, p.x - w / 2, p.y - h, flags);

    // Weapon swing: out from the body in the facing direction, angled up
    // or down by stance.
    let dir = direction_sign(p.facing);
    let lift = stance_offset(p.stance);
    let x0 = p.x + dir * SWING_OFFSET_X;
    let y0 = p.y - SWING_HEIGHT + lift * SWING_STANCE_STEP;
    console.set_draw_colors(SWING_DRAW_COLORS);
    console.line(x0, y0, x0 + dir * SWING_REACH_X, y0 + lift * SWING_REACH_Y);
}

/// Decorative sine ribbon behind the fighters. No effect on game state.
pub fn draw_background(console: &mut impl Console, t: Tick) {
    console.set_draw_colors(BACKGROUND_DRAW_COLORS);
    for i in 0..BACKGROUND_POINTS {
        let phase = (f64::from(t) + f64::from(i)) / BACKGROUND_PERIOD;
        let x = BACKGROUND_LEFT + i;
        let y = BACKGROUND_MID_Y + (phase.sin() * BACKGROUND_AMPLITUDE) as i32;
        console.line(x, y, x, y);
    }
}

/// Welcome banner and start prompt, shown until the session starts.
pub fn draw_title(console: &mut impl Console) {
    console.set_draw_colors(TITLE_DRAW_COLORS);
    console.text("Welcome to\n\n    Polywogg!", 10, 10);
    console.set_draw_colors(PROMPT_DRAW_COLORS);
    console.text("Press X to start", 16, 90);
}

/// Full frame for one session state: title gate, otherwise background
/// then both players in fixed order. Pure with respect to the state —
/// the same state always yields the same command sequence.
pub fn render(console: &mut impl Console, state: &SessionState) {
    if !state.started {
        draw_title(console);
        return;
    }
    draw_background(console, state.t);
    for p in &state.players {
        draw_player(console, p);
    }
}
