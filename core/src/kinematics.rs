use crate::console::button;
use crate::types::{Facing, GameConfig, PlayerState, Stance};

/// One player, one tick: velocity, facing and stance from the held
/// buttons, then gravity, integration, and the ground clamp.
///
/// Sub-step order:
///  1. Grounded check (against position at the start of the tick)
///  2. Horizontal velocity + facing from Left/Right
///  3. Grounded: jump impulse on ACTION, stance from Up/Down/neither.
///     Airborne: accumulate gravity, stance frozen.
///  4. Integrate (x in whole units; y truncates the fractional vy)
///  5. Clamp y to the ground line
pub fn update_player(p: &PlayerState, buttons: u8, config: &GameConfig) -> PlayerState {
    let grounded = p.y >= config.ground_level;

    // vx is recomputed from scratch every tick. With both directions held
    // the contributions cancel and the Right branch, being last, wins the
    // facing.
    let mut vx = 0;
    let mut facing = p.facing;
    if buttons & button::LEFT != 0 {
        vx -= config.walk_speed;
        facing = Facing::Left;
    }
    if buttons & button::RIGHT != 0 {
        vx += config.walk_speed;
        facing = Facing::Right;
    }

    let mut vy = p.vy;
    let mut stance = p.stance;
    if grounded {
        if buttons & button::ACTION != 0 {
            vy = config.jump_velocity;
        }
        stance = if buttons & button::UP != 0 {
            Stance::High
        } else if buttons & button::DOWN != 0 {
            Stance::Low
        } else {
            Stance::Mid
        };
    } else {
        vy += config.gravity;
    }

    let x = p.x + vx;
    let mut y = p.y + vy as i32;

    // Ground clamp. vy keeps its pre-clamp value; the next grounded tick
    // only overwrites it on a jump.
    if y > config.ground_level {
        y = config.ground_level;
    }

    PlayerState {
        x,
        y,
        vx,
        vy,
        facing,
        stance,
        ..*p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{create_initial_state, default_config};
    use crate::constants::{GRAVITY, GROUND_LEVEL, JUMP_VELOCITY};

    fn grounded_player() -> PlayerState {
        create_initial_state(&default_config()).players[0]
    }

    fn airborne_player(height: i32, vy: f64) -> PlayerState {
        PlayerState {
            y: GROUND_LEVEL - height,
            vy,
            ..grounded_player()
        }
    }

    #[test]
    fn walk_right_sets_velocity_and_facing() {
        let config = default_config();
        let p = PlayerState { facing: Facing::Left, ..grounded_player() };
        let result = update_player(&p, button::RIGHT, &config);
        assert_eq!(result.vx, 1);
        assert_eq!(result.x, p.x + 1);
        assert_eq!(result.facing, Facing::Right);
    }

    #[test]
    fn walk_left_sets_velocity_and_facing() {
        let config = default_config();
        let p = grounded_player();
        let result = update_player(&p, button::LEFT, &config);
        assert_eq!(result.vx, -1);
        assert_eq!(result.x, p.x - 1);
        assert_eq!(result.facing, Facing::Left);
    }

    #[test]
    fn both_directions_cancel_and_right_wins_facing() {
        let config = default_config();
        let p = PlayerState { facing: Facing::Left, ..grounded_player() };
        let result = update_player(&p, button::LEFT | button::RIGHT, &config);
        assert_eq!(result.vx, 0);
        assert_eq!(result.x, p.x);
        assert_eq!(result.facing, Facing::Right);
    }

    #[test]
    fn facing_sticky_without_input() {
        let config = default_config();
        let p = PlayerState { facing: Facing::Left, ..grounded_player() };
        let result = update_player(&p, 0, &config);
        assert_eq!(result.facing, Facing::Left);
        assert_eq!(result.vx, 0);
    }

    #[test]
    fn grounded_jump_applies_impulse() {
        let config = default_config();
        let p = grounded_player();
        let result = update_player(&p, button::ACTION, &config);
        assert_eq!(result.vy, JUMP_VELOCITY);
        assert!(result.y < p.y);
    }

    #[test]
    fn airborne_jump_is_ignored() {
        let config = default_config();
        let p = airborne_player(10, 0.0);
        let result = update_player(&p, button::ACTION, &config);
        assert_eq!(result.vy, GRAVITY);
    }

    #[test]
    fn gravity_accumulates_while_airborne() {
        let config = default_config();
        let p = airborne_player(50, 1.0);
        let result = update_player(&p, 0, &config);
        assert_eq!(result.vy, 1.2);
        assert_eq!(result.y, p.y + 1);
    }

    #[test]
    fn slow_fall_truncates_to_zero_pixels() {
        let config = default_config();
        let p = airborne_player(50, 0.3);
        let result = update_player(&p, 0, &config);
        assert_eq!(result.vy, 0.5);
        assert_eq!(result.y, p.y);
    }

    #[test]
    fn y_never_exceeds_ground_level() {
        let config = default_config();
        let mut p = airborne_player(40, 0.0);
        for _ in 0..120 {
            p = update_player(&p, 0, &config);
            assert!(p.y <= GROUND_LEVEL, "clamp violated at y={}", p.y);
        }
        assert_eq!(p.y, GROUND_LEVEL);
    }

    #[test]
    fn landing_keeps_stale_vy() {
        let config = default_config();
        let p = airborne_player(1, 3.0);
        let result = update_player(&p, 0, &config);
        assert_eq!(result.y, GROUND_LEVEL);
        // The clamp does not zero vy; the value lingers until the next
        // grounded jump overwrites it.
        assert_eq!(result.vy, 3.0 + GRAVITY);
    }

    #[test]
    fn stance_changes_only_while_grounded() {
        let config = default_config();

        let grounded = grounded_player();
        assert_eq!(update_player(&grounded, button::DOWN, &config).stance, Stance::Low);
        assert_eq!(update_player(&grounded, button::UP, &config).stance, Stance::High);
        assert_eq!(update_player(&grounded, 0, &config).stance, Stance::Mid);

        let airborne = PlayerState { stance: Stance::Low, ..airborne_player(20, 0.0) };
        assert_eq!(update_player(&airborne, button::UP, &config).stance, Stance::Low);
        assert_eq!(update_player(&airborne, 0, &config).stance, Stance::Low);
    }

    #[test]
    fn neutral_vertical_resets_stance_to_mid() {
        let config = default_config();
        let p = PlayerState { stance: Stance::Low, ..grounded_player() };
        let result = update_player(&p, button::RIGHT, &config);
        assert_eq!(result.stance, Stance::Mid);
    }

    #[test]
    fn up_wins_over_down() {
        let config = default_config();
        let p = grounded_player();
        let result = update_player(&p, button::UP | button::DOWN, &config);
        assert_eq!(result.stance, Stance::High);
    }

    #[test]
    fn combat_fields_untouched() {
        let config = default_config();
        let p = grounded_player();
        let result = update_player(&p, button::LEFT | button::ACTION, &config);
        assert_eq!(result.health, p.health);
        assert_eq!(result.lunge_timer, p.lunge_timer);
        assert_eq!(result.stun_timer, p.stun_timer);
    }
}
