use crate::console::{Console, Gamepad};
use crate::constants::*;
use crate::types::{Facing, GameConfig, PlayerState, SessionState, Stance};

/// Two players at fixed spawns facing each other, full health, mid
/// stance. Created once; instances live for the whole process.
pub fn create_initial_state(config: &GameConfig) -> SessionState {
    let spawn = |i: usize| PlayerState {
        gamepad: if i == 0 { Gamepad::One } else { Gamepad::Two },
        draw_colors: PLAYER_DRAW_COLORS[i],
        x: SPAWN_X[i],
        y: config.ground_level,
        vx: 0,
        vy: 0.0,
        facing: if i == 0 { Facing::Right } else { Facing::Left },
        stance: Stance::Mid,
        health: MAX_HEALTH,
        lunge_timer: 0,
        stun_timer: 0,
    };

    SessionState {
        started: config.start_immediately,
        t: 0,
        players: [spawn(0), spawn(1)],
    }
}

/// Shipped build defaults.
pub fn default_config() -> GameConfig {
    GameConfig {
        ground_level: GROUND_LEVEL,
        walk_speed: WALK_SPEED,
        gravity: GRAVITY,
        jump_velocity: JUMP_VELOCITY,
        // Development default; a release build gates on the title screen.
        start_immediately: true,
    }
}

/// Host `start()` hook: configure the 4-color palette once at load.
pub fn boot(console: &mut impl Console) {
    console.set_palette(PALETTE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{DrawCommand, RecordingConsole};

    #[test]
    fn initial_state_correct() {
        let config = default_config();
        let state = create_initial_state(&config);

        assert!(state.started);
        assert_eq!(state.t, 0);

        let [p0, p1] = state.players;
        assert_eq!(p0.gamepad, Gamepad::One);
        assert_eq!(p1.gamepad, Gamepad::Two);
        assert_eq!((p0.x, p0.y), (SPAWN_X[0], GROUND_LEVEL));
        assert_eq!((p1.x, p1.y), (SPAWN_X[1], GROUND_LEVEL));
        assert_eq!(p0.facing, Facing::Right);
        assert_eq!(p1.facing, Facing::Left);
        for p in [p0, p1] {
            assert_eq!(p.stance, Stance::Mid);
            assert_eq!(p.health, MAX_HEALTH);
            assert_eq!((p.vx, p.vy), (0, 0.0));
            assert_eq!((p.lunge_timer, p.stun_timer), (0, 0));
        }
    }

    #[test]
    fn gated_config_starts_on_title() {
        let config = GameConfig {
            start_immediately: false,
            ..default_config()
        };
        assert!(!create_initial_state(&config).started);
    }

    #[test]
    fn boot_sets_palette() {
        let mut console = RecordingConsole::new();
        boot(&mut console);
        assert_eq!(console.commands, vec![DrawCommand::SetPalette { palette: PALETTE }]);
    }
}
