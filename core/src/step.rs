use crate::console::{button, Console};
use crate::kinematics::update_player;
use crate::render::render;
use crate::types::{GameConfig, SessionState};

/// Session transition for one tick.
///
/// Sub-step order:
///  1. Start gate — ACTION on gamepad 1 opens the session (the frame
///     counter is not reset)
///  2. Advance the frame counter
///  3. Update both players in fixed order (player 1 first)
pub fn step(prev: &SessionState, inputs: &[u8; 2], config: &GameConfig) -> SessionState {
    if !prev.started {
        if inputs[0] & button::ACTION != 0 {
            return SessionState {
                started: true,
                ..*prev
            };
        }
        return *prev;
    }

    let mut players = prev.players;
    for (i, p) in players.iter_mut().enumerate() {
        *p = update_player(p, inputs[i], config);
    }

    SessionState {
        started: true,
        t: prev.t + 1,
        players,
    }
}

/// One whole host tick: read each gamepad once, step the simulation,
/// render the new state. Returns the next session state.
pub fn advance_frame(
    console: &mut impl Console,
    prev: &SessionState,
    config: &GameConfig,
) -> SessionState {
    let inputs = [
        console.read_buttons(prev.players[0].gamepad),
        console.read_buttons(prev.players[1].gamepad),
    ];
    let next = step(prev, &inputs, config);
    render(console, &next);
    next
}
