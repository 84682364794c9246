//! Runs a scripted two-player session headlessly and dumps the final
//! state as JSON.
//!
//! Usage:
//!   cargo run -p polywogg-core --example scripted-match -- [idle|duel] > state.json

use polywogg_core::*;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "duel".to_string());

    let config = default_config();

    let transcript: Vec<[u8; 2]> = match mode.as_str() {
        "idle" => {
            // Both players idle for ten seconds — nobody should move
            vec![[0, 0]; 600]
        }
        "duel" => {
            // P0 advances right and hops, P1 backs left and crouches
            (0..600u32)
                .map(|tick| {
                    let p0 = if tick % 120 < 100 {
                        button::RIGHT
                    } else {
                        button::RIGHT | button::ACTION
                    };
                    let p1 = if tick % 90 < 45 {
                        button::LEFT | button::DOWN
                    } else {
                        button::LEFT
                    };
                    [p0, p1]
                })
                .collect()
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle' or 'duel'", mode);
            std::process::exit(1);
        }
    };

    let mut console = RecordingConsole::new();
    boot(&mut console);

    let mut state = create_initial_state(&config);
    for inputs in &transcript {
        console.gamepads = *inputs;
        console.clear();
        state = advance_frame(&mut console, &state, &config);
    }

    eprintln!("=== Final state ({} mode) ===", mode);
    eprintln!("Tick: {}", state.t);
    for p in &state.players {
        eprintln!(
            "{:?}: x={} y={} facing={:?} stance={:?}",
            p.gamepad, p.x, p.y, p.facing, p.stance
        );
    }
    eprintln!("Draw calls on last frame: {}", console.commands.len());

    println!("{}", serde_json::to_string(&state).unwrap());
}
