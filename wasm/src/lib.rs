use polywogg_core::{
    advance_frame, boot, create_initial_state, default_config, direction_sign, sprites,
    stance_offset, Facing, GameConfig, Gamepad, PlayerState, RecordingConsole, SessionState,
    SpriteId, Stance,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Install panic hook so WASM panics show in the browser console instead
/// of silently freezing.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JSON-serializable player state for JS. Facing and stance travel as
/// their signed coefficients (-1/+1 and -1/0/+1).
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsPlayer {
    gamepad: u32,
    draw_colors: u16,
    x: i32,
    y: i32,
    vx: i32,
    vy: f64,
    facing: i32,
    stance: i32,
    health: i32,
    lunge_timer: i32,
    stun_timer: i32,
}

/// JSON-serializable session state for JS.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsState {
    started: bool,
    t: u32,
    players: Vec<JsPlayer>,
}

/// Sprite record for the JS rasterizer, keyed by the `sprite` field of
/// blit commands.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSprite {
    id: SpriteId,
    data: Vec<u8>,
    width: u32,
    height: u32,
    flags: u32,
}

fn player_to_js(p: &PlayerState) -> JsPlayer {
    JsPlayer {
        gamepad: p.gamepad.index() as u32,
        draw_colors: p.draw_colors,
        x: p.x,
        y: p.y,
        vx: p.vx,
        vy: p.vy,
        facing: direction_sign(p.facing),
        stance: stance_offset(p.stance),
        health: p.health,
        lunge_timer: p.lunge_timer,
        stun_timer: p.stun_timer,
    }
}

fn player_from_js(p: &JsPlayer) -> PlayerState {
    PlayerState {
        gamepad: if p.gamepad == 0 { Gamepad::One } else { Gamepad::Two },
        draw_colors: p.draw_colors,
        x: p.x,
        y: p.y,
        vx: p.vx,
        vy: p.vy,
        facing: if p.facing < 0 { Facing::Left } else { Facing::Right },
        stance: match p.stance {
            s if s < 0 => Stance::High,
            0 => Stance::Mid,
            _ => Stance::Low,
        },
        health: p.health,
        lunge_timer: p.lunge_timer,
        stun_timer: p.stun_timer,
    }
}

fn state_to_js(s: &SessionState) -> JsState {
    JsState {
        started: s.started,
        t: s.t,
        players: s.players.iter().map(player_to_js).collect(),
    }
}

/// All baked sprites as `{id, data, width, height, flags}` records.
#[wasm_bindgen]
pub fn sprite_atlas() -> JsValue {
    let atlas: Vec<JsSprite> = sprites::ALL
        .iter()
        .map(|&id| {
            let s = sprites::get(id);
            JsSprite {
                id,
                data: s.data.to_vec(),
                width: s.width,
                height: s.height,
                flags: s.flags,
            }
        })
        .collect();
    serde_wasm_bindgen::to_value(&atlas).unwrap()
}

#[wasm_bindgen]
pub struct Game {
    state: SessionState,
    config: GameConfig,
    console: RecordingConsole,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Game {
    /// Create a session with the shipped defaults (start gate skipped).
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        let config = default_config();
        let state = create_initial_state(&config);
        Game {
            state,
            config,
            console: RecordingConsole::new(),
        }
    }

    /// Create a session that waits on the title screen for the action
    /// button.
    pub fn new_gated() -> Game {
        let config = GameConfig {
            start_immediately: false,
            ..default_config()
        };
        let state = create_initial_state(&config);
        Game {
            state,
            config,
            console: RecordingConsole::new(),
        }
    }

    /// Host load hook. Returns the palette-setup command list for JS to
    /// apply once.
    pub fn boot(&mut self) -> JsValue {
        self.console.clear();
        boot(&mut self.console);
        serde_wasm_bindgen::to_value(&self.console.commands).unwrap()
    }

    /// One 60 Hz tick: feed the current gamepad bytes in, get the frame's
    /// draw-command list back.
    pub fn tick(&mut self, gamepad1: u8, gamepad2: u8) -> JsValue {
        self.console.gamepads = [gamepad1, gamepad2];
        self.console.clear();
        self.state = advance_frame(&mut self.console, &self.state, &self.config);
        serde_wasm_bindgen::to_value(&self.console.commands).unwrap()
    }

    /// Export full session state as a JS object.
    pub fn export_state(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&state_to_js(&self.state)).unwrap()
    }

    /// Import session state from a JS object (snapshot restore). Silently
    /// keeps the current state if the value does not parse.
    pub fn import_state(&mut self, state: JsValue) {
        let js: JsState = match serde_wasm_bindgen::from_value(state) {
            Ok(js) => js,
            Err(_) => return,
        };
        self.state.started = js.started;
        self.state.t = js.t;
        for (i, jp) in js.players.iter().enumerate().take(2) {
            self.state.players[i] = player_from_js(jp);
        }
    }

    // Quick accessors
    pub fn tick_count(&self) -> u32 {
        self.state.t
    }
    pub fn started(&self) -> bool {
        self.state.started
    }
}
