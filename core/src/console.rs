use serde::{Deserialize, Serialize};

use crate::sprites::SpriteId;

/// Gamepad button bitmask constants (host bit layout).
pub mod button {
    /// The "X" action button.
    pub const ACTION: u8 = 1;
    pub const LEFT: u8 = 16;
    pub const RIGHT: u8 = 32;
    pub const UP: u8 = 64;
    pub const DOWN: u8 = 128;
}

/// Blit flag bitmask constants.
pub mod blit_flag {
    pub const TWO_BPP: u32 = 1;
    pub const FLIP_X: u32 = 2;
    pub const FLIP_Y: u32 = 4;
    pub const ROTATE: u32 = 8;
}

/// Opaque handle naming one of the two gamepads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gamepad {
    One,
    Two,
}

impl Gamepad {
    pub fn index(self) -> usize {
        match self {
            Gamepad::One => 0,
            Gamepad::Two => 1,
        }
    }
}

/// The host console: gamepad state plus stateless draw primitives.
///
/// The draw primitives read the draw-colors register at call time, so a
/// `set_draw_colors` must land before the draw call it is meant for.
/// Gamepad state is read at most once per pad per tick; the host only
/// updates it between ticks.
pub trait Console {
    /// Current button bitmask for one gamepad (see [`button`]).
    fn read_buttons(&self, pad: Gamepad) -> u8;
    /// Map the four logical color slots for subsequent draw calls.
    fn set_draw_colors(&mut self, colors: u16);
    /// Copy packed sprite data to the framebuffer. Width/height/bpp come
    /// from the sprite record; `flags` may add flip/rotate bits.
    fn blit(&mut self, sprite: SpriteId, x: i32, y: i32, flags: u32);
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
    fn text(&mut self, text: &str, x: i32, y: i32);
    /// Configure the 4-color palette. Called once at load.
    fn set_palette(&mut self, palette: [u32; 4]);
}

/// One recorded host call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCommand {
    SetDrawColors { colors: u16 },
    Blit { sprite: SpriteId, x: i32, y: i32, flags: u32 },
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
    Text { text: String, x: i32, y: i32 },
    SetPalette { palette: [u32; 4] },
}

/// Console backed by a command log instead of real hardware. The wasm
/// frontend hands the recorded commands to JS to rasterize; tests assert
/// on them directly.
#[derive(Clone, Debug, Default)]
pub struct RecordingConsole {
    /// Button bitmask per gamepad, set by the embedder before each tick.
    pub gamepads: [u8; 2],
    pub commands: Vec<DrawCommand>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gamepads(pad1: u8, pad2: u8) -> Self {
        RecordingConsole {
            gamepads: [pad1, pad2],
            commands: Vec::new(),
        }
    }

    /// Drop the previous frame's commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Console for RecordingConsole {
    fn read_buttons(&self, pad: Gamepad) -> u8 {
        self.gamepads[pad.index()]
    }

    fn set_draw_colors(&mut self, colors: u16) {
        self.commands.push(DrawCommand::SetDrawColors { colors });
    }

    fn blit(&mut self, sprite: SpriteId, x: i32, y: i32, flags: u32) {
        self.commands.push(DrawCommand::Blit { sprite, x, y, flags });
    }

    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        self.commands.push(DrawCommand::Line { x0, y0, x1, y1 });
    }

    fn text(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
        });
    }

    fn set_palette(&mut self, palette: [u32; 4]) {
        self.commands.push(DrawCommand::SetPalette { palette });
    }
}
