// All values are per-tick at 60 Hz unless noted.

// Screen
pub const SCREEN_SIZE: i32 = 160;

// Physics
pub const GROUND_LEVEL: i32 = 140;
pub const WALK_SPEED: i32 = 1;
pub const GRAVITY: f64 = 0.2;
pub const JUMP_VELOCITY: f64 = -3.0;

// Players
pub const MAX_HEALTH: i32 = 100;
pub const SPAWN_X: [i32; 2] = [40, 120];

// Weapon swing geometry (pixels; signed by facing/stance at draw time)
pub const SWING_OFFSET_X: i32 = 2;
pub const SWING_HEIGHT: i32 = 5;
pub const SWING_STANCE_STEP: i32 = 2;
pub const SWING_REACH_X: i32 = 4;
pub const SWING_REACH_Y: i32 = 3;

// Background ribbon, centered on screen
pub const BACKGROUND_POINTS: i32 = 100;
pub const BACKGROUND_LEFT: i32 = (SCREEN_SIZE - BACKGROUND_POINTS) / 2;
pub const BACKGROUND_MID_Y: i32 = 60;
pub const BACKGROUND_AMPLITUDE: f64 = 8.0;
pub const BACKGROUND_PERIOD: f64 = 10.0;

// Palette — lospec "black-tar", fits a game called Polywogg
pub const PALETTE: [u32; 4] = [0x843c35, 0xffeb94, 0x398a75, 0x26153a];

// Draw colors
pub const TITLE_DRAW_COLORS: u16 = 2;
pub const PROMPT_DRAW_COLORS: u16 = 3;
pub const BACKGROUND_DRAW_COLORS: u16 = 0x42;
pub const SWING_DRAW_COLORS: u16 = 3;
pub const PLAYER_DRAW_COLORS: [u16; 2] = [0x4320, 0x2340];
