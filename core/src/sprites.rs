use serde::{Deserialize, Serialize};

use crate::console::blit_flag;
use crate::types::Stance;

/// A baked sprite: packed 2bpp pixel data plus blit metadata, produced
/// offline by the image-conversion step.
#[derive(Clone, Copy, Debug)]
pub struct Sprite {
    pub data: &'static [u8],
    pub width: u32,
    pub height: u32,
    pub flags: u32,
}

/// Key for the baked sprite table, small enough to travel inside draw
/// commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    Frog,
    FrogLow,
}

/// Default standing pose.
pub const FROG: Sprite = Sprite {
    data: &[
        0xa5, 0x6a, 0xa4, 0x2a, 0xa5, 0x68, 0x55, 0xa2,
        0xa5, 0x4a, 0xa5, 0xaa, 0x9a, 0x6a, 0x6a, 0x6a,
    ],
    width: 8,
    height: 8,
    flags: blit_flag::TWO_BPP,
};

/// Crouched pose for the low stance.
pub const FROG_LOW: Sprite = Sprite {
    data: &[
        0x55, 0x55, 0x55, 0x55, 0xa5, 0x6a, 0xa4, 0x2a,
        0xa5, 0x4a, 0x9a, 0x6a, 0x6a, 0x6a, 0x6a, 0x6a,
    ],
    width: 8,
    height: 8,
    flags: blit_flag::TWO_BPP,
};

pub const ALL: [SpriteId; 2] = [SpriteId::Frog, SpriteId::FrogLow];

pub fn get(id: SpriteId) -> &'static Sprite {
    match id {
        SpriteId::Frog => &FROG,
        SpriteId::FrogLow => &FROG_LOW,
    }
}

/// Sprite selection by stance.
// TODO: dedicated high-stance art; High still renders the standing sprite.
pub fn sprite_for_stance(stance: Stance) -> SpriteId {
    match stance {
        Stance::Low => SpriteId::FrogLow,
        Stance::Mid | Stance::High => SpriteId::Frog,
    }
}
