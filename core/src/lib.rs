pub mod console;
pub mod constants;
pub mod init;
pub mod kinematics;
pub mod render;
pub mod sprites;
pub mod step;
pub mod types;

pub use console::{blit_flag, button, Console, DrawCommand, Gamepad, RecordingConsole};
pub use constants::*;
pub use init::*;
pub use kinematics::update_player;
pub use render::{draw_background, draw_player, draw_title, render};
pub use sprites::{sprite_for_stance, Sprite, SpriteId};
pub use step::{advance_frame, step};
pub use types::*;
