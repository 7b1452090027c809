mod draw;
mod scene;

pub use draw::{draw_commands, draw_pause_overlay, Textures};
pub use scene::{build_tile_commands, pause_overlay_origin, PAUSE_FONT_SIZE, PAUSE_TEXT};
