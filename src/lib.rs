//! Top-down tile map walker for Macroquad.
//!
//! Decodes a whitespace-delimited tile map, resolves its cells to sprite-sheet
//! quads, and drives a single animated player around a follow camera.

pub mod audio;
pub mod camera;
mod command;
mod config;
mod error;
pub mod game;
pub mod input;
pub mod loader {
    //! Map file decoding.
    pub mod text_loader;
}
mod map;
mod pacing;
pub mod player;
pub mod render;
mod tileset;

pub use command::DrawCommand;
pub use config::{GameConfig, DEFAULT_CONFIG_FILE};
pub use error::MapError;
pub use loader::text_loader::{decode_map_file, decode_map_str};
pub use map::{TileMap, TileSource};
pub use pacing::FrameLimiter;
pub use tileset::{SheetGrid, SheetId, SheetSet};
