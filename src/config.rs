//! Game configuration.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! { "window_width": 1280, "zoom": 4.0, "keys": { "pause": "Space" } }
//! ```

use crate::error::MapError;
use crate::input::KeyBindings;
use macroquad::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up next to the working directory by the binary.
pub const DEFAULT_CONFIG_FILE: &str = "meadow.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    pub window_width: i32,
    pub window_height: i32,
    /// Frames (and ticks) per second.
    pub target_fps: u32,
    pub zoom: f32,
    /// Pixels per tick per held direction.
    pub player_speed: f32,
    pub tile_size: u32,
    /// Player sprite-sheet cell size.
    pub frame_size: u32,
    /// Player spawn in world pixels.
    pub spawn: [f32; 2],
    /// Ground tile laid under fences, as a pixel offset into the ground sheet.
    pub fence_base: [f32; 2],
    /// RGBA clear colour.
    pub background: [u8; 4],
    pub map_path: PathBuf,
    pub ground_sheet: PathBuf,
    pub fences_sheet: PathBuf,
    pub player_sheet: PathBuf,
    /// `None` runs without music.
    pub music: Option<PathBuf>,
    pub keys: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Meadow Walk".into(),
            window_width: 1024,
            window_height: 768,
            target_fps: 60,
            zoom: 3.0,
            player_speed: 3.0,
            tile_size: 16,
            frame_size: 48,
            spawn: [0.0, 0.0],
            fence_base: [16.0, 16.0],
            background: [147, 211, 196, 255],
            map_path: "one.map".into(),
            ground_sheet: "resources/sprites/tilesets/grass.png".into(),
            fences_sheet: "resources/sprites/tilesets/fences.png".into(),
            player_sheet: "resources/sprites/characters/basic_character_spritesheet.png".into(),
            music: Some("resources/audio/silly_fun.mp3".into()),
            keys: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Read `path`, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let p = path.as_ref();
        let txt = match std::fs::read_to_string(p) {
            Ok(txt) => txt,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", p.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(MapError::Io {
                    path: p.to_path_buf(),
                    source,
                })
            }
        };
        let cfg = serde_json::from_str(&txt).map_err(|source| MapError::Config {
            path: p.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config {}", p.display());
        Ok(cfg)
    }

    pub fn window_conf(&self) -> Conf {
        Conf {
            window_title: self.title.clone(),
            window_width: self.window_width,
            window_height: self.window_height,
            window_resizable: false,
            ..Default::default()
        }
    }

    #[inline]
    pub fn window_size(&self) -> Vec2 {
        vec2(self.window_width as f32, self.window_height as f32)
    }

    #[inline]
    pub fn background_color(&self) -> Color {
        let [r, g, b, a] = self.background;
        Color::from_rgba(r, g, b, a)
    }
}
