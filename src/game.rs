use crate::camera::FollowCamera;
use crate::command::DrawCommand;
use crate::config::GameConfig;
use crate::input::InputSnapshot;
use crate::map::TileMap;
use crate::player::Player;
use crate::render::build_tile_commands;
use crate::tileset::SheetSet;
use macroquad::prelude::*;

/// Everything the loop mutates, owned in one place.
pub struct GameState {
    pub map: TileMap,
    /// Tile draw list, built once since the map never changes.
    pub tiles: Vec<DrawCommand>,
    pub player: Player,
    pub camera: FollowCamera,
    pub paused: bool,
}

impl GameState {
    pub fn new(map: TileMap, sheets: &SheetSet, cfg: &GameConfig) -> Self {
        let tiles = build_tile_commands(&map, sheets);
        let frame = cfg.frame_size as f32;
        let player = Player::new(cfg.spawn.into(), vec2(frame, frame), cfg.player_speed);
        let mut camera = FollowCamera::centered(cfg.window_size(), cfg.zoom);
        camera.follow(player.dest);
        log::debug!("Scene has {} tile draw commands", tiles.len());

        GameState {
            map,
            tiles,
            player,
            camera,
            paused: false,
        }
    }

    /// One input+update step.
    ///
    /// A pause press toggles the pause flag; while paused the player and its
    /// animation counters are left untouched.
    pub fn tick(&mut self, input: &InputSnapshot) {
        if input.pause_pressed {
            self.paused = !self.paused;
            log::debug!("Paused: {}", self.paused);
        }

        if !self.paused {
            self.player.update(&input.move_intent());
        }

        self.camera.follow(self.player.dest);
    }
}
