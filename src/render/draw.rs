use crate::command::DrawCommand;
use crate::config::GameConfig;
use crate::render::scene::{pause_overlay_origin, PAUSE_FONT_SIZE, PAUSE_TEXT};
use crate::tileset::{SheetGrid, SheetId, SheetSet};
use anyhow::Context;
use macroquad::prelude::*;
use std::path::Path;

async fn load_sheet(path: &Path) -> anyhow::Result<Texture2D> {
    let path_str = path
        .to_str()
        .with_context(|| format!("Texture path is not UTF-8: {}", path.display()))?;
    let tex = load_texture(path_str)
        .await
        .with_context(|| format!("Loading texture {}", path.display()))?;
    tex.set_filter(FilterMode::Nearest);
    log::info!(
        "Loaded texture {} ({}x{})",
        path.display(),
        tex.width(),
        tex.height()
    );
    Ok(tex)
}

/// GPU textures for every [`SheetId`]. Released when dropped.
pub struct Textures {
    pub ground: Texture2D,
    pub fences: Texture2D,
    pub player: Texture2D,
}

impl Textures {
    pub async fn load(cfg: &GameConfig) -> anyhow::Result<Self> {
        Ok(Textures {
            ground: load_sheet(&cfg.ground_sheet).await?,
            fences: load_sheet(&cfg.fences_sheet).await?,
            player: load_sheet(&cfg.player_sheet).await?,
        })
    }

    #[inline]
    pub fn get(&self, id: SheetId) -> &Texture2D {
        match id {
            SheetId::Ground => &self.ground,
            SheetId::Fences => &self.fences,
            SheetId::Player => &self.player,
        }
    }

    /// Tile sheet geometry for the loaded ground and fence textures.
    pub fn sheet_set(&self, cfg: &GameConfig) -> SheetSet {
        let grid = |tex: &Texture2D| {
            SheetGrid::new(
                tex.width() as u32,
                tex.height() as u32,
                cfg.tile_size,
                cfg.tile_size,
            )
        };
        SheetSet {
            ground: grid(&self.ground),
            fences: grid(&self.fences),
            fence_base: cfg.fence_base.into(),
        }
    }
}

/// Issue one `draw_texture_ex` per command, in order.
pub fn draw_commands(textures: &Textures, cmds: &[DrawCommand]) {
    for cmd in cmds {
        draw_texture_ex(
            textures.get(cmd.sheet),
            cmd.dest.x,
            cmd.dest.y,
            WHITE,
            DrawTextureParams {
                source: Some(cmd.src),
                dest_size: Some(vec2(cmd.dest.w, cmd.dest.h)),
                ..Default::default()
            },
        );
    }
}

/// "PAUSED!" centred on the camera target, in world space.
pub fn draw_pause_overlay(target: Vec2) {
    let dims = measure_text(PAUSE_TEXT, None, PAUSE_FONT_SIZE, 1.0);
    let origin = pause_overlay_origin(target, vec2(dims.width, dims.height));
    // draw_text places the baseline at y
    draw_text(
        PAUSE_TEXT,
        origin.x,
        origin.y + dims.offset_y,
        PAUSE_FONT_SIZE as f32,
        BLACK,
    );
}
