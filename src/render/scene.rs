//! Resolve map cells to textured quads. Pure: no GPU context needed.

use crate::command::DrawCommand;
use crate::map::{TileMap, TileSource};
use crate::tileset::{SheetId, SheetSet};
use macroquad::prelude::*;

pub const PAUSE_TEXT: &str = "PAUSED!";
pub const PAUSE_FONT_SIZE: u16 = 48;

/// Tile draw list for the whole map, in increasing cell order.
///
/// Fence cells emit two commands: the fixed ground base tile, then the fence.
/// Cells without a known tag, or whose index falls outside their sheet, emit
/// nothing.
pub fn build_tile_commands(map: &TileMap, sheets: &SheetSet) -> Vec<DrawCommand> {
    let tw = sheets.ground.cell_w as f32;
    let th = sheets.ground.cell_h as f32;
    let mut out = Vec::with_capacity(map.indices().len());

    for (i, index) in map.occupied() {
        let Some(source) = map.source_at(i) else {
            continue;
        };
        let (col, row) = map.cell(i);
        let dest = Rect::new(col as f32 * tw, row as f32 * th, tw, th);

        match source {
            TileSource::Ground => {
                if let Some(src) = sheets.ground.source_rect(index) {
                    out.push(DrawCommand {
                        sheet: SheetId::Ground,
                        src,
                        dest,
                    });
                }
            }
            TileSource::Fence => {
                out.push(DrawCommand {
                    sheet: SheetId::Ground,
                    src: sheets.ground.cell_at(sheets.fence_base),
                    dest,
                });
                if let Some(src) = sheets.fences.source_rect(index) {
                    out.push(DrawCommand {
                        sheet: SheetId::Fences,
                        src,
                        dest,
                    });
                }
            }
        }
    }

    out
}

/// Top-left text origin that centres a `text_size` box on `target`.
#[inline]
pub fn pause_overlay_origin(target: Vec2, text_size: Vec2) -> Vec2 {
    vec2(
        (target.x - text_size.x / 2.0).trunc(),
        (target.y - text_size.y / 2.0).trunc(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::text_loader::decode_map_str;
    use crate::tileset::SheetGrid;

    fn sheets() -> SheetSet {
        SheetSet {
            ground: SheetGrid::new(64, 64, 16, 16),
            fences: SheetGrid::new(64, 64, 16, 16),
            fence_base: vec2(16.0, 16.0),
        }
    }

    #[test]
    fn fence_cell_draws_fixed_ground_base_then_fence() {
        let map = decode_map_str("1 1 5 f").expect("decode");
        let cmds = build_tile_commands(&map, &sheets());
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].sheet, SheetId::Ground);
        assert_eq!(cmds[0].src, Rect::new(16.0, 16.0, 16.0, 16.0));
        assert_eq!(cmds[1].sheet, SheetId::Fences);
        // (5 - 1) % 4 = 0, (5 - 1) / 4 = 1
        assert_eq!(cmds[1].src, Rect::new(0.0, 16.0, 16.0, 16.0));
        assert_eq!(cmds[0].dest, cmds[1].dest);
    }

    #[test]
    fn fence_base_is_independent_of_index() {
        let map = decode_map_str("2 1 2 9 f f").expect("decode");
        let cmds = build_tile_commands(&map, &sheets());
        let bases: Vec<_> = cmds
            .iter()
            .filter(|c| c.sheet == SheetId::Ground)
            .map(|c| c.src)
            .collect();
        assert_eq!(bases, vec![Rect::new(16.0, 16.0, 16.0, 16.0); 2]);
    }

    #[test]
    fn empty_untagged_and_unknown_cells_are_skipped() {
        let map = decode_map_str("2 2 0 1 2 3 g g q").expect("decode");
        let cmds = build_tile_commands(&map, &sheets());
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].sheet, SheetId::Ground);
        assert_eq!(cmds[0].dest, Rect::new(16.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn destinations_follow_row_major_cells_on_wide_maps() {
        let map = decode_map_str("3 2 1 1 1 1 1 1 g g g g g g").expect("decode");
        let cmds = build_tile_commands(&map, &sheets());
        let origins: Vec<_> = cmds.iter().map(|c| (c.dest.x, c.dest.y)).collect();
        assert_eq!(
            origins,
            vec![
                (0.0, 0.0),
                (16.0, 0.0),
                (32.0, 0.0),
                (0.0, 16.0),
                (16.0, 16.0),
                (32.0, 16.0)
            ]
        );
    }

    #[test]
    fn out_of_sheet_indices_draw_nothing() {
        let map = decode_map_str("3 1 100 4294967295 17 g g f").expect("decode");
        let cmds = build_tile_commands(&map, &sheets());
        // Only the fence cell's ground base survives.
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].sheet, SheetId::Ground);
        assert_eq!(cmds[0].src, Rect::new(16.0, 16.0, 16.0, 16.0));
        assert_eq!(cmds[0].dest, Rect::new(32.0, 0.0, 16.0, 16.0));
    }

    #[test]
    fn overlay_is_centred_on_target() {
        let origin = pause_overlay_origin(vec2(100.0, 50.0), vec2(40.0, 20.0));
        assert_eq!(origin, vec2(80.0, 40.0));
    }
}
