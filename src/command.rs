use crate::tileset::SheetId;
use macroquad::prelude::Rect;

/// One textured quad in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sheet: SheetId,
    pub src: Rect,
    pub dest: Rect,
}
