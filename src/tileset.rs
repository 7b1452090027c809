use macroquad::prelude::*;

/// Textures the scene draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetId {
    Ground,
    Fences,
    Player,
}

/// Geometry of a sprite sheet cut into a regular grid of equal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetGrid {
    pub tex_w: u32,
    pub tex_h: u32,
    pub cell_w: u32,
    pub cell_h: u32,
}

impl SheetGrid {
    pub fn new(tex_w: u32, tex_h: u32, cell_w: u32, cell_h: u32) -> Self {
        SheetGrid {
            tex_w,
            tex_h,
            cell_w,
            cell_h,
        }
    }

    /// Cells per sheet row.
    #[inline]
    pub fn columns(&self) -> u32 {
        if self.cell_w == 0 {
            0
        } else {
            self.tex_w / self.cell_w
        }
    }

    /// Cells per sheet column.
    #[inline]
    pub fn rows(&self) -> u32 {
        if self.cell_h == 0 {
            0
        } else {
            self.tex_h / self.cell_h
        }
    }

    /// Source rectangle for a 1-based tile index. `None` for index 0 or an
    /// index past the last cell of the sheet.
    pub fn source_rect(&self, index: u32) -> Option<Rect> {
        let cols = self.columns();
        if index == 0 || index > cols.saturating_mul(self.rows()) {
            return None;
        }
        // Within the sheet, so the pixel offsets stay inside the texture.
        let local = index - 1;
        let col = local % cols;
        let row = local / cols;
        Some(Rect::new(
            (self.cell_w * col) as f32,
            (self.cell_h * row) as f32,
            self.cell_w as f32,
            self.cell_h as f32,
        ))
    }

    /// Source rectangle at a fixed pixel offset, one cell in size.
    #[inline]
    pub fn cell_at(&self, offset: Vec2) -> Rect {
        Rect::new(offset.x, offset.y, self.cell_w as f32, self.cell_h as f32)
    }
}

/// The two tile sheets a map refers into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetSet {
    pub ground: SheetGrid,
    pub fences: SheetGrid,
    /// Pixel offset of the ground tile laid under every fence tile.
    pub fence_base: Vec2,
}
