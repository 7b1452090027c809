/// Which sheet a cell's tile index refers into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSource {
    /// `"g"`: a tile from the ground sheet
    Ground,
    /// `"f"`: a fence tile drawn over the ground base tile
    Fence,
}

impl TileSource {
    /// Resolve a map tag. Unrecognised tags resolve to `None` and draw nothing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "g" => Some(TileSource::Ground),
            "f" => Some(TileSource::Fence),
            _ => None,
        }
    }
}

/// Decoded tile grid. Built once at load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) indices: Vec<u32>,
    pub(crate) tags: Vec<String>,
}

impl TileMap {
    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major tile indices; `indices().len() == width * height`.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-cell tags as written in the map file. May be shorter or longer than `indices()`.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Grid `(column, row)` of cell `i`.
    #[inline]
    pub fn cell(&self, i: usize) -> (usize, usize) {
        (i % self.width, i / self.width)
    }

    #[inline]
    pub fn index_at(&self, i: usize) -> Option<u32> {
        self.indices.get(i).copied()
    }

    #[inline]
    pub fn tag_at(&self, i: usize) -> Option<&str> {
        self.tags.get(i).map(String::as_str)
    }

    /// Sheet for cell `i`; `None` when the tag is missing or unknown.
    #[inline]
    pub fn source_at(&self, i: usize) -> Option<TileSource> {
        self.tag_at(i).and_then(TileSource::from_tag)
    }

    /// Non-empty cells as `(cell, index)` in increasing cell order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.indices
            .iter()
            .enumerate()
            .filter(|&(_, &index)| index != 0)
            .map(|(i, &index)| (i, index))
    }
}
