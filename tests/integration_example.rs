// tests/integration_example.rs

use std::path::PathBuf;
use meadow_walk::{decode_map_file, TileSource};

#[test]
fn example_load_bundled_map() {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("one.map");
    let map = decode_map_file(&path).expect("Bundled map should load");
    assert_eq!((map.width(), map.height()), (10, 8));
    assert_eq!(map.indices().len(), 80);
    assert_eq!(map.tags().len(), 80);
    // Bottom-right corner of a non-square map lands on the last row.
    assert_eq!(map.cell(79), (9, 7));
    assert_eq!(map.source_at(79), Some(TileSource::Fence));
    assert_eq!(map.source_at(11), Some(TileSource::Ground));
}
