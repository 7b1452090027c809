// src/loader/text_loader.rs
use crate::error::MapError;
use crate::map::{TileMap, TileSource};
use std::collections::BTreeSet;
use std::path::Path;

fn parse_dimension(name: &'static str, token: Option<&str>) -> Result<usize, MapError> {
    let token = token.unwrap_or_default();
    match token.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MapError::InvalidDimension {
            name,
            token: token.to_owned(),
        }),
    }
}

fn parse_index(position: usize, token: &str) -> Result<u32, MapError> {
    token.parse::<u32>().map_err(|_| MapError::InvalidTileIndex {
        position,
        token: token.to_owned(),
    })
}

/// Decode the whitespace-delimited map format:
/// `<width> <height> <index_0> .. <index_{w*h-1}> <tag_0> <tag_1> ..`
pub fn decode_map_str(txt: &str) -> Result<TileMap, MapError> {
    // Line breaks (`\n` and `\r\n`) are plain separators here.
    let mut tokens = txt.split_whitespace().peekable();

    if tokens.peek().is_none() {
        return Err(MapError::Empty);
    }

    let width = parse_dimension("width", tokens.next())?;
    let height = parse_dimension("height", tokens.next())?;
    let cells = width
        .checked_mul(height)
        .ok_or_else(|| MapError::InvalidDimension {
            name: "height",
            token: height.to_string(),
        })?;

    // The header is untrusted: size the grid by the tokens actually present.
    let body: Vec<&str> = tokens.collect();
    let present = cells.min(body.len());
    let indices = body[..present]
        .iter()
        .enumerate()
        .map(|(position, token)| parse_index(position, token))
        .collect::<Result<Vec<_>, _>>()?;
    if indices.len() < cells {
        return Err(MapError::TruncatedIndices {
            expected: cells,
            found: indices.len(),
        });
    }

    let mut rest = body[present..].iter().copied().peekable();

    // One integer past the grid is a trailing marker, not a tag.
    if let Some(marker) = rest.next_if(|t| t.parse::<u32>().is_ok()) {
        log::debug!("Dropping trailing index token '{marker}' past {cells} cells");
    }

    let tags: Vec<String> = rest.map(str::to_owned).collect();

    if tags.len() != cells {
        log::debug!(
            "Map has {} tags for {} cells; cells without a tag are not drawn",
            tags.len(),
            cells
        );
    }

    let unknown: BTreeSet<&str> = tags
        .iter()
        .map(String::as_str)
        .filter(|t| TileSource::from_tag(t).is_none())
        .collect();
    for tag in unknown {
        log::warn!("Unknown tile tag '{tag}'; cells with it are not drawn");
    }

    Ok(TileMap {
        width,
        height,
        indices,
        tags,
    })
}

/// Read and decode a map file.
pub fn decode_map_file(path: impl AsRef<Path>) -> Result<TileMap, MapError> {
    let p = path.as_ref();
    let txt = std::fs::read_to_string(p).map_err(|source| MapError::Io {
        path: p.to_path_buf(),
        source,
    })?;
    let map = decode_map_str(&txt)?;
    log::info!(
        "Loaded map {} ({}x{}, {} tags)",
        p.display(),
        map.width,
        map.height,
        map.tags.len()
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock went backwards")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("meadow_map_{nanos}"));
        fs::create_dir_all(&dir).expect("failed to create temp dir");
        dir
    }

    #[test]
    fn decodes_square_map() {
        let map = decode_map_str("2 2 0 1 2 3 g g f g").expect("decode");
        assert_eq!(map.width(), 2);
        assert_eq!(map.height(), 2);
        assert_eq!(map.indices(), &[0, 1, 2, 3]);
        assert_eq!(map.tags(), &["g", "g", "f", "g"]);
    }

    #[test]
    fn line_breaks_are_separators() {
        let map = decode_map_str("2 2\r\n0 1\r\n2 3\ng g\nf g\n").expect("decode");
        assert_eq!(map.indices(), &[0, 1, 2, 3]);
        assert_eq!(map.tags(), &["g", "g", "f", "g"]);
    }

    #[test]
    fn drops_single_trailing_marker() {
        let map = decode_map_str("2 2 0 1 2 3 9 g g f g").expect("decode");
        assert_eq!(map.indices(), &[0, 1, 2, 3]);
        assert_eq!(map.tags(), &["g", "g", "f", "g"]);
    }

    #[test]
    fn second_trailing_integer_becomes_a_tag() {
        let map = decode_map_str("2 2 0 1 2 3 9 8 g g f").expect("decode");
        assert_eq!(map.indices(), &[0, 1, 2, 3]);
        assert_eq!(map.tags(), &["8", "g", "g", "f"]);
        assert_eq!(map.source_at(0), None);
    }

    #[test]
    fn extra_tags_are_kept_but_unused() {
        let map = decode_map_str("1 2 1 1 g f g q").expect("decode");
        assert_eq!(map.indices(), &[1, 1]);
        assert_eq!(map.tags().len(), 4);
        assert_eq!(map.occupied().count(), 2);
        assert_eq!(map.source_at(1), Some(TileSource::Fence));
    }

    #[test]
    fn huge_header_with_short_body_is_truncated() {
        assert!(matches!(
            decode_map_str("1000 1000 1 2 3"),
            Err(MapError::TruncatedIndices {
                expected: 1_000_000,
                found: 3
            })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn u32_max_dimensions_do_not_allocate_the_grid() {
        assert!(matches!(
            decode_map_str("4294967295 4294967295 1"),
            Err(MapError::TruncatedIndices { found: 1, .. })
        ));
    }

    #[test]
    fn overflowing_cell_count_is_rejected() {
        let side = usize::MAX.to_string();
        assert!(matches!(
            decode_map_str(&format!("{side} {side} 1")),
            Err(MapError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(decode_map_str(""), Err(MapError::Empty)));
        assert!(matches!(decode_map_str(" \n\r\n "), Err(MapError::Empty)));
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            decode_map_str("0 2"),
            Err(MapError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            decode_map_str("2 -1"),
            Err(MapError::InvalidDimension { name: "height", .. })
        ));
        assert!(matches!(
            decode_map_str("x 2 1 1 1 1"),
            Err(MapError::InvalidDimension { name: "width", .. })
        ));
        assert!(matches!(
            decode_map_str("3"),
            Err(MapError::InvalidDimension { name: "height", .. })
        ));
    }

    #[test]
    fn rejects_non_integer_index() {
        let err = decode_map_str("2 1 1 z g g").unwrap_err();
        match err {
            MapError::InvalidTileIndex { position, token } => {
                assert_eq!(position, 1);
                assert_eq!(token, "z");
            }
            other => panic!("expected InvalidTileIndex, got {other:?}"),
        }
    }

    #[test]
    fn rejects_truncated_grid() {
        assert!(matches!(
            decode_map_str("2 2 1 1 1"),
            Err(MapError::TruncatedIndices {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn keeps_short_tag_list() {
        let map = decode_map_str("2 1 5 6 g").expect("decode");
        assert_eq!(map.indices(), &[5, 6]);
        assert_eq!(map.tags(), &["g"]);
        assert_eq!(map.source_at(1), None);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = temp_dir().join("missing.map");
        assert!(matches!(
            decode_map_file(&path),
            Err(MapError::Io { path: p, .. }) if p == path
        ));
    }

    #[test]
    fn loads_from_file() {
        let path = temp_dir().join("one.map");
        fs::write(&path, "3 1\n1 0 2\ng g f\n").expect("write map");
        let map = decode_map_file(&path).expect("decode");
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 1);
        assert_eq!(map.occupied().collect::<Vec<_>>(), vec![(0, 1), (2, 2)]);
    }
}
