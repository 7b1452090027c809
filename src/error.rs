use std::path::PathBuf;
use std::{error, fmt, io};

/// Error type for map decoding and game configuration
#[derive(Debug)]
pub enum MapError {
    /// File I/O error, with the path that failed
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// The map text contained no tokens at all
    Empty,
    /// Width or height is missing, not a positive integer, or zero
    InvalidDimension {
        /// `"width"` or `"height"`
        name: &'static str,
        /// Offending token (empty when missing)
        token: String,
    },
    /// A token in index position is not a non-negative integer
    InvalidTileIndex {
        /// Zero-based cell position of the token
        position: usize,
        /// Offending token
        token: String,
    },
    /// Fewer index tokens than `width * height`
    TruncatedIndices {
        /// `width * height`
        expected: usize,
        /// Index tokens actually present
        found: usize,
    },
    /// Configuration file exists but is not valid JSON for [`crate::GameConfig`]
    Config {
        /// Config file path
        path: PathBuf,
        /// JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            MapError::Empty => write!(f, "Map file is empty"),
            MapError::InvalidDimension { name, token } => {
                write!(f, "Invalid map {name}: '{token}' is not a positive integer")
            }
            MapError::InvalidTileIndex { position, token } => write!(
                f,
                "Invalid tile index '{token}' at cell {position}: expected a non-negative integer"
            ),
            MapError::TruncatedIndices { expected, found } => write!(
                f,
                "Map declares {expected} cells but only {found} tile indices were found"
            ),
            MapError::Config { path, source } => {
                write!(f, "Failed to parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl error::Error for MapError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            MapError::Io { source, .. } => Some(source),
            MapError::Config { source, .. } => Some(source),
            _ => None,
        }
    }
}
