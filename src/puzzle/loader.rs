//! Puzzle definition loading
//!
//! Puzzles are stored as JSON:
//!
//! ```json
//! {"words": [[1, 2, 3], [3, 4]], "givens": {"1": "c"}}
//! ```

use crate::core::{StartingPuzzle, WordError};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised while reading or building puzzle definitions
#[derive(Debug)]
pub enum PuzzleError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json(serde_json::Error),
    InvalidWord { word: String, source: WordError },
    EmptyPhrase,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read puzzle {}: {source}", path.display())
            }
            Self::Json(source) => write!(f, "Invalid puzzle JSON: {source}"),
            Self::InvalidWord { word, source } => write!(f, "Cannot encode {word:?}: {source}"),
            Self::EmptyPhrase => write!(f, "Phrase contains no words"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(source) => Some(source),
            Self::InvalidWord { source, .. } => Some(source),
            Self::EmptyPhrase => None,
        }
    }
}

/// Parse a puzzle definition from JSON text
///
/// # Errors
/// Returns `PuzzleError::Json` if the text is not a valid puzzle.
///
/// # Examples
/// ```
/// use codeword_solver::puzzle::parse_puzzle;
///
/// let puzzle = parse_puzzle(r#"{"words": [[1, 2, 3]], "givens": {"2": "a"}}"#).unwrap();
/// assert_eq!(puzzle.words.len(), 1);
/// assert_eq!(puzzle.givens[&2], 'a');
/// ```
pub fn parse_puzzle(content: &str) -> Result<StartingPuzzle, PuzzleError> {
    serde_json::from_str(content).map_err(PuzzleError::Json)
}

/// Load a puzzle definition from a JSON file
///
/// # Errors
/// Returns `PuzzleError` if the file cannot be read or parsed.
pub fn load_puzzle<P: AsRef<Path>>(path: P) -> Result<StartingPuzzle, PuzzleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle(&content)
}

/// Render a puzzle definition as pretty JSON
///
/// # Errors
/// Returns `PuzzleError::Json` if serialization fails.
pub fn to_json(puzzle: &StartingPuzzle) -> Result<String, PuzzleError> {
    serde_json::to_string_pretty(puzzle).map_err(PuzzleError::Json)
}
