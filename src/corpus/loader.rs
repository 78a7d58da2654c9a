//! Corpus loading and assembly
//!
//! Two on-disk shapes are understood:
//! - a JSON object keyed by word length, `{"3": ["cat", ...], "4": [...]}`
//! - a plain-text list with one word per line
//!
//! A directory of length-keyed source files can be merged into one corpus,
//! which is how large word collections are prepared before solving.

use super::{Corpus, WordSource};
use crate::core::Word;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error raised while reading corpus files
#[derive(Debug)]
pub enum CorpusError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidLengthKey { path: PathBuf, key: String },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "Failed to read {}: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "Invalid corpus JSON in {}: {source}", path.display())
            }
            Self::InvalidLengthKey { path, key } => {
                write!(f, "Key {key:?} in {} is not a word length", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidLengthKey { .. } => None,
        }
    }
}

fn read(path: &Path) -> Result<String, CorpusError> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert a string slice to Words, skipping invalid entries
///
/// # Examples
/// ```
/// use codeword_solver::corpus::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "can't", "Dog"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "dog");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse a plain-text list, one word per line
///
/// Blank lines and `#` comments are skipped, as are lines that are not a
/// single alphabetic word.
#[must_use]
pub fn parse_word_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Parse a length-keyed JSON corpus
///
/// Words whose length disagrees with their key are skipped with a warning.
///
/// # Errors
/// Returns `CorpusError` if the JSON is malformed or a key is not a number.
pub fn parse_length_map(content: &str, path: &Path) -> Result<Vec<Word>, CorpusError> {
    let map: BTreeMap<String, Vec<String>> =
        serde_json::from_str(content).map_err(|source| CorpusError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut words = Vec::new();
    for (key, entries) in map {
        let length: usize = key.trim().parse().map_err(|_| CorpusError::InvalidLengthKey {
            path: path.to_path_buf(),
            key: key.clone(),
        })?;

        for entry in entries {
            match Word::new(&entry) {
                Ok(word) if word.len() == length => words.push(word),
                Ok(word) => warn!(
                    "{}: '{word}' listed under length {length}, skipping",
                    path.display()
                ),
                Err(err) => debug!("{}: skipping {entry:?}: {err}", path.display()),
            }
        }
    }

    Ok(words)
}

/// Parse one source file of an assembly directory: a JSON array of words
fn parse_word_array(content: &str, path: &Path) -> Result<Vec<Word>, CorpusError> {
    let entries: Vec<String> = serde_json::from_str(content).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(entries.iter().filter_map(|e| Word::new(e).ok()).collect())
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a corpus file
///
/// `.json` files are read as length-keyed maps, anything else as a word list.
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read or is malformed JSON.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = read(path)?;

    let words = if is_json(path) {
        parse_length_map(&content, path)?
    } else {
        parse_word_lines(&content)
    };

    let corpus = Corpus::from_words(words);
    debug!(
        "Loaded {} words of {} lengths from {}",
        corpus.len(),
        corpus.lengths().len(),
        path.display()
    );
    Ok(corpus)
}

/// Merge every word source in a directory into one corpus
///
/// Files are visited in name order. `*.json` files hold an array of words;
/// `*.txt` files hold one word per line. Other files are ignored.
///
/// # Errors
///
/// Returns `CorpusError` if the directory or any source file cannot be read.
pub fn assemble_dir<P: AsRef<Path>>(dir: P) -> Result<Corpus, CorpusError> {
    let dir = dir.as_ref();
    let io_err = |source| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(io_err)?;
    paths.sort();

    let mut corpus = Corpus::new();
    for path in paths {
        let words = if is_json(&path) {
            parse_word_array(&read(&path)?, &path)?
        } else if path.extension().is_some_and(|ext| ext == "txt") {
            parse_word_lines(&read(&path)?)
        } else {
            debug!("Ignoring {}", path.display());
            continue;
        };

        let before = corpus.len();
        corpus.extend(words);
        debug!("{}: {} new words", path.display(), corpus.len() - before);
    }

    Ok(corpus)
}

/// Render a corpus as a length-keyed JSON object
///
/// # Errors
///
/// Returns an error only if serialization fails.
pub fn to_length_map_json(corpus: &Corpus) -> serde_json::Result<String> {
    let map: BTreeMap<usize, Vec<&str>> = corpus
        .lengths()
        .into_iter()
        .map(|length| (length, corpus.lookup(length).iter().map(Word::text).collect()))
        .collect();
    serde_json::to_string_pretty(&map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "codeword-corpus-{name}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "two words", "", "ox"]);
        assert_eq!(texts(&words), vec!["crane", "ox"]);
    }

    #[test]
    fn parse_word_lines_skips_comments_and_blanks() {
        let words = parse_word_lines("# header\ncat\n\n  Dog  \nnot a word\n");
        assert_eq!(texts(&words), vec!["cat", "dog"]);
    }

    #[test]
    fn parse_length_map_checks_lengths() {
        let json = r#"{"3": ["cat", "horse"], "5": ["horse"]}"#;
        let words = parse_length_map(json, Path::new("words.json")).unwrap();
        assert_eq!(texts(&words), vec!["cat", "horse"]);
    }

    #[test]
    fn parse_length_map_rejects_bad_key() {
        let err = parse_length_map(r#"{"three": ["cat"]}"#, Path::new("words.json")).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidLengthKey { .. }));
    }

    #[test]
    fn parse_length_map_rejects_malformed_json() {
        let err = parse_length_map("[1, 2", Path::new("words.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }

    #[test]
    fn assemble_merges_sources_in_name_order() {
        let dir = scratch_dir("assemble");
        fs::write(dir.join("3.json"), r#"["cat", "dog"]"#).unwrap();
        fs::write(dir.join("4.json"), r#"["bird", "fish"]"#).unwrap();
        fs::write(dir.join("extra.txt"), "dog\nfrog\n").unwrap();
        fs::write(dir.join("README.md"), "ignored").unwrap();

        let corpus = assemble_dir(&dir).unwrap();
        assert_eq!(corpus.len(), 5);
        assert_eq!(texts(corpus.lookup(3)), vec!["cat", "dog"]);
        assert_eq!(texts(corpus.lookup(4)), vec!["bird", "fish", "frog"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn length_map_json_loads_back() {
        let dir = scratch_dir("roundtrip");
        let corpus = Corpus::from_words(words_from_slice(&["sun", "moon", "star", "sky"]));
        let path = dir.join("words.json");
        fs::write(&path, to_length_map_json(&corpus).unwrap()).unwrap();

        let loaded = load_from_file(&path).unwrap();
        assert_eq!(texts(loaded.lookup(3)), vec!["sun", "sky"]);
        assert_eq!(texts(loaded.lookup(4)), vec!["moon", "star"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
