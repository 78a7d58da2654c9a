//! Corpus assembly command
//!
//! Merges a directory of word sources into one length-keyed JSON corpus.

use crate::corpus::loader::{assemble_dir, to_length_map_json};
use crate::corpus::{Corpus, WordSource};
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of assembling a corpus
#[derive(Debug)]
pub struct AssembleResult {
    pub output: PathBuf,
    pub total_words: usize,
    /// `(length, word count)` pairs in ascending length order
    pub lengths: Vec<(usize, usize)>,
}

impl AssembleResult {
    fn from_corpus(corpus: &Corpus, output: PathBuf) -> Self {
        Self {
            output,
            total_words: corpus.len(),
            lengths: corpus
                .lengths()
                .into_iter()
                .map(|length| (length, corpus.lookup(length).len()))
                .collect(),
        }
    }
}

/// Assemble every source in `dir` and write the result to `output`
///
/// # Errors
///
/// Returns an error if the directory cannot be read, a source is malformed,
/// or the output file cannot be written.
pub fn assemble_corpus(dir: &Path, output: &Path) -> Result<AssembleResult> {
    let corpus = assemble_dir(dir)
        .with_context(|| format!("Failed to assemble corpus from {}", dir.display()))?;
    let json = to_length_map_json(&corpus).context("Failed to serialize corpus")?;
    fs::write(output, json).with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Wrote {} words from {} to {}",
        corpus.len(),
        dir.display(),
        output.display()
    );
    Ok(AssembleResult::from_corpus(&corpus, output.to_path_buf()))
}
