//! Parser for paired-sequence text files.
//!
//! The format is a plain text file with two markers:
//!
//! ```text
//! ref:
//! ACGTACGTTTGA
//! query:
//! ACGTACGTACGTTTGA
//! ```
//!
//! Everything between `ref:` and `query:` is the reference, everything after
//! `query:` is the query. Sequences may wrap across lines and mix case;
//! whitespace is stripped and symbols are uppercased.

use std::path::Path;

use thiserror::Error;

use crate::core::sequence::normalize;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing '{0}' marker in sequence file")]
    MissingMarker(&'static str),

    #[error("empty {0} sequence")]
    EmptySequence(&'static str),

    #[error("FASTA error: {0}")]
    Fasta(String),

    #[error("no sequences found in FASTA file")]
    EmptyFasta,
}

/// A reference/query pair ready for detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencePair {
    pub reference: Vec<u8>,
    pub query: Vec<u8>,
}

/// Parse paired-sequence text.
///
/// # Errors
///
/// Returns `ParseError::MissingMarker` if either marker is absent and
/// `ParseError::EmptySequence` if a marker has no sequence after it.
pub fn parse_pair_text(content: &str) -> Result<SequencePair, ParseError> {
    let ref_start = content
        .find("ref:")
        .ok_or(ParseError::MissingMarker("ref:"))?;
    let query_start = content[ref_start..]
        .find("query:")
        .map(|offset| ref_start + offset)
        .ok_or(ParseError::MissingMarker("query:"))?;

    let reference = normalize(content[ref_start + 4..query_start].as_bytes());
    let query = normalize(content[query_start + 6..].as_bytes());

    if reference.is_empty() {
        return Err(ParseError::EmptySequence("reference"));
    }
    if query.is_empty() {
        return Err(ParseError::EmptySequence("query"));
    }

    Ok(SequencePair { reference, query })
}

/// Parse a paired-sequence file from disk.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, otherwise as
/// [`parse_pair_text`].
pub fn parse_pair_file(path: &Path) -> Result<SequencePair, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_pair_text(&content)
}
