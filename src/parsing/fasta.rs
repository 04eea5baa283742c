//! Parser for FASTA files using noodles.
//!
//! Reads full sequences for detection. Supports both uncompressed and
//! gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;

use crate::core::sequence::normalize;
use crate::parsing::seqfile::ParseError;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read every record of a FASTA file as (name, uppercase sequence).
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Fasta`
/// if parsing fails, or `ParseError::EmptyFasta` if no records are found.
pub fn read_sequences(path: &Path) -> Result<Vec<(String, Vec<u8>)>, ParseError> {
    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let decoder = GzDecoder::new(file);
        let mut reader = fasta::io::Reader::new(BufReader::new(decoder));
        read_from_reader(&mut reader)
    } else {
        let file = std::fs::File::open(path)?;
        let mut reader = fasta::io::Reader::new(BufReader::new(file));
        read_from_reader(&mut reader)
    }
}

/// Read the first record of a FASTA file as an uppercase sequence.
///
/// Detection takes one reference and one query sequence; multi-record files
/// are truncated to their first record.
///
/// # Errors
///
/// As [`read_sequences`].
pub fn read_first_sequence(path: &Path) -> Result<Vec<u8>, ParseError> {
    let mut sequences = read_sequences(path)?;
    let (name, sequence) = sequences.remove(0);
    if !sequences.is_empty() {
        tracing::warn!(
            first = %name,
            skipped = sequences.len(),
            "FASTA file has multiple records, using the first"
        );
    }
    Ok(sequence)
}

fn read_from_reader<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<(String, Vec<u8>)>, ParseError> {
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record =
            result.map_err(|e| ParseError::Fasta(format!("failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = normalize(record.sequence().as_ref());
        sequences.push((name, sequence));
    }

    if sequences.is_empty() {
        return Err(ParseError::EmptyFasta);
    }

    Ok(sequences)
}
