use std::collections::HashSet;

use tracing::debug;

use crate::core::record::{RepeatRecord, Strand};
use crate::core::sequence::reverse_complement;

use super::containment;
use super::hashing::{precompute_powers, HashParams};
use super::index::{build_index, index_from_hashes, window_hashes};
use super::{validate_symbols, DetectError};

/// Record count past which the length loop may terminate early
pub const EARLY_EXIT_RECORDS: usize = 100;

/// The early exit only applies within this many lengths above `min_length`
pub const EARLY_EXIT_LENGTH_WINDOW: usize = 5;

/// Minimum resolved `max_length` for the parallel strand passes to engage
pub const PARALLEL_LENGTH_THRESHOLD: usize = 20;

/// Configuration for a repeat search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Smallest window length to scan (length 1 is always skipped)
    pub min_length: usize,

    /// Largest window length to scan; defaults to the shorter sequence
    /// length and is clamped to both sequence lengths
    pub max_length: Option<usize>,

    /// Run the forward and reverse-complement passes as two parallel tasks
    pub parallel: bool,

    /// Polynomial hash parameters
    pub hash: HashParams,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: None,
            parallel: false,
            hash: HashParams::default(),
        }
    }
}

/// The repeat detection engine.
///
/// Owns a [`SearchConfig`] and exposes [`find_repeats`](Self::find_repeats),
/// which cross-references per-length hash indexes of the reference and the
/// query (forward and reverse-complement) and returns the accepted records
/// sorted by length, descending.
#[derive(Debug, Default)]
pub struct RepeatFinder {
    config: SearchConfig,
}

impl RepeatFinder {
    /// Create a finder with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a finder with a custom configuration
    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Find substrings that are single-copy in `reference` but occur at
    /// least twice in `query`, on either strand.
    ///
    /// An empty length range after clamping yields an empty list, not an
    /// error. Results are sorted by matched length descending; ties keep
    /// discovery order.
    ///
    /// # Errors
    ///
    /// Returns `DetectError::InvalidSymbol` if either sequence contains a
    /// symbol outside `ACGT`.
    pub fn find_repeats(
        &self,
        reference: &[u8],
        query: &[u8],
    ) -> Result<Vec<RepeatRecord>, DetectError> {
        validate_symbols(reference)?;
        validate_symbols(query)?;

        let min_length = self.config.min_length;
        let max_length = self
            .config
            .max_length
            .unwrap_or(usize::MAX)
            .min(reference.len())
            .min(query.len());
        if min_length > max_length {
            return Ok(Vec::new());
        }

        let query_rc = reverse_complement(query);
        let powers = precompute_powers(self.config.hash.base, max_length, self.config.hash.modulus);

        let mut records = if self.config.parallel && max_length > PARALLEL_LENGTH_THRESHOLD {
            debug!(min_length, max_length, "running strand passes in parallel");
            let (forward, reverse) = rayon::join(
                || self.scan_strand(reference, query, Strand::Forward, max_length, &powers),
                || {
                    self.scan_strand(
                        reference,
                        &query_rc,
                        Strand::ReverseComplement,
                        max_length,
                        &powers,
                    )
                },
            );
            let mut records = forward?;
            records.extend(reverse?);
            records
        } else {
            self.scan_sequential(reference, query, &query_rc, max_length, &powers)?
        };

        // stable sort keeps discovery order among equal lengths
        records.sort_by(|a, b| b.length.cmp(&a.length));
        debug!(records = records.len(), "repeat search finished");
        Ok(records)
    }

    /// Both strands interleaved per length, sharing one emitted-literal
    /// accumulator and one result list.
    fn scan_sequential(
        &self,
        reference: &[u8],
        query: &[u8],
        query_rc: &[u8],
        max_length: usize,
        powers: &[u64],
    ) -> Result<Vec<RepeatRecord>, DetectError> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for length in self.config.min_length..=max_length {
            if length == 1 {
                continue;
            }
            if early_exit(records.len(), length, self.config.min_length) {
                debug!(length, records = records.len(), "early exit");
                break;
            }
            self.scan_length(
                reference,
                query,
                Strand::Forward,
                length,
                powers,
                &mut seen,
                &mut records,
            )?;
            self.scan_length(
                reference,
                query_rc,
                Strand::ReverseComplement,
                length,
                powers,
                &mut seen,
                &mut records,
            )?;
        }

        Ok(records)
    }

    /// One strand across the whole length range, with a private accumulator
    /// and result list. Used by the parallel mode.
    fn scan_strand(
        &self,
        reference: &[u8],
        query: &[u8],
        strand: Strand,
        max_length: usize,
        powers: &[u64],
    ) -> Result<Vec<RepeatRecord>, DetectError> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for length in self.config.min_length..=max_length {
            if length == 1 {
                continue;
            }
            if early_exit(records.len(), length, self.config.min_length) {
                debug!(length, %strand, records = records.len(), "early exit");
                break;
            }
            self.scan_length(reference, query, strand, length, powers, &mut seen, &mut records)?;
        }

        Ok(records)
    }

    /// Detect repeats of one fixed window length on one strand.
    ///
    /// Walks the reference windows in position order, verifying every
    /// hash-matched query candidate literally and counting reference
    /// occurrences exactly before accepting a record.
    #[allow(clippy::too_many_arguments)]
    fn scan_length(
        &self,
        reference: &[u8],
        query: &[u8],
        strand: Strand,
        length: usize,
        powers: &[u64],
        seen: &mut HashSet<Vec<u8>>,
        records: &mut Vec<RepeatRecord>,
    ) -> Result<(), DetectError> {
        if reference.len() < length || query.len() < length {
            return Ok(());
        }

        let params = &self.config.hash;
        let ref_hashes = window_hashes(reference, length, params, powers)?;
        let ref_index = index_from_hashes(&ref_hashes);
        let query_index = build_index(query, length, params, powers)?;

        for (position, hash) in ref_hashes.iter().enumerate() {
            let Some(candidates) = query_index.get(hash) else {
                continue;
            };
            let literal = &reference[position..position + length];
            if seen.contains(literal) {
                continue;
            }

            // hash equality is not literal equality
            let query_positions: Vec<usize> = candidates
                .iter()
                .copied()
                .filter(|&q| &query[q..q + length] == literal)
                .collect();
            if query_positions.len() < 2 {
                continue;
            }

            // A singleton reference bucket proves uniqueness: every repeat of
            // the literal hashes to the same value. Larger buckets may hold
            // collisions, so fall back to the exact literal scan.
            let ref_positions = if ref_index[hash].len() == 1 {
                vec![position]
            } else {
                literal_occurrences(reference, literal)
            };
            if ref_positions.len() != 1 {
                continue;
            }

            let repeat_count = query_positions.len() - 1;
            let record = RepeatRecord {
                sequence: String::from_utf8_lossy(literal).into_owned(),
                ref_positions,
                query_positions,
                length,
                strand,
                repeat_count,
            };
            if containment::try_insert(records, record) {
                seen.insert(literal.to_vec());
            }
        }

        Ok(())
    }
}

/// Literal early-exit heuristic: stop once the result list is large and the
/// scan is still within the first few lengths above the minimum.
fn early_exit(record_count: usize, length: usize, min_length: usize) -> bool {
    record_count > EARLY_EXIT_RECORDS && length < min_length + EARLY_EXIT_LENGTH_WINDOW
}

/// Every start position where `needle` occurs in `haystack`, overlapping
/// occurrences included.
fn literal_occurrences(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(position, _)| position)
        .collect()
}
