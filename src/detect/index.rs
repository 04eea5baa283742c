//! Length-bucketed hash index over a sequence's windows.
//!
//! For one (sequence, length) pair, maps each window hash to the ascending
//! list of window start positions. No literal verification happens here;
//! hash collisions are resolved later by the detector.

use std::collections::HashMap;

use super::hashing::{hash_window, roll_hash, HashParams};
use super::DetectError;

/// Hash value → window start positions, ascending.
pub type LengthIndex = HashMap<u64, Vec<usize>>;

/// Hash every window of `length` symbols, in position order.
///
/// The first window is hashed from scratch; every subsequent window rolls
/// from the previous one. Returns an empty vector when the sequence is
/// shorter than `length` or `length` is zero.
///
/// # Errors
///
/// Returns `DetectError::InvalidSymbol` for symbols outside `ACGT`, with
/// absolute positions.
pub fn window_hashes(
    sequence: &[u8],
    length: usize,
    params: &HashParams,
    powers: &[u64],
) -> Result<Vec<u64>, DetectError> {
    if length == 0 || sequence.len() < length {
        return Ok(Vec::new());
    }

    let mut hashes = Vec::with_capacity(sequence.len() - length + 1);
    let mut hash = hash_window(&sequence[..length], params)?;
    hashes.push(hash);

    for position in length..sequence.len() {
        hash = roll_hash(
            hash,
            sequence[position - length],
            sequence[position],
            length,
            position,
            params,
            powers,
        )?;
        hashes.push(hash);
    }

    Ok(hashes)
}

/// Bucket per-position window hashes into a [`LengthIndex`].
///
/// Positions land in each bucket in ascending order because the input is in
/// position order.
#[must_use]
pub fn index_from_hashes(hashes: &[u64]) -> LengthIndex {
    let mut index = LengthIndex::new();
    for (position, &hash) in hashes.iter().enumerate() {
        index.entry(hash).or_default().push(position);
    }
    index
}

/// Build the index for one sequence and window length.
///
/// # Errors
///
/// Returns `DetectError::InvalidSymbol` for symbols outside `ACGT`.
pub fn build_index(
    sequence: &[u8],
    length: usize,
    params: &HashParams,
    powers: &[u64],
) -> Result<LengthIndex, DetectError> {
    Ok(index_from_hashes(&window_hashes(
        sequence, length, params, powers,
    )?))
}
