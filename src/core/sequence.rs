//! Byte-level sequence helpers.
//!
//! Sequences are plain byte slices over the `ACGT` alphabet. Symbols outside
//! the alphabet are tolerated here (complementation passes them through
//! unchanged); the detector rejects them at its boundary instead.

/// Complement a single symbol: A↔T, C↔G, anything else unchanged.
#[must_use]
pub fn complement(symbol: u8) -> u8 {
    match symbol {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// Produce the reverse complement of a sequence.
///
/// Reads the input back to front, complementing each symbol. Applying it
/// twice returns the original sequence.
#[must_use]
pub fn reverse_complement(sequence: &[u8]) -> Vec<u8> {
    sequence.iter().rev().map(|&s| complement(s)).collect()
}

/// Uppercase a raw sequence, dropping ASCII whitespace.
///
/// Input files commonly wrap sequences across lines and mix case; the
/// detector expects a contiguous uppercase byte string.
#[must_use]
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| !b.is_ascii_whitespace())
        .map(u8::to_ascii_uppercase)
        .collect()
}
