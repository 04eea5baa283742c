//! Repeat detection engine.
//!
//! Finds substrings that occur exactly once in a *reference* sequence but at
//! least twice in a *query* sequence, on the forward strand or on the
//! reverse-complement strand, over a configurable range of window lengths.
//!
//! The pipeline is: per-length rolling-hash indexes for both sequences
//! ([`index`]), a cross-referencing detector with literal collision
//! verification and an exact reference-uniqueness check ([`engine`]), and a
//! containment/dedup filter over the growing result list ([`containment`]).
//!
//! ## Example
//!
//! ```rust
//! use repeat_solver::detect::{RepeatFinder, SearchConfig};
//!
//! let finder = RepeatFinder::with_config(SearchConfig {
//!     min_length: 6,
//!     max_length: Some(6),
//!     ..SearchConfig::default()
//! });
//!
//! let records = finder
//!     .find_repeats(b"ACGTAC", b"ACGTACTTACGTAC")
//!     .unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sequence, "ACGTAC");
//! assert_eq!(records[0].repeat_count, 1);
//! ```

use thiserror::Error;

pub mod containment;
pub mod engine;
pub mod hashing;
pub mod index;

pub use engine::{RepeatFinder, SearchConfig};
pub use hashing::HashParams;
pub use index::LengthIndex;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("invalid symbol '{symbol}' at position {position}: expected one of A, C, G, T")]
    InvalidSymbol { symbol: char, position: usize },
}

/// Check that every symbol of a sequence is hashable.
///
/// Detection fails fast on the first symbol outside `ACGT` rather than
/// mapping it to an arbitrary value and corrupting hash buckets.
///
/// # Errors
///
/// Returns `DetectError::InvalidSymbol` with the offending symbol and its
/// zero-based position.
pub fn validate_symbols(sequence: &[u8]) -> Result<(), DetectError> {
    match sequence
        .iter()
        .position(|&s| hashing::symbol_value(s).is_none())
    {
        Some(position) => Err(DetectError::InvalidSymbol {
            symbol: sequence[position] as char,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_symbols_accepts_acgt() {
        assert!(validate_symbols(b"ACGTACGT").is_ok());
        assert!(validate_symbols(b"").is_ok());
    }

    #[test]
    fn test_validate_symbols_reports_first_offender() {
        let err = validate_symbols(b"ACGNTN").unwrap_err();
        assert_eq!(
            err,
            DetectError::InvalidSymbol {
                symbol: 'N',
                position: 3
            }
        );
    }

    #[test]
    fn test_validate_symbols_rejects_lowercase() {
        // Normalization to uppercase is the caller's job
        assert!(validate_symbols(b"acgt").is_err());
    }
}
