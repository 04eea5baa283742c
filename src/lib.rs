//! # repeat-solver
//!
//! A library for detecting query-side repeat expansions relative to a fixed
//! reference DNA sequence.
//!
//! Given a *reference* and a *query* sequence over `ACGT`, repeat-solver
//! reports every substring that occurs exactly once in the reference but two
//! or more times in the query, on the forward strand or the
//! reverse-complement strand, over a configurable range of window lengths.
//! The policy is deliberately asymmetric: it targets content that is
//! single-copy in the baseline but amplified in the query, not symmetric
//! repeat-finding.
//!
//! ## Features
//!
//! - **Rolling-hash indexing**: every window of a given length is hashed in
//!   O(1) from its predecessor
//! - **Collision-safe matching**: hash candidates are always verified
//!   literally, and reference uniqueness is decided by exact text scan
//! - **Both strands**: the query's reverse complement is searched as an
//!   independent pass, optionally in parallel
//! - **De-duplication**: duplicate literals and matches contained in longer
//!   accepted matches are suppressed
//!
//! ## Example
//!
//! ```rust
//! use repeat_solver::{RepeatFinder, SearchConfig, Strand};
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
//!
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].sequence, "ACGTAC");
//! assert_eq!(records[0].strand, Strand::Forward);
//! assert_eq!(records[0].repeat_count, 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Result records and sequence helpers
//! - [`detect`]: Hash engine, indexer, detector, and containment filter
//! - [`parsing`]: Parsers for paired text files and FASTA input
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod detect;
pub mod parsing;

// Re-export commonly used types for convenience
pub use core::record::{RepeatRecord, Strand};
pub use core::sequence::reverse_complement;
pub use detect::{DetectError, HashParams, RepeatFinder, SearchConfig};
