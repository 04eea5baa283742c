//! Parsers for sequence input files.
//!
//! This module provides parsers for:
//!
//! - **Paired text files**: the `ref:` / `query:` two-sequence format
//! - **FASTA files**: full sequences via noodles, gzip supported
//!
//! Parsed sequences are uppercased with whitespace stripped; symbol
//! validation itself happens in the detector.
//!
//! ## Example
//!
//! ```rust
//! use repeat_solver::parsing::seqfile::parse_pair_text;
//!
//! let pair = parse_pair_text("ref:\nACGT\nquery:\nACGTACGT\n").unwrap();
//! assert_eq!(pair.reference, b"ACGT");
//! ```

pub mod fasta;
pub mod seqfile;

pub use seqfile::{ParseError, SequencePair};
