//! Core data types for repeat detection.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`RepeatRecord`]: A detected repeat with its literal sequence and positions
//! - [`Strand`]: Which orientation of the query the match was found on
//! - [`sequence`]: Byte-level helpers (reverse complement, normalization)
//!
//! Sequences are represented as byte slices over the `ACGT` alphabet.
//! Positions are zero-based start offsets.

pub mod record;
pub mod sequence;

pub use record::{RepeatRecord, Strand};
pub use sequence::{complement, reverse_complement};
