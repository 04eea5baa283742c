use serde::{Deserialize, Serialize};

/// Which orientation of the query a repeat was detected on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strand {
    /// Query as given
    Forward,
    /// Query transformed to its reverse complement
    ReverseComplement,
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::ReverseComplement => write!(f, "reverse-complement"),
        }
    }
}

/// A substring that is single-copy in the reference but occurs repeatedly in
/// the query.
///
/// Records are created by the detector, possibly rejected by the containment
/// filter, and never mutated after acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatRecord {
    /// The literal matched substring
    pub sequence: String,

    /// Start positions of the substring in the reference (exactly one under
    /// the current uniqueness policy)
    pub ref_positions: Vec<usize>,

    /// Start positions of verified matches in the query, ascending
    pub query_positions: Vec<usize>,

    /// Matched window length
    pub length: usize,

    /// Strand the match was found on
    pub strand: Strand,

    /// Number of query occurrences beyond the first
    pub repeat_count: usize,
}
