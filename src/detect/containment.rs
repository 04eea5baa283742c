//! Containment and duplicate suppression for accepted records.

use crate::core::record::RepeatRecord;

/// Insert a record unless an existing same-strand record makes it redundant.
///
/// A candidate is rejected when an accepted record on the same strand either
/// carries the identical literal sequence, or is strictly longer and its
/// reference positions are a superset of the candidate's. Returns whether
/// the record was inserted.
pub fn try_insert(results: &mut Vec<RepeatRecord>, record: RepeatRecord) -> bool {
    for existing in results.iter() {
        if existing.strand != record.strand {
            continue;
        }
        if existing.sequence == record.sequence {
            return false;
        }
        if existing.length > record.length
            && record
                .ref_positions
                .iter()
                .all(|p| existing.ref_positions.contains(p))
        {
            return false;
        }
    }

    results.push(record);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Strand;

    fn record(sequence: &str, ref_positions: Vec<usize>, strand: Strand) -> RepeatRecord {
        RepeatRecord {
            sequence: sequence.to_string(),
            length: sequence.len(),
            ref_positions,
            query_positions: vec![0, 10],
            strand,
            repeat_count: 1,
        }
    }

    #[test]
    fn test_inserts_into_empty_list() {
        let mut results = Vec::new();
        assert!(try_insert(&mut results, record("ACGT", vec![2], Strand::Forward)));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_literal_same_strand() {
        let mut results = Vec::new();
        assert!(try_insert(&mut results, record("ACGT", vec![2], Strand::Forward)));
        assert!(!try_insert(&mut results, record("ACGT", vec![7], Strand::Forward)));
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_accepts_duplicate_literal_on_other_strand() {
        let mut results = Vec::new();
        assert!(try_insert(&mut results, record("ACGT", vec![2], Strand::Forward)));
        assert!(try_insert(
            &mut results,
            record("ACGT", vec![2], Strand::ReverseComplement)
        ));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_rejects_shorter_match_covered_by_longer() {
        let mut results = Vec::new();
        assert!(try_insert(
            &mut results,
            record("ACGTAC", vec![3], Strand::Forward)
        ));
        assert!(!try_insert(&mut results, record("CGTA", vec![3], Strand::Forward)));
    }

    #[test]
    fn test_accepts_shorter_match_at_other_positions() {
        let mut results = Vec::new();
        assert!(try_insert(
            &mut results,
            record("ACGTAC", vec![3], Strand::Forward)
        ));
        assert!(try_insert(&mut results, record("CGTA", vec![9], Strand::Forward)));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_equal_length_never_contains() {
        let mut results = Vec::new();
        assert!(try_insert(&mut results, record("ACGT", vec![3], Strand::Forward)));
        assert!(try_insert(&mut results, record("TGCA", vec![3], Strand::Forward)));
        assert_eq!(results.len(), 2);
    }
}
