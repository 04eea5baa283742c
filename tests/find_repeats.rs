//! End-to-end detection scenarios through the public API.

use repeat_solver::{DetectError, RepeatFinder, SearchConfig, Strand};

fn find_with(
    reference: &[u8],
    query: &[u8],
    min_length: usize,
    max_length: Option<usize>,
) -> Vec<repeat_solver::RepeatRecord> {
    RepeatFinder::with_config(SearchConfig {
        min_length,
        max_length,
        ..SearchConfig::default()
    })
    .find_repeats(reference, query)
    .unwrap()
}

fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
    if haystack.len() < needle.len() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

#[test]
fn multi_copy_reference_substring_is_never_reported() {
    // ACGT occurs twice in the reference, so it fails the single-copy rule
    // even though the query amplifies it
    let records = find_with(b"ACGTACGT", b"ACGTACGTACGT", 4, Some(4));
    assert!(records.iter().all(|r| r.sequence != "ACGT"));
}

#[test]
fn absent_or_unamplified_substrings_are_excluded() {
    let records = find_with(b"AAACCCTTT", b"AAACCCTTTGGGGGG", 3, Some(3));
    // GGG is absent from the reference; TTT occurs only once in the query
    assert!(records.iter().all(|r| r.sequence != "GGG"));
    assert!(records
        .iter()
        .all(|r| !(r.sequence == "TTT" && r.strand == Strand::Forward)));
}

#[test]
fn unique_reference_substring_amplified_in_query() {
    // "ACGTAC" occurs once in the reference and at two disjoint query
    // positions, nowhere else
    let records = find_with(b"ACGTAC", b"ACGTACTTACGTAC", 6, Some(6));
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.sequence, "ACGTAC");
    assert_eq!(record.length, 6);
    assert_eq!(record.strand, Strand::Forward);
    assert_eq!(record.repeat_count, 1);
    assert_eq!(record.ref_positions, vec![0]);
    assert_eq!(record.query_positions, vec![0, 8]);
}

#[test]
fn empty_inputs_are_not_errors() {
    assert!(find_with(b"", b"", 3, None).is_empty());
    assert!(find_with(b"ACGT", b"", 3, None).is_empty());
    assert!(find_with(b"", b"ACGTACGT", 3, None).is_empty());
}

#[test]
fn min_length_above_max_length_yields_empty_list() {
    assert!(find_with(b"ACGTACGT", b"ACGTACGT", 20, Some(4)).is_empty());
}

#[test]
fn max_length_is_clamped_to_sequence_lengths() {
    // max_length far beyond both sequences must not panic or misbehave
    let records = find_with(b"ACGTAC", b"ACGTACTTACGTAC", 6, Some(1000));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].sequence, "ACGTAC");
}

#[test]
fn invalid_symbols_are_rejected_at_the_boundary() {
    let finder = RepeatFinder::new();
    let err = finder.find_repeats(b"ACGTN", b"ACGT").unwrap_err();
    assert_eq!(
        err,
        DetectError::InvalidSymbol {
            symbol: 'N',
            position: 4
        }
    );

    let err = finder.find_repeats(b"ACGT", b"ACxGT").unwrap_err();
    assert_eq!(
        err,
        DetectError::InvalidSymbol {
            symbol: 'x',
            position: 2
        }
    );
}

#[test]
fn reverse_complement_strand_is_searched() {
    // The query carries two copies of the reverse complement of a
    // reference-unique substring and no forward copy
    let reference = b"GGGTTTACACAC";
    let query = b"AAACCCTGTGAAACCC";
    let records = find_with(reference, query, 6, Some(6));
    let record = records
        .iter()
        .find(|r| r.sequence == "GGGTTT")
        .expect("expected a reverse-complement match");
    assert_eq!(record.strand, Strand::ReverseComplement);
    assert_eq!(record.query_positions.len(), 2);
}

#[test]
fn results_satisfy_the_acceptance_invariant() {
    let reference = b"ACGTTGCATTGACGTAAGGCCATG";
    let query = b"TTGACGTAAGGCCTTGACGTAAGGACGTTGCAGGCCATG";
    let records = find_with(reference, query, 3, None);
    assert!(!records.is_empty());

    let query_rc = repeat_solver::reverse_complement(query);
    for record in &records {
        let literal = record.sequence.as_bytes();
        let searched: &[u8] = match record.strand {
            Strand::Forward => query,
            Strand::ReverseComplement => &query_rc,
        };

        assert_eq!(
            count_occurrences(reference, literal),
            1,
            "{} occurs more than once in the reference",
            record.sequence
        );
        assert!(
            count_occurrences(searched, literal) >= 2,
            "{} not amplified in the query",
            record.sequence
        );
        assert!(record.repeat_count >= 1);
        assert_eq!(record.repeat_count, record.query_positions.len() - 1);
        assert!(record.length >= 3);
        assert_eq!(record.length, record.sequence.len());
        assert_eq!(record.ref_positions.len(), 1);
    }
}

#[test]
fn no_two_records_share_a_literal_on_one_strand() {
    let records = find_with(b"ACGTTGCATTGACGTAAGG", b"TTGACGTAAGGTTGACGTAAGGACGTTGCA", 2, None);
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            assert!(
                a.strand != b.strand || a.sequence != b.sequence,
                "duplicate literal {} on strand {}",
                a.sequence,
                a.strand
            );
        }
    }
}

#[test]
fn records_are_sorted_by_length_descending() {
    let records = find_with(b"ACGTTGCATTGACGTAAGG", b"TTGACGTAAGGTTGACGTAAGGACGTTGCA", 3, None);
    assert!(records.windows(2).all(|w| w[0].length >= w[1].length));
}

#[test]
fn parallel_and_sequential_agree_on_single_strand_input() {
    // A/C-only input keeps the reverse-complement pass empty, so the
    // sequential shared accumulator and the parallel private accumulators
    // see the same candidates
    let reference = b"AACCACACCAAACCCACCACAACACCCAAC";
    let query: Vec<u8> = [&reference[..], &reference[4..24], &reference[1..13]].concat();

    let run = |parallel| {
        RepeatFinder::with_config(SearchConfig {
            min_length: 3,
            parallel,
            ..SearchConfig::default()
        })
        .find_repeats(reference, &query)
        .unwrap()
    };

    let sequential = run(false);
    let parallel = run(true);
    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
}
