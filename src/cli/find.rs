use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::record::RepeatRecord;
use crate::detect::{RepeatFinder, SearchConfig};
use crate::parsing::{self, SequencePair};

#[derive(Args)]
pub struct FindArgs {
    /// Paired-sequence text file with 'ref:' and 'query:' markers.
    /// Use '-' for stdin. Omit when --reference and --query are given.
    pub input: Option<PathBuf>,

    /// Reference sequence file (FASTA, first record)
    #[arg(long, requires = "query", conflicts_with = "input")]
    pub reference: Option<PathBuf>,

    /// Query sequence file (FASTA, first record)
    #[arg(long, requires = "reference", conflicts_with = "input")]
    pub query: Option<PathBuf>,

    /// Smallest window length to scan
    #[arg(long, default_value = "3")]
    pub min_length: usize,

    /// Largest window length to scan (defaults to the shorter sequence)
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Run the forward and reverse-complement passes in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Number of records to print (all by default)
    #[arg(short = 'n', long)]
    pub max_records: Option<usize>,
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or contains symbols outside
/// `ACGT`.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let pair = load_sequences(&args)?;

    if verbose {
        eprintln!(
            "Reference length: {}, query length: {}",
            pair.reference.len(),
            pair.query.len()
        );
    }

    let finder = RepeatFinder::with_config(SearchConfig {
        min_length: args.min_length,
        max_length: args.max_length,
        parallel: args.parallel,
        ..SearchConfig::default()
    });
    let records = finder.find_repeats(&pair.reference, &pair.query)?;

    if records.is_empty() {
        eprintln!("No repeats found.");
        return Ok(());
    }

    let shown = match args.max_records {
        Some(limit) => &records[..limit.min(records.len())],
        None => &records[..],
    };

    match format {
        OutputFormat::Text => print_text_results(shown, records.len()),
        OutputFormat::Json => print_json_results(shown)?,
        OutputFormat::Tsv => print_tsv_results(shown),
    }

    Ok(())
}

fn load_sequences(args: &FindArgs) -> anyhow::Result<SequencePair> {
    use std::io::Read;

    if let (Some(reference), Some(query)) = (&args.reference, &args.query) {
        return Ok(SequencePair {
            reference: parsing::fasta::read_first_sequence(reference)?,
            query: parsing::fasta::read_first_sequence(query)?,
        });
    }

    let input = args
        .input
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("provide a pair file or --reference and --query"))?;

    // Handle stdin
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(parsing::seqfile::parse_pair_text(&buffer)?);
    }

    if parsing::fasta::is_fasta_file(input) {
        // A single FASTA pair file: first record is the reference, second
        // the query
        let mut sequences = parsing::fasta::read_sequences(input)?;
        if sequences.len() < 2 {
            anyhow::bail!("FASTA pair input needs two records (reference, query)");
        }
        let query = sequences.swap_remove(1).1;
        let reference = sequences.swap_remove(0).1;
        return Ok(SequencePair { reference, query });
    }

    Ok(parsing::seqfile::parse_pair_file(input)?)
}

fn print_text_results(records: &[RepeatRecord], total: usize) {
    println!("Found {total} repeat(s):");
    for (i, record) in records.iter().enumerate() {
        println!(
            "\n#{} {} (length {})",
            i + 1,
            record.sequence,
            record.length
        );
        println!("   Strand: {}", record.strand);
        println!("   Reference position: {}", format_positions(&record.ref_positions));
        println!("   Query positions: {}", format_positions(&record.query_positions));
        println!("   Repeat count: {}", record.repeat_count);
    }
    if records.len() < total {
        println!("\n({} more not shown)", total - records.len());
    }
}

fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_json_results(records: &[RepeatRecord]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

fn print_tsv_results(records: &[RepeatRecord]) {
    println!("rank\tsequence\tlength\tstrand\tref_positions\tquery_positions\trepeat_count");
    for (i, record) in records.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            record.sequence,
            record.length,
            record.strand,
            format_positions(&record.ref_positions),
            format_positions(&record.query_positions),
            record.repeat_count,
        );
    }
}
