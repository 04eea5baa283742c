//! Command-line interface for repeat-solver.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **find**: Detect reference-unique substrings repeated in a query
//! - **revcomp**: Print the reverse complement of a sequence
//!
//! ## Usage
//!
//! ```text
//! # Detect repeats from a paired ref:/query: text file
//! repeat-solver find sequences.txt
//!
//! # Read the pair from stdin
//! cat sequences.txt | repeat-solver find -
//!
//! # Two FASTA inputs, parallel strand passes, JSON output
//! repeat-solver find --reference ref.fa --query sample.fa --parallel --format json
//!
//! # Reverse-complement a sequence
//! repeat-solver revcomp ACGTTG
//! ```

use clap::{Parser, Subcommand};

pub mod find;
pub mod revcomp;

#[derive(Parser)]
#[command(name = "repeat-solver")]
#[command(version)]
#[command(about = "Detect DNA substrings that are single-copy in a reference but amplified in a query")]
#[command(
    long_about = "repeat-solver scans a reference/query sequence pair over a range of window lengths\nand reports every substring that occurs exactly once in the reference but two or more\ntimes in the query, on the forward strand or the reverse-complement strand.\n\nCandidates are found with a rolling hash, verified literally, de-duplicated, and\nreturned sorted by matched length."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect repeats in a reference/query sequence pair
    Find(find::FindArgs),

    /// Print the reverse complement of a sequence
    Revcomp(revcomp::RevcompArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
