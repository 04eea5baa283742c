use clap::Args;

use crate::core::sequence::{normalize, reverse_complement};

#[derive(Args)]
pub struct RevcompArgs {
    /// Sequence to reverse-complement
    pub sequence: String,
}

/// Execute revcomp subcommand
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: RevcompArgs) -> anyhow::Result<()> {
    let sequence = normalize(args.sequence.as_bytes());
    let rc = reverse_complement(&sequence);
    println!("{}", String::from_utf8_lossy(&rc));
    Ok(())
}
