use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod detect;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("repeat_solver=debug,info")
    } else {
        EnvFilter::new("repeat_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Find(args) => {
            cli::find::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Revcomp(args) => {
            cli::revcomp::run(args)?;
        }
    }

    Ok(())
}
