//! hashglob: Fingerprint workspace files matched by glob patterns

use clap::{Parser, Subcommand};
use hashglob_cli::commands::{self, HashArgs};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "hashglob")]
#[command(author, version, about = "Workspace-bounded file fingerprinting", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 digest of the matched files
    Hash(HashArgs),

    /// List matched paths and whether each would be hashed
    List(HashArgs),
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Hash(args) => commands::hash::run(&args)?,
        Commands::List(args) => commands::list::run(&args)?,
    }

    Ok(())
}
