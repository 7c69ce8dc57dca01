//! Trellis CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(about = "Source structure and data-flow graph visualization", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a module and print its graph and layout as JSON
    Analyze {
        /// Path to the Python source file
        file: PathBuf,

        /// Layout seed (fixed seed => reproducible positions)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Layout simulation steps
        #[arg(long, default_value = "100")]
        iterations: usize,

        /// Pretty-print the JSON document
        #[arg(short, long)]
        pretty: bool,
    },
    /// Print rule-of-thumb suggestions for a module
    Hints {
        /// Path to the Python source file
        file: PathBuf,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("trellis={}", log_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            seed,
            iterations,
            pretty,
        } => commands::analyze(file, seed, iterations, pretty),
        Commands::Hints { file } => commands::hints(file),
        Commands::Version => {
            println!("Trellis v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
