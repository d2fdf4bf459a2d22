mod commands;
mod preview;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stackcrop", about = "Crop stacked astro images to their common coverage area")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the common-area crop from a coverage image
    Detect(commands::detect::DetectArgs),
    /// Apply a saved rectangle or explicit margins to channel images
    Apply(commands::apply::ApplyArgs),
    /// Detect the crop and apply it to every channel image
    Run(commands::run::RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Run(args) => commands::run::run(args),
    }
}
