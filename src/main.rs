// ABOUTME: Main entry point for the smartcart-deck program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the SmartCart pitch deck (default)
    Build(BuildArgs),

    /// Print a text outline of an existing deck
    Inspect(InspectArgs),
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Path to the output PPTX file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct InspectArgs {
    /// Path to the PPTX file to read
    #[arg(short, long)]
    input: PathBuf,
}

fn build(args: &BuildArgs) -> anyhow::Result<()> {
    let config = smartcart_deck::Config::from_env().with_output(args.output.clone());
    let builder = smartcart_deck::DeckBuilder::new(config);
    let path = builder
        .build()
        .with_context(|| format!("Failed to build {:?}", builder.config().output_path))?;
    println!("{}", smartcart_deck::success_message(&path));
    Ok(())
}

fn inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let summary = smartcart_deck::DeckSummary::from_file(&args.input)
        .with_context(|| format!("Failed to read {:?}", args.input))?;
    print!("{}", summary.outline());
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match &cli.command {
        Some(Commands::Build(args)) => build(args),
        Some(Commands::Inspect(args)) => inspect(args),
        None => build(&BuildArgs::default()),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
