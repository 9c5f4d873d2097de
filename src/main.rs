use clap::Parser;
use slidewright::deck;
use std::path::PathBuf;
use tracing::{debug, trace};

/// Generate the Danyelza vs. Unituxin company-profile deck
#[derive(Parser)]
#[command(name = "gd2-deck", version, about, long_about = None)]
struct Cli {
    /// Output .pptx path (replaced if it exists)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    // stdout is reserved for the two result lines
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("gd2-deck started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(deck::DEFAULT_OUTPUT_PATH));

    let pres = deck::build_deck()?;
    pres.save(&output)?;

    println!("Presentation saved to: {}", output.display());
    println!("Total slides: {}", pres.slide_count());
    Ok(())
}
