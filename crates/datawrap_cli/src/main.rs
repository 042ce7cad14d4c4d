//! Datawrap CLI
//!
//! Runs the decorator demo: a named endpoint wrapped in encryption and
//! compression layers, one write followed by one read.

use clap::Parser;
use datawrap_storage::demo;
use datawrap_storage::DemoConfig;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

/// Stacked data source demo.
#[derive(Parser)]
#[command(name = "datawrap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Exit immediately instead of waiting for enter
    #[arg(long)]
    no_wait: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let report = demo::run(&DemoConfig::default())?;
    for line in report.lines() {
        println!("{line}");
    }

    if !cli.no_wait {
        wait_for_enter()?;
    }

    Ok(())
}

fn wait_for_enter() -> io::Result<()> {
    print!("Press enter to exit...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
