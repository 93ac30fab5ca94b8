//! Credential Scrubber CLI
//!
//! Strips hardcoded connection-string fallbacks from a source file

use anyhow::{Context, Result};
use clap::Parser;
use credential_scrubber::logging::init_logging;
use credential_scrubber::{ConfigLoadOptions, ConfigLoader, CredentialScrubber, ScrubOutcome};
use std::path::PathBuf;
use std::process;
use tracing::debug;

/// Replace `process.env.X || '<connection string>'` with `process.env.X`
#[derive(Parser)]
#[command(name = "credential-scrubber")]
#[command(version = "0.1.0")]
#[command(about = "Strip hardcoded connection-string fallbacks from a source file", long_about = None)]
struct Cli {
    /// YAML configuration file (target, env_var, schemes)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// File to rewrite (defaults to lib/db.ts)
    #[arg(short, long, value_name = "PATH")]
    target: Option<PathBuf>,

    /// Emit debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = ConfigLoader::load(ConfigLoadOptions {
        config_file: cli.config,
        target: cli.target,
    })
    .context("Failed to load configuration")?;

    let scrubber = CredentialScrubber::new(&config)?;

    match scrubber.run()? {
        ScrubOutcome::Skipped => debug!("nothing to scrub"),
        ScrubOutcome::Rewritten { replacements } => {
            debug!(replacements, target = %scrubber.target().display(), "target rewritten")
        }
    }

    Ok(())
}
