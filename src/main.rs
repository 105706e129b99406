//! Main entry point for the upalyzer CLI application.
//!
//! Loads the update manifest, analyzes every listed archive, and prints
//! the usage report to stdout. Diagnostics go to stderr so redirected
//! reports stay clean.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use upalyzer::{analyze, load_manifest, render_html, render_text, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let manifest = load_manifest(&cli.manifest)?;
    let analysis = analyze(&manifest);

    let report = if cli.html {
        render_html(&analysis)
    } else {
        render_text(&analysis)
    };
    print!("{report}");

    Ok(())
}
