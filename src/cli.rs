use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "upalyzer")]
#[command(version)]
#[command(about = "Reports how much data in a set of update archives is obsoleted by newer ones", long_about = None)]
#[command(after_help = "Examples:\n  \
  upalyzer                       analyze archives listed in resources2.txt\n  \
  upalyzer updates/resources2.txt   use a different manifest\n  \
  upalyzer --html > report.html  produce the web-servable form")]
pub struct Cli {
    /// Update manifest listing archives and checksums, oldest first
    #[arg(value_name = "MANIFEST", default_value = "resources2.txt")]
    pub manifest: PathBuf,

    /// Wrap the report in a minimal HTML page
    #[arg(long)]
    pub html: bool,

    /// Suppress warnings about missing or unreadable archives
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
