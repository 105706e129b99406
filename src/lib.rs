//! # upalyzer
//!
//! Analyzes a set of versioned update archives (zip files) and reports how
//! much of their content is obsoleted by newer updates.
//!
//! Update systems that ship fixes as a growing list of zip archives end up
//! carrying stale copies of files: whenever a newer archive contains an
//! entry with the same name, the older copy is dead weight that every
//! client still downloads. This crate reads the update manifest, walks
//! each archive's zip central directory, resolves which archive owns each
//! entry name, and renders a report of per-archive usage plus aggregate
//! totals.
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> anyhow::Result<()> {
//!     let manifest = upalyzer::load_manifest(Path::new("resources2.txt"))?;
//!     let analysis = upalyzer::analyze(&manifest);
//!     print!("{}", upalyzer::render_text(&analysis));
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod io;
pub mod manifest;
pub mod report;
pub mod zip;

pub use analysis::{analyze, Analysis, UpdateArchive, UpdateEntry};
pub use cli::Cli;
pub use error::{Error, Result};
pub use io::{LocalFileReader, ReadAt};
pub use manifest::{load_manifest, ManifestEntry};
pub use report::{render_html, render_text};
pub use zip::{ZipFileEntry, ZipParser};
