//! Update manifest loading.
//!
//! The manifest (`resources2.txt` in a stock deployment) lists one update
//! archive per line together with its Adler-32 checksum, oldest first:
//!
//! ```text
//! update-1.zip 8a5cbc4e
//! update-2.zip 02f6e7d5
//! ```

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// One line of the update manifest: an archive path and its checksum.
///
/// The checksum is an 8-character hexadecimal Adler-32 string, kept as an
/// opaque value; nothing is validated beyond trimming whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub file: String,
    pub adler32: String,
}

/// Load the manifest, returning entries in file order (oldest first).
///
/// Each non-empty line is split on the first whitespace or pipe character
/// into an archive path and a checksum. Blank lines are skipped; a line
/// without a checksum keeps an empty one. An empty manifest is valid and
/// yields an empty report downstream.
///
/// # Errors
///
/// [`Error::ManifestNotFound`] if the file does not exist, or
/// [`Error::ManifestRead`] on any other read failure.
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::ManifestNotFound(path.to_path_buf())
        } else {
            Error::ManifestRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let mut entries = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (file, adler32) = match line.split_once(|c: char| c.is_whitespace() || c == '|') {
            Some((file, rest)) => (file, rest.trim()),
            None => (line, ""),
        };

        entries.push(ManifestEntry {
            file: file.to_string(),
            adler32: adler32.to_string(),
        });
    }

    Ok(entries)
}
