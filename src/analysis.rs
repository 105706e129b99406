//! Archive inspection and usage resolution.
//!
//! Update archives form an overlay: a later archive's copy of an entry
//! name shadows every earlier copy. The analysis walks the manifest
//! newest-first and lets the first archive seen claim each entry name, so
//! every shadowed (older) copy counts as obsoleted data. One pass, one
//! map probe per entry.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::io::LocalFileReader;
use crate::manifest::ManifestEntry;
use crate::zip::{ZipFileEntry, ZipParser};

/// One entry of one archive, with its usage verdict.
#[derive(Debug, Clone)]
pub struct UpdateEntry {
    /// Path within the archive
    pub name: String,
    /// Compressed size in bytes
    pub size: u64,
    /// False when a newer archive carries an entry with the same name
    pub used: bool,
}

/// Per-archive statistics derived from the manifest and the zip central
/// directory.
#[derive(Debug, Clone, Default)]
pub struct UpdateArchive {
    /// Archive path as listed in the manifest
    pub file: String,
    /// Checksum string from the manifest, not validated
    pub adler32: String,
    /// On-disk size of the zip file; zero when the file is missing
    pub file_size: u64,
    /// Sum of compressed entry sizes
    pub size: u64,
    /// Sum of uncompressed entry sizes
    pub uncompressed_size: u64,
    /// Entries this archive authoritatively owns
    pub used_entry_count: usize,
    /// Compressed bytes of the owned entries
    pub used_size: u64,
    /// All entries in central-directory order
    pub entries: Vec<UpdateEntry>,
}

impl UpdateArchive {
    /// Fraction of this archive's data still in use, in `[0, 1]`.
    ///
    /// Zero for archives with no counted entries (missing or unreadable).
    pub fn used_percentage(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            self.used_size as f64 / self.size as f64
        }
    }
}

/// Result of analyzing every archive in the manifest.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Archives in processing order (newest first)
    pub updates: Vec<UpdateArchive>,
    /// Entry name to owning-archive filename, in first-seen order
    pub entry_owners: Vec<(String, String)>,
    /// Total compressed entry bytes across all archives
    pub data_size: u64,
    /// Total uncompressed entry bytes
    pub data_uncompressed_size: u64,
    /// Compressed bytes of entries still in use
    pub data_used_size: u64,
    /// On-disk bytes not accounted to entries (zip structure overhead)
    pub data_overhead_size: u64,
}

impl Analysis {
    /// Bytes belonging to entries superseded by a newer archive.
    pub fn obsoleted_size(&self) -> u64 {
        self.data_size - self.data_used_size
    }

    /// Obsoleted fraction as a whole percentage, 0 when there is no data.
    ///
    /// Computed as `100 - used/size*100` in floating point and truncated,
    /// so an archive set that is 77.7% used reports 22% obsoleted.
    pub fn obsoleted_percent(&self) -> u64 {
        if self.data_size == 0 {
            0
        } else {
            (100.0 - self.data_used_size as f64 * 100.0 / self.data_size as f64) as u64
        }
    }
}

/// Analyze the archives listed in the manifest.
///
/// The manifest lists archives oldest first; they are visited in reverse
/// so that ownership resolves to the newest archive containing each entry
/// name. Missing or unreadable archives are reported as warnings and kept
/// in the result with zeroed statistics; they never abort the run.
pub fn analyze(manifest: &[ManifestEntry]) -> Analysis {
    let mut analysis = Analysis::default();
    let mut owners: HashMap<String, String> = HashMap::new();
    let mut owner_order: Vec<String> = Vec::new();

    for record in manifest.iter().rev() {
        let mut update = UpdateArchive {
            file: record.file.clone(),
            adler32: record.adler32.clone(),
            ..Default::default()
        };

        let path = Path::new(&record.file);
        match fs::metadata(path) {
            Ok(meta) => update.file_size = meta.len(),
            Err(err) => {
                warn!("update archive {} is missing: {err}", record.file);
                analysis.updates.push(update);
                continue;
            }
        }

        match read_entries(path) {
            Ok(entries) => {
                for entry in entries {
                    update.uncompressed_size += entry.uncompressed_size;
                    update.size += entry.compressed_size;

                    // First (newest) archive to mention a name owns it.
                    let used = !owners.contains_key(&entry.name);
                    if used {
                        update.used_entry_count += 1;
                        update.used_size += entry.compressed_size;
                        owners.insert(entry.name.clone(), update.file.clone());
                        owner_order.push(entry.name.clone());
                    }

                    update.entries.push(UpdateEntry {
                        name: entry.name,
                        size: entry.compressed_size,
                        used,
                    });
                }
            }
            Err(err) => {
                // Keep the on-disk size so the overhead totals still see the
                // file, but count no entries.
                warn!("update archive {} is not readable: {err}", record.file);
            }
        }

        analysis.data_size += update.size;
        analysis.data_uncompressed_size += update.uncompressed_size;
        analysis.data_used_size += update.used_size;
        analysis.data_overhead_size += update.file_size.saturating_sub(update.size);
        analysis.updates.push(update);
    }

    analysis.entry_owners = owner_order
        .into_iter()
        .map(|name| {
            let owner = owners[&name].clone();
            (name, owner)
        })
        .collect();

    analysis
}

fn read_entries(path: &Path) -> Result<Vec<ZipFileEntry>> {
    let reader = LocalFileReader::new(path)?;
    ZipParser::new(reader).list_entries()
}
