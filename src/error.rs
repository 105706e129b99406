use std::path::PathBuf;

/// Errors produced while loading the manifest or reading archives.
///
/// Archive-level failures (`InvalidZip`, `Io`) are caught during analysis
/// and downgraded to warnings so a single bad archive cannot abort the
/// whole report. Manifest-level failures are fatal.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Manifest file not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid zip archive: {0}")]
    InvalidZip(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
