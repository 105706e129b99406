//! ZIP archive inspection.
//!
//! This module reads zip central directories to enumerate entries and
//! their sizes, supporting both standard ZIP format and ZIP64 extensions
//! for large archives.
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with metadata for all files
//! 3. End of Central Directory (EOCD) record at the end
//!
//! The parser reads the EOCD first (from the end of the file), then the
//! Central Directory, which allows listing entries without reading the
//! file data at all - the analysis only ever needs names and sizes.
//!
//! ## Limitations
//!
//! - No extraction; entry metadata only
//! - No multi-disk archive support

mod parser;
mod structures;

#[cfg(test)]
pub(crate) mod testzip;

pub use parser::ZipParser;
pub use structures::*;
