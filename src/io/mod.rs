mod local;

pub use local::LocalFileReader;

use crate::error::Result;

/// Trait for random access reading from a data source
pub trait ReadAt {
    /// Fill the buffer with data starting at the specified offset
    fn read_exact_at(&self, offset: u64, buf: &mut [u8]) -> Result<()>;

    /// Get the total size of the data source
    fn size(&self) -> u64;
}
