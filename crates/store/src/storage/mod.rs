mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// A single addressable slot holding the serialized catalog.
///
/// The slot is exclusively owned by the [`Store`](crate::Store); no other
/// component reads or writes it directly. Absence of the slot means the
/// catalog has never been initialized.
pub trait StorageBackend: Send + Sync {
    /// Read the raw slot contents, `None` if the slot has never been written
    fn read_slot(&self) -> Result<Option<String>>;

    /// Replace the slot contents. Must leave the previous contents intact
    /// when the write fails.
    fn write_slot(&self, payload: &str) -> Result<()>;
}
