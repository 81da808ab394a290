use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::storage::StorageBackend;

/// In-memory slot, used in tests and for ephemeral catalogs
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: Mutex<Option<String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load the slot, e.g. with corrupt data in tests
    #[must_use]
    pub fn with_contents(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read_slot(&self) -> Result<Option<String>> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slot.clone())
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(payload.to_string());
        Ok(())
    }
}
