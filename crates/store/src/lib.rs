mod error;
mod models;
mod repositories;
mod seed;
mod storage;

pub use error::{Result, StoreError};
pub use models::{Application, ApplicationPatch, NewApplication};
pub use repositories::ApplicationRepository;
pub use storage::{FileBackend, MemoryBackend, StorageBackend};

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

/// Catalog store: sole owner of the persisted application collection.
///
/// All reads and writes funnel through a single [`StorageBackend`] slot
/// holding the serialized catalog. Operations are synchronous; callers
/// sharing a store across threads get mutual exclusion from the backend,
/// but each mutation is a read-modify-write of the whole collection.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
}

impl Store {
    /// Create a store over an arbitrary storage backend
    pub fn with_backend(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Create a file-backed store at the given path.
    ///
    /// The file is not created until the first write; a missing file reads
    /// as an uninitialized catalog.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_backend(FileBackend::new(path))
    }

    /// Create a store over an in-memory slot
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Seed the catalog with example entries if it has never been written.
    ///
    /// Idempotent: once a collection exists, even an empty one, it is never
    /// reseeded. An unreadable slot counts as uninitialized and is replaced.
    pub fn initialize(&self) -> Result<()> {
        if self.load_catalog()?.is_none() {
            let apps = seed::example_applications();
            self.save_catalog(&apps)?;
            info!("Seeded catalog with {} example applications", apps.len());
        }
        Ok(())
    }

    /// Get repository for application operations
    #[must_use]
    pub fn applications(&self) -> ApplicationRepository<'_> {
        ApplicationRepository::new(self)
    }

    /// Decode the slot. `None` means the catalog has never been initialized;
    /// undecodable contents are treated the same way rather than surfacing a
    /// parse error to callers.
    pub(crate) fn load_catalog(&self) -> Result<Option<Vec<Application>>> {
        let Some(raw) = self.backend.read_slot()? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(apps) => Ok(Some(apps)),
            Err(e) => {
                warn!("Discarding undecodable catalog data: {e}");
                Ok(None)
            }
        }
    }

    pub(crate) fn save_catalog(&self, apps: &[Application]) -> Result<()> {
        let payload = serde_json::to_string(apps)?;
        self.backend.write_slot(&payload)
    }
}

/// RFC 3339 UTC with millisecond precision, e.g. `2024-01-01T00:00:00.000Z`
pub(crate) fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}
