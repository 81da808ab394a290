use crate::error::Result;
use crate::models::{Application, ApplicationPatch, NewApplication};
use crate::Store;

/// Repository for catalog read/write operations
pub struct ApplicationRepository<'a> {
    store: &'a Store,
}

impl<'a> ApplicationRepository<'a> {
    /// Create a new `ApplicationRepository`
    pub(crate) fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// List all applications in stored (insertion) order.
    ///
    /// An uninitialized catalog reads as empty.
    pub fn list(&self) -> Result<Vec<Application>> {
        Ok(self.store.load_catalog()?.unwrap_or_default())
    }

    /// Get application by ID
    pub fn get(&self, id: &str) -> Result<Option<Application>> {
        let apps = self.list()?;
        Ok(apps.into_iter().find(|app| app.id == id))
    }

    /// Create a new application.
    ///
    /// Assigns a fresh uuid and a creation timestamp, appends the record at
    /// the end of the catalog and persists the whole collection.
    pub fn create(&self, new: NewApplication) -> Result<Application> {
        let mut apps = self.list()?;

        let app = Application {
            id: uuid::Uuid::new_v4().to_string(),
            name: new.name,
            description: new.description,
            link: new.link,
            image_url: new.image_url,
            created_at: crate::now_rfc3339(),
        };

        apps.push(app.clone());
        self.store.save_catalog(&apps)?;
        Ok(app)
    }

    /// Merge the supplied patch fields into the record with the given id.
    ///
    /// Returns `None` and leaves the catalog untouched when no record
    /// matches. `id` and `created_at` are never changed.
    pub fn update(&self, id: &str, patch: ApplicationPatch) -> Result<Option<Application>> {
        let mut apps = self.list()?;

        let Some(app) = apps.iter_mut().find(|app| app.id == id) else {
            return Ok(None);
        };

        patch.apply(app);
        let updated = app.clone();
        self.store.save_catalog(&apps)?;
        Ok(Some(updated))
    }

    /// Delete application by ID.
    ///
    /// Returns `true` if a record was removed; `false` leaves the persisted
    /// catalog unchanged.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let apps = self.list()?;
        let before = apps.len();
        let remaining: Vec<Application> = apps.into_iter().filter(|app| app.id != id).collect();

        if remaining.len() == before {
            return Ok(false);
        }

        self.store.save_catalog(&remaining)?;
        Ok(true)
    }
}
