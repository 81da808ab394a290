use apphub_store::{Application, ApplicationPatch, NewApplication, Store, StoreError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: &'static str,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Service for catalog business logic
///
/// This service wraps the catalog store and provides a clean interface for
/// application operations. Required-field validation lives here, in front of
/// the store, so a rejected payload never touches persisted state.
#[derive(Clone)]
pub struct ApplicationService {
    store: Store,
}

impl ApplicationService {
    /// Create a new `ApplicationService`
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Create a new application
    ///
    /// # Arguments
    /// * `new` - Field values from the form layer; `name`, `description` and
    ///   `link` must be non-blank, `image_url` may be empty
    ///
    /// # Returns
    /// * `Ok(Application)` - Successfully created record with id and timestamp
    /// * `Err(ServiceError::Validation)` - A required field was blank
    pub fn create_app(&self, new: NewApplication) -> Result<Application, ServiceError> {
        require_filled("name", &new.name)?;
        require_filled("description", &new.description)?;
        require_filled("link", &new.link)?;

        Ok(self.store.applications().create(new)?)
    }

    /// Get application by ID
    pub fn get_app(&self, id: &str) -> Result<Option<Application>, ServiceError> {
        Ok(self.store.applications().get(id)?)
    }

    /// List all applications in catalog order
    pub fn list_apps(&self) -> Result<Vec<Application>, ServiceError> {
        Ok(self.store.applications().list()?)
    }

    /// Apply a partial update to an application
    ///
    /// Returns `Ok(None)` when no record matches the id. A supplied `name`,
    /// `description` or `link` must be non-blank; an empty `image_url`
    /// clears the stored image.
    pub fn update_app(
        &self,
        id: &str,
        patch: ApplicationPatch,
    ) -> Result<Option<Application>, ServiceError> {
        if let Some(name) = patch.name.as_deref() {
            require_filled("name", name)?;
        }
        if let Some(description) = patch.description.as_deref() {
            require_filled("description", description)?;
        }
        if let Some(link) = patch.link.as_deref() {
            require_filled("link", link)?;
        }

        Ok(self.store.applications().update(id, patch)?)
    }

    /// Delete application by ID
    pub fn delete_app(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.applications().delete(id)?)
    }
}

fn require_filled(field: &'static str, value: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::Validation {
            field,
            reason: "must not be empty",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_service() -> ApplicationService {
        ApplicationService::new(Store::in_memory())
    }

    fn new_app(name: &str) -> NewApplication {
        NewApplication {
            name: name.to_string(),
            description: "d".to_string(),
            link: "https://x".to_string(),
            image_url: String::new(),
        }
    }

    /// Test that ApplicationService correctly integrates with the store
    #[test]
    fn test_service_integration() -> Result<(), Box<dyn std::error::Error>> {
        let service = setup_test_service();

        // Test create
        let app = service.create_app(new_app("integration-test"))?;
        assert_eq!(app.name, "integration-test");
        assert!(!app.id.is_empty());

        // Test get by id
        let fetched = service.get_app(&app.id)?;
        assert!(fetched.is_some());
        assert_eq!(fetched.unwrap().name, "integration-test");

        // Test list
        let apps = service.list_apps()?;
        assert_eq!(apps.len(), 1);

        // Test update
        let patch = ApplicationPatch {
            link: Some("https://z".to_string()),
            ..ApplicationPatch::default()
        };
        let updated = service.update_app(&app.id, patch)?;
        assert_eq!(updated.unwrap().link, "https://z");

        // Test delete
        let deleted = service.delete_app(&app.id)?;
        assert!(deleted);
        assert!(service.get_app(&app.id)?.is_none());

        Ok(())
    }

    /// Test that blank required fields are rejected before the store is hit
    #[test]
    fn test_validation_rejects_blank_fields() -> Result<(), Box<dyn std::error::Error>> {
        let service = setup_test_service();

        let mut blank_name = new_app("ok");
        blank_name.name = "   ".to_string();
        let result = service.create_app(blank_name);
        assert!(matches!(result, Err(ServiceError::Validation { .. })));

        let mut blank_link = new_app("ok");
        blank_link.link = String::new();
        let result = service.create_app(blank_link);
        assert!(matches!(result, Err(ServiceError::Validation { .. })));

        // Nothing was persisted
        assert!(service.list_apps()?.is_empty());

        Ok(())
    }

    /// Test patch validation: blank name is rejected, empty image clears
    #[test]
    fn test_patch_validation() -> Result<(), Box<dyn std::error::Error>> {
        let service = setup_test_service();
        let app = service.create_app(NewApplication {
            image_url: "https://y".to_string(),
            ..new_app("patch-test")
        })?;

        let blank_name = ApplicationPatch {
            name: Some(String::new()),
            ..ApplicationPatch::default()
        };
        let result = service.update_app(&app.id, blank_name);
        assert!(matches!(result, Err(ServiceError::Validation { .. })));
        assert_eq!(service.get_app(&app.id)?.unwrap().name, "patch-test");

        let clear_image = ApplicationPatch {
            image_url: Some(String::new()),
            ..ApplicationPatch::default()
        };
        let updated = service.update_app(&app.id, clear_image)?.unwrap();
        assert!(updated.image_url.is_empty());

        Ok(())
    }

    /// Test that updating a missing id reports not-found
    #[test]
    fn test_update_missing_app() -> Result<(), Box<dyn std::error::Error>> {
        let service = setup_test_service();

        let patch = ApplicationPatch {
            name: Some("Z".to_string()),
            ..ApplicationPatch::default()
        };
        assert!(service.update_app("missing-id", patch)?.is_none());

        Ok(())
    }
}
