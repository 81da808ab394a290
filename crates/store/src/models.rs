use serde::{Deserialize, Serialize};

/// Catalog entry model
///
/// Persisted with camelCase field names (`imageUrl`, `createdAt`), which is
/// the layout of the catalog slot on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Opaque unique identifier, never changed after creation
    pub id: String,
    pub name: String,
    pub description: String,
    pub link: String,
    /// External URL or an embedded `data:` URL; treated as opaque here
    pub image_url: String,
    /// RFC 3339 UTC timestamp, set once at creation
    pub created_at: String,
}

/// Payload for creating an application; id and timestamp are assigned by the
/// store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub name: String,
    pub description: String,
    pub link: String,
    #[serde(default)]
    pub image_url: String,
}

/// Partial update for an application. Fields left as `None` are preserved
/// verbatim; `id` and `created_at` can never be patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

impl ApplicationPatch {
    /// Returns true if the patch carries no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.link.is_none()
            && self.image_url.is_none()
    }

    /// Apply the supplied fields onto an existing record
    pub(crate) fn apply(self, app: &mut Application) {
        if let Some(name) = self.name {
            app.name = name;
        }
        if let Some(description) = self.description {
            app.description = description;
        }
        if let Some(link) = self.link {
            app.link = link;
        }
        if let Some(image_url) = self.image_url {
            app.image_url = image_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_json_layout() {
        let app = Application {
            id: "a1".to_string(),
            name: "Tool".to_string(),
            description: "d".to_string(),
            link: "https://x".to_string(),
            image_url: "https://y".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["imageUrl"], "https://y");
        assert_eq!(json["createdAt"], "2024-01-01T00:00:00.000Z");

        let back: Application = serde_json::from_value(json).unwrap();
        assert_eq!(back, app);
    }

    #[test]
    fn test_patch_applies_only_supplied_fields() {
        let mut app = Application {
            id: "a1".to_string(),
            name: "Tool".to_string(),
            description: "d".to_string(),
            link: "https://x".to_string(),
            image_url: "https://y".to_string(),
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };

        let patch = ApplicationPatch {
            description: Some("updated".to_string()),
            ..ApplicationPatch::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut app);

        assert_eq!(app.description, "updated");
        assert_eq!(app.name, "Tool");
        assert_eq!(app.link, "https://x");
        assert_eq!(app.image_url, "https://y");
    }

    #[test]
    fn test_empty_patch() {
        assert!(ApplicationPatch::default().is_empty());
    }
}
