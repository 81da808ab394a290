use crate::models::Application;

/// Example entries written to an uninitialized catalog.
///
/// Ids are fixed; records created later get random uuids.
pub(crate) fn example_applications() -> Vec<Application> {
    let created_at = crate::now_rfc3339();

    vec![
        Application {
            id: "1".to_string(),
            name: "Code Generator".to_string(),
            description: "AI-powered code generation tool that creates consistent, clean code \
                          based on your requirements."
                .to_string(),
            link: "https://example.com/code-generator".to_string(),
            image_url: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b".to_string(),
            created_at: created_at.clone(),
        },
        Application {
            id: "2".to_string(),
            name: "API Manager".to_string(),
            description: "Centralized platform for managing, monitoring, and securing all your \
                          API endpoints."
                .to_string(),
            link: "https://example.com/api-manager".to_string(),
            image_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6".to_string(),
            created_at: created_at.clone(),
        },
        Application {
            id: "3".to_string(),
            name: "Database Explorer".to_string(),
            description: "Powerful tool for visualizing and interacting with database structures \
                          and data."
                .to_string(),
            link: "https://example.com/database-explorer".to_string(),
            image_url: "https://images.unsplash.com/photo-1518770660439-4636190af475".to_string(),
            created_at,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_distinct() {
        let apps = example_applications();
        assert_eq!(apps.len(), 3);

        let ids: HashSet<_> = apps.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert!(apps.iter().all(|a| !a.created_at.is_empty()));
    }
}
