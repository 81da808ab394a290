use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `AppReferenceHub` CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Catalog storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Interface configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Admin credential configuration
    #[serde(default)]
    pub admin: AdminConfig,
}

/// Catalog and session file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON catalog file
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Path to the session file written on login
    #[serde(default = "default_session_path")]
    pub session_path: PathBuf,
}

/// Interface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Default interface language: "en" or "ar"
    #[serde(default = "default_language")]
    pub language: String,
}

/// Admin credentials checked by the login command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_email")]
    pub email: String,

    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_catalog_path() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from("./apphub.json")
    } else {
        PathBuf::from("/var/lib/apphub/catalog.json")
    }
}

fn default_session_path() -> PathBuf {
    if cfg!(debug_assertions) {
        PathBuf::from("./apphub-session.json")
    } else {
        PathBuf::from("/var/lib/apphub/session.json")
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_admin_email() -> String {
    "admin@example.com".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            session_path: default_session_path(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            email: default_admin_email(),
            password: default_admin_password(),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from default locations in order:
    /// 1. ./apphub.toml (current directory)
    /// 2. /etc/apphub/config.toml (system-wide)
    /// 3. Built-in defaults
    pub fn load_default() -> Result<Self> {
        let paths = vec![
            PathBuf::from("./apphub.toml"),
            PathBuf::from("/etc/apphub/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                return Self::load(&path);
            }
        }

        tracing::info!("No config file found, using built-in defaults");
        Ok(Self::default())
    }

    /// Generate example configuration file
    #[must_use]
    pub fn example() -> String {
        let example = Config::default();
        toml::to_string_pretty(&example).expect("Failed to serialize example config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load("/definitely/not/here.toml").unwrap();
        assert_eq!(config.ui.language, "en");
        assert_eq!(config.admin.email, "admin@example.com");
    }

    #[test]
    fn test_partial_file_keeps_section_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("apphub.toml");
        std::fs::write(
            &path,
            "[ui]\nlanguage = \"ar\"\n\n[storage]\ncatalog_path = \"/tmp/catalog.json\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.ui.language, "ar");
        assert_eq!(config.storage.catalog_path, PathBuf::from("/tmp/catalog.json"));
        // Untouched sections keep their defaults
        assert_eq!(config.storage.session_path, default_session_path());
        assert_eq!(config.admin.password, "admin123");

        Ok(())
    }

    #[test]
    fn test_example_parses_back() {
        let example = Config::example();
        let config: Config = toml::from_str(&example).unwrap();
        assert_eq!(config.ui.language, "en");
    }
}
