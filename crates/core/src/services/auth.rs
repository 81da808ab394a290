use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Authenticated admin identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Session I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Local session gate.
///
/// A single admin credential pair from configuration, and a session file
/// holding the logged-in identity between invocations. There is no
/// authorization model beyond "logged in or not"; the catalog store itself
/// never checks the session.
pub struct AuthService {
    session_path: PathBuf,
    admin_email: String,
    admin_password: String,
}

impl AuthService {
    pub fn new(
        session_path: impl AsRef<Path>,
        admin_email: impl Into<String>,
        admin_password: impl Into<String>,
    ) -> Self {
        Self {
            session_path: session_path.as_ref().to_path_buf(),
            admin_email: admin_email.into(),
            admin_password: admin_password.into(),
        }
    }

    /// Check credentials and persist the session
    pub fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        if email != self.admin_email || password != self.admin_password {
            return Err(AuthError::InvalidCredentials);
        }

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            is_admin: true,
        };

        if let Some(parent) = self.session_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.session_path, serde_json::to_string(&user)?)?;
        info!("Admin {} logged in", user.email);
        Ok(user)
    }

    /// Drop the persisted session; logging out twice is not an error
    pub fn logout(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::Io(e)),
        }
    }

    /// The current identity, if any.
    ///
    /// An unreadable or undecodable session file reads as "no identity".
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        let raw = fs::read_to_string(&self.session_path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding undecodable session data: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn setup_auth(dir: &Path) -> AuthService {
        AuthService::new(dir.join("session.json"), "admin@example.com", "admin123")
    }

    #[test]
    fn test_login_logout_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let auth = setup_auth(dir.path());

        assert!(auth.current_user().is_none());

        let user = auth.login("admin@example.com", "admin123")?;
        assert!(user.is_admin);
        assert_eq!(auth.current_user(), Some(user));

        auth.logout()?;
        assert!(auth.current_user().is_none());

        // Logging out again is fine
        auth.logout()?;

        Ok(())
    }

    #[test]
    fn test_wrong_credentials_are_rejected() {
        let dir = tempdir().unwrap();
        let auth = setup_auth(dir.path());

        let result = auth.login("admin@example.com", "wrong");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(auth.current_user().is_none());

        let result = auth.login("someone@else.com", "admin123");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_corrupt_session_reads_as_logged_out() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let auth = setup_auth(dir.path());

        fs::write(dir.path().join("session.json"), "not json")?;
        assert!(auth.current_user().is_none());

        Ok(())
    }
}
