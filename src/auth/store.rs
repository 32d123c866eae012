use std::fs;
use std::path::{Path, PathBuf};

use super::error::AuthError;
use super::token::Token;

/// Storage abstraction for the persisted token pair.
///
/// The store is the single source of truth: the request pipeline reads it
/// per call, and only the exchange/refresh success paths and logout write
/// it.
pub trait TokenStore: Send + Sync {
    /// Current token, `None` before any login. Never an error on absence.
    fn get(&self) -> Result<Option<Token>, AuthError>;
    /// Replace the stored token atomically.
    fn store(&self, token: &Token) -> Result<(), AuthError>;
    /// Drop the stored token. Idempotent.
    fn clear(&self) -> Result<(), AuthError>;
}

const TOKEN_FILE: &str = "token.json";

/// File-backed token store holding one JSON-serialized [`Token`] blob.
///
/// # Example
/// ```no_run
/// use fleetwire::auth::{FileTokenStore, Token, TokenStore};
///
/// let store = FileTokenStore::new_default();
/// assert!(store.get()?.is_none());
/// # Ok::<(), fleetwire::auth::AuthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    base_dir: PathBuf,
}

impl FileTokenStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn new_default() -> Self {
        Self {
            base_dir: default_store_dir(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE)
    }

    fn ensure_parent(path: &Path) -> Result<(), AuthError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<Token>, AuthError> {
        let path = self.token_path();
        let raw = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(AuthError::Io(err.to_string())),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn store(&self, token: &Token) -> Result<(), AuthError> {
        let path = self.token_path();
        Self::ensure_parent(&path)?;
        let serialized = serde_json::to_string_pretty(token)?;
        fs::write(&path, serialized)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AuthError::Io(err.to_string())),
        }
    }
}

fn default_store_dir() -> PathBuf {
    directories::UserDirs::new()
        .map(|dirs| dirs.home_dir().join(".fleetwire"))
        .unwrap_or_else(|| PathBuf::from(".fleetwire"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, FileTokenStore) {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path());
        (dir, store)
    }

    fn sample_token() -> Token {
        Token {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_in: 3600,
            scope: "users.read".to_string(),
            token_type: "bearer".to_string(),
        }
    }

    #[test]
    fn get_before_any_save_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn token_round_trip_works() {
        let (_dir, store) = temp_store();
        store.store(&sample_token()).unwrap();
        let loaded = store.get().unwrap().unwrap();
        assert_eq!(loaded.access_token, "access");
        assert_eq!(loaded.refresh_token, "refresh");
        assert_eq!(loaded.expires_in, 3600);
    }

    #[test]
    fn store_replaces_prior_token() {
        let (_dir, store) = temp_store();
        store.store(&sample_token()).unwrap();
        let mut replacement = sample_token();
        replacement.access_token = "access-2".to_string();
        store.store(&replacement).unwrap();
        assert_eq!(store.get().unwrap().unwrap().access_token, "access-2");
    }

    #[test]
    fn clear_removes_token_and_is_idempotent() {
        let (_dir, store) = temp_store();
        store.store(&sample_token()).unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }
}
