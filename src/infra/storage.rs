//! Persisted client state: the bearer token, the theme preference and the signed-in user.
//!
//! Stands in for browser local storage. Everything else is rebuilt from the backend on
//! start-up.

use crate::domain::User;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize stored session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    pub token: Option<String>,
    pub theme: Option<String>,
    pub user: Option<User>,
}

pub struct LocalStorage {
    path: Option<PathBuf>,
    data: Mutex<StoredSession>,
}

impl LocalStorage {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring corrupt storage at {}: {}", path.display(), err);
                StoredSession::default()
            }),
            Err(_) => StoredSession::default(),
        };
        Self {
            path: Some(path),
            data: Mutex::new(data),
        }
    }

    pub fn open_default() -> Self {
        Self::open(crate::infra::app_config::app_data_dir().join("session.toml"))
    }

    /// Non-persistent store, used by tests.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: Mutex::new(StoredSession::default()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn snapshot(&self) -> StoredSession {
        self.data.lock().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.data.lock().token.clone()
    }

    pub fn theme(&self) -> Option<String> {
        self.data.lock().theme.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.data.lock().user.clone()
    }

    /// Persist a fresh session after sign-in.
    pub fn store_session(&self, token: &str, user: Option<&User>) -> Result<(), StorageError> {
        self.update(|data| {
            data.token = Some(token.to_string());
            data.user = user.cloned();
        })
    }

    /// Remove token and user; the theme survives logout.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.update(|data| {
            data.token = None;
            data.user = None;
        })
    }

    pub fn set_theme(&self, theme: &str) -> Result<(), StorageError> {
        self.update(|data| data.theme = Some(theme.to_string()))
    }

    fn update(&self, apply: impl FnOnce(&mut StoredSession)) -> Result<(), StorageError> {
        let snapshot = {
            let mut data = self.data.lock();
            apply(&mut data);
            data.clone()
        };
        self.flush(&snapshot)
    }

    fn flush(&self, data: &StoredSession) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = toml::to_string_pretty(data)?;
        std::fs::write(path, contents).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 7,
            first_name: "Youssef".into(),
            last_name: "Benali".into(),
            email: "y@example.com".into(),
            phone_number: "0600000000".into(),
        }
    }

    #[test]
    fn session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.toml");

        let storage = LocalStorage::open(&path);
        storage.store_session("tok-1", Some(&user())).unwrap();
        storage.set_theme("dark").unwrap();

        let reopened = LocalStorage::open(&path);
        assert_eq!(reopened.token().as_deref(), Some("tok-1"));
        assert_eq!(reopened.theme().as_deref(), Some("dark"));
        assert_eq!(reopened.user(), Some(user()));
    }

    #[test]
    fn clear_session_keeps_theme() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let storage = LocalStorage::open(&path);
        storage.store_session("tok-1", Some(&user())).unwrap();
        storage.set_theme("dark").unwrap();
        storage.clear_session().unwrap();

        let reopened = LocalStorage::open(&path);
        assert!(reopened.token().is_none());
        assert!(reopened.user().is_none());
        assert_eq!(reopened.theme().as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");
        std::fs::write(&path, "token = [[[").unwrap();

        let storage = LocalStorage::open(&path);
        assert_eq!(storage.snapshot(), StoredSession::default());
    }

    #[test]
    fn in_memory_never_touches_disk() {
        let storage = LocalStorage::in_memory();
        storage.store_session("tok", None).unwrap();
        assert!(storage.path().is_none());
        assert_eq!(storage.token().as_deref(), Some("tok"));
    }
}
