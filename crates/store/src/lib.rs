//! `authprobe-store` — single-slot persistence for the access token.
//!
//! The browser harness this tool descends from kept one token under a fixed
//! localStorage key; here the slot is a file. Absence and stale content are
//! both ordinary states, never errors.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

use authprobe_token::{is_expired_at, is_valid_format};

/// File name of the token slot inside the app config directory.
const TOKEN_FILE: &str = "access_token";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("refusing to store token with invalid format")]
    InvalidFormat,

    #[error("could not determine a config directory for the token store")]
    NoConfigDir,

    #[error("token store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed store holding at most one raw JWT string.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Open the default store under `<config_dir>/authprobe/access_token`.
    pub fn open_default() -> Result<Self, StoreError> {
        let dir = dirs::config_dir()
            .ok_or(StoreError::NoConfigDir)?
            .join("authprobe");
        Ok(Self {
            path: dir.join(TOKEN_FILE),
        })
    }

    /// Open a store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Persist a token. Tokens failing the format check are rejected rather
    /// than written, matching the original harness.
    pub fn store(&self, token: &str) -> Result<(), StoreError> {
        if !is_valid_format(token) {
            return Err(StoreError::InvalidFormat);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    /// Read whatever is in the slot, if anything.
    pub fn load_raw(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Read the stored token, clearing it if it is malformed or expired.
    ///
    /// Validation-on-load: a stale slot never survives a read, so callers can
    /// treat `Some` as "usable right now".
    pub fn load_valid(&self, now: DateTime<Utc>) -> Result<Option<String>, StoreError> {
        let Some(token) = self.load_raw()? else {
            return Ok(None);
        };

        if !is_valid_format(&token) {
            tracing::warn!("stored token has invalid format; clearing it");
            self.clear()?;
            return Ok(None);
        }

        if is_expired_at(&token, now) {
            tracing::warn!("stored token has expired; clearing it");
            self.clear()?;
            return Ok(None);
        }

        Ok(Some(token))
    }

    /// Remove the slot. Clearing an empty store is fine.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    fn test_store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path().join("access_token"));
        (dir, store)
    }

    fn token_expiring_at(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn store_and_load_roundtrip() {
        let (_dir, store) = test_store();
        let token = token_expiring_at(Utc::now().timestamp() + 600);

        store.store(&token).unwrap();
        assert_eq!(store.load_raw().unwrap(), Some(token.clone()));
        assert_eq!(store.load_valid(Utc::now()).unwrap(), Some(token));
    }

    #[test]
    fn empty_store_loads_none() {
        let (_dir, store) = test_store();
        assert_eq!(store.load_raw().unwrap(), None);
        assert_eq!(store.load_valid(Utc::now()).unwrap(), None);
    }

    #[test]
    fn invalid_format_is_rejected_on_store() {
        let (_dir, store) = test_store();
        match store.store("definitely-not-a-jwt") {
            Err(StoreError::InvalidFormat) => {}
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
        assert_eq!(store.load_raw().unwrap(), None);
    }

    #[test]
    fn expired_token_is_cleared_on_load() {
        let (_dir, store) = test_store();
        let token = token_expiring_at(Utc::now().timestamp() - 60);

        store.store(&token).unwrap();
        assert_eq!(store.load_valid(Utc::now()).unwrap(), None);
        // The slot itself was purged, not just hidden.
        assert_eq!(store.load_raw().unwrap(), None);
    }

    #[test]
    fn malformed_slot_contents_are_cleared_on_load() {
        let (_dir, store) = test_store();
        // Bypass store() to simulate a corrupted slot.
        std::fs::write(store.path(), "two.parts").unwrap();

        assert_eq!(store.load_valid(Utc::now()).unwrap(), None);
        assert_eq!(store.load_raw().unwrap(), None);
    }

    #[test]
    fn clearing_twice_is_not_an_error() {
        let (_dir, store) = test_store();
        store.clear().unwrap();
        store.clear().unwrap();
    }
}
