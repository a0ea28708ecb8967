//! Persistence of retrieved key material.

use crate::email::EmailAddress;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Default save name for a retrieved key: `<local@domain>.asc`.
pub fn default_filename(email: &EmailAddress) -> String {
    format!("{}.asc", email)
}

/// Write the full key material to `path`, replacing any existing file.
pub fn save_key(path: &Path, key: &[u8]) -> Result<()> {
    fs::write(path, key).with_context(|| format!("failed to write key to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = key.len(), "saved key");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filename_appends_asc() {
        let email = EmailAddress::parse("me@entrez.cc").unwrap();
        assert_eq!(default_filename(&email), "me@entrez.cc.asc");
    }

    #[test]
    fn save_key_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me@entrez.cc.asc");
        save_key(&path, b"-----BEGIN PGP PUBLIC KEY BLOCK-----").unwrap();
        assert_eq!(
            std::fs::read(&path).unwrap(),
            b"-----BEGIN PGP PUBLIC KEY BLOCK-----"
        );
    }

    #[test]
    fn save_key_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.asc");
        std::fs::write(&path, b"old contents, longer than the new ones").unwrap();
        save_key(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn save_key_unwritable_destination_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-subdir").join("key.asc");
        assert!(save_key(&path, b"key").is_err());
    }
}
