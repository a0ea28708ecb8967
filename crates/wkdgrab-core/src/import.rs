//! Importing a saved key into a local gpg keyring.
//!
//! The key manager is an external executable; a failed import is recoverable
//! (the key file is already on disk), so errors carry the manual command for
//! the user to run instead.

use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Import failure, carrying enough to print a remediation hint.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{gpg} exited with status {status}")]
    NonZeroExit { gpg: String, status: i32 },
    #[error("{gpg} was terminated by a signal")]
    Terminated { gpg: String },
    #[error("failed to run {gpg}: {source}")]
    Spawn {
        gpg: String,
        #[source]
        source: std::io::Error,
    },
}

/// Runs `<gpg> --import <file>` for retrieved keys.
#[derive(Debug, Clone)]
pub struct GpgImport {
    gpg_path: PathBuf,
}

impl GpgImport {
    pub fn new(gpg_path: impl Into<PathBuf>) -> Self {
        Self {
            gpg_path: gpg_path.into(),
        }
    }

    /// The command line a user would run to import `key_file` themselves.
    pub fn manual_command(&self, key_file: &Path) -> String {
        format!("{} --import {}", self.gpg_path.display(), key_file.display())
    }

    /// Import `key_file`; exit status 0 is success, anything else an error.
    pub fn import(&self, key_file: &Path) -> Result<(), ImportError> {
        let gpg = self.gpg_path.display().to_string();
        let status = Command::new(&self.gpg_path)
            .arg("--import")
            .arg(key_file)
            .status()
            .map_err(|source| ImportError::Spawn {
                gpg: gpg.clone(),
                source,
            })?;

        if status.success() {
            tracing::debug!(%gpg, file = %key_file.display(), "key imported");
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(ImportError::NonZeroExit { gpg, status: code }),
            None => Err(ImportError::Terminated { gpg }),
        }
    }
}
