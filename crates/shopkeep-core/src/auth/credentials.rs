//! Durable credential storage.
//!
//! The session token and auxiliary identity fields are persisted as a
//! single JSON document so that a restart can restore the session
//! without a fresh login. The record is always written as a whole:
//! the file is staged next to its final location and renamed into
//! place, so a concurrent reader sees either the old record or the new
//! one, never a token without its email/role.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Credential record file name in the data directory
const CREDENTIALS_FILE: &str = "credentials.json";

/// Staging suffix for the atomic write
const STAGING_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The persisted session fields. An absent or empty token means
/// "logged out"; email and role are display data that live and die
/// with the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub token: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl CredentialRecord {
    pub fn new(token: String, email: Option<String>, role: Option<String>) -> Self {
        Self {
            token: Some(token),
            email,
            role,
        }
    }

    /// Whether this record represents a logged-in user.
    pub fn has_token(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// File-backed store for the credential record.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store rooted at `data_dir`. The directory is created
    /// lazily on the first write.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            path: data_dir.join(CREDENTIALS_FILE),
        }
    }

    /// Read the current record. A missing file is an empty record, not
    /// an error; an unreadable or unparseable file is an error and the
    /// caller decides how to degrade.
    pub async fn read(&self) -> Result<CredentialRecord, CredentialError> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(CredentialRecord::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the record atomically: all three fields land together.
    pub async fn write(&self, record: &CredentialRecord) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let staging = self.path.with_extension(STAGING_SUFFIX);
        let contents = serde_json::to_vec_pretty(record)?;
        fs::write(&staging, &contents).await?;
        fs::rename(&staging, &self.path).await?;

        debug!(path = %self.path.display(), "credential record written");
        Ok(())
    }

    /// Remove the record. Clearing an already-empty store succeeds.
    pub async fn clear(&self) -> Result<(), CredentialError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "credential record cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
