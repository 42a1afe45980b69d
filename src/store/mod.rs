//! Volatile credential store.
//!
//! One mapping of username to secret, shared by cloning. The map starts
//! empty, lives in process memory only, and is dropped on shutdown.

use secrecy::{ExposeSecret, SecretString};
use std::{
    collections::{HashMap, hash_map::Entry},
    sync::Arc,
};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Registration attempted for a username that is already present.
    #[error("user already exists")]
    AlreadyExists,

    /// Authentication failed. Unknown username and wrong secret are
    /// collapsed into this single case on purpose.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// In-memory username/secret mapping. Clones share the same records.
#[derive(Clone, Debug, Default)]
pub struct CredentialStore {
    records: Arc<RwLock<HashMap<String, SecretString>>>,
}

impl CredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a credential record, keeping the first secret registered for a
    /// username. The existence check and the insert happen under one write
    /// guard, so concurrent registrations of the same username cannot both
    /// succeed.
    ///
    /// # Errors
    /// Returns `AlreadyExists` if the username is already registered.
    pub async fn register(
        &self,
        username: String,
        secret: SecretString,
    ) -> Result<(), CredentialError> {
        let mut records = self.records.write().await;

        match records.entry(username) {
            Entry::Occupied(_) => Err(CredentialError::AlreadyExists),
            Entry::Vacant(entry) => {
                entry.insert(secret);

                Ok(())
            }
        }
    }

    /// Check a username/secret pair against the store.
    ///
    /// # Errors
    /// Returns `InvalidCredentials` when the username is unknown or the
    /// secret does not match; callers cannot tell the two cases apart.
    pub async fn authenticate(
        &self,
        username: &str,
        candidate: &str,
    ) -> Result<(), CredentialError> {
        let records = self.records.read().await;

        match records.get(username) {
            Some(stored) if secret_matches(stored, candidate) => Ok(()),
            _ => Err(CredentialError::InvalidCredentials),
        }
    }

    /// Number of registered credential records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True until the first registration lands.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

// The comparison scheme lives here and nowhere else: exact, case-sensitive
// string equality on the verbatim secret.
fn secret_matches(stored: &SecretString, candidate: &str) -> bool {
    stored.expose_secret() == candidate
}
