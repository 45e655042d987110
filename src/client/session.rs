//! Credential persistence
//!
//! The client receives its credential slot as an injected trait object: the
//! CLI hands it a file-backed store rooted in the config file, while tests
//! use an in-memory one. The slot holds at most one credential pair; it is
//! overwritten on refresh and emptied on logout or refresh failure.

use std::path::PathBuf;

use crate::client::models::Credential;
use crate::config::Config;
use crate::error::Result;

/// Storage backend for the single active credential
pub trait CredentialStore: Send + Sync {
    /// Read the stored credential pair, if any
    fn load(&self) -> Result<Option<Credential>>;

    /// Replace the stored credential pair
    fn store(&self, credential: &Credential) -> Result<()>;

    /// Remove the stored credential pair
    fn clear(&self) -> Result<()>;
}

/// Credential slot inside the cycleops config file.
///
/// Reads and rewrites the `credential` section, leaving the rest of the file
/// untouched.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        Ok(Config::load_from(self.path.clone())?.credential)
    }

    fn store(&self, credential: &Credential) -> Result<()> {
        let mut config = Config::load_from(self.path.clone())?;
        config.credential = Some(credential.clone());
        config.save_to(self.path.clone())
    }

    fn clear(&self) -> Result<()> {
        let mut config = Config::load_from(self.path.clone())?;
        if config.credential.take().is_some() {
            config.save_to(self.path.clone())?;
        }
        Ok(())
    }
}

/// In-memory credential slot for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryCredentialStore {
    slot: std::sync::Mutex<Option<Credential>>,
}

#[cfg(test)]
impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: std::sync::Mutex::new(Some(credential)),
        }
    }
}

#[cfg(test)]
impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<Credential>> {
        Ok(self.slot.lock().unwrap().clone())
    }

    fn store(&self, credential: &Credential) -> Result<()> {
        *self.slot.lock().unwrap() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
