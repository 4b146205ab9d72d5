use std::fs;
use std::path::PathBuf;

use crate::domain::{Account, AccountStore, Error};

/// Store backed by a single JSON file, overwritten wholesale on every save.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AccountStore for JsonFileStore {
    fn save(&mut self, account: &Account) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(account)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Account>, Error> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        // Stored data bypassed the creation gates, so malformed or
        // inconsistent slots are rejected rather than trusted.
        let account: Account =
            serde_json::from_str(&json).map_err(|e| Error::CorruptState(e.to_string()))?;
        account.validate_loaded()?;
        Ok(Some(account))
    }
}

/// Volatile store. Used by tests that do not need a real file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<Account>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountStore for MemoryStore {
    fn save(&mut self, account: &Account) -> Result<(), Error> {
        self.slot = Some(account.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Account>, Error> {
        Ok(self.slot.clone())
    }
}
