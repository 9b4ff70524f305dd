//! Persistent account registry.
//!
//! All accounts known to the launcher, keyed by id, stored as a single
//! JSON file in the data directory. Implements the login controller's
//! account-store port.

use std::collections::HashMap;
use std::path::PathBuf;

use ember_types::Account;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::login::controller::AccountStore;

/// Errors from persisting the registry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write accounts file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode accounts file: {0}")]
    Encode(#[from] serde_json::Error),
}

/// On-disk shape of the registry.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RegistryFile {
    accounts: HashMap<String, Account>,
    selected: Option<String>,
}

/// Account registry backed by a JSON file.
pub struct AccountRegistry {
    accounts: HashMap<String, Account>,
    selected: Option<String>,
    path: PathBuf,
}

impl AccountRegistry {
    /// Load the registry from `path`, starting empty if the file does not
    /// exist yet. A corrupt file is logged and replaced on next persist.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<RegistryFile>(&raw) {
                Ok(file) => {
                    info!(
                        "Loaded {} account(s) from {}",
                        file.accounts.len(),
                        path.display()
                    );
                    Self {
                        accounts: file.accounts,
                        selected: file.selected,
                        path,
                    }
                }
                Err(err) => {
                    warn!("Accounts file is corrupt, starting fresh: {err}");
                    Self::empty(path)
                }
            },
            Err(_) => Self::empty(path),
        }
    }

    fn empty(path: PathBuf) -> Self {
        Self {
            accounts: HashMap::new(),
            selected: None,
            path,
        }
    }

    /// The currently selected account, if its id resolves.
    pub fn selected(&self) -> Option<&Account> {
        self.selected
            .as_deref()
            .and_then(|id| self.accounts.get(id))
    }

    /// Look up an account by id.
    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Number of known accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for AccountRegistry {
    fn upsert(&mut self, account: Account) {
        self.accounts.insert(account.id.clone(), account);
    }

    fn set_selected(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let file = RegistryFile {
            accounts: self.accounts.clone(),
            selected: self.selected.clone(),
        };
        let raw = serde_json::to_string_pretty(&file)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, raw)?;
        info!("Persisted {} account(s)", self.accounts.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_types::AccountKind;

    fn account(id: &str, name: &str) -> Account {
        Account {
            id: id.to_string(),
            username: name.to_string(),
            display_name: name.to_string(),
            access_token: format!("access-{id}"),
            refresh_token: format!("refresh-{id}"),
            kind: AccountKind::Offline,
        }
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let registry = AccountRegistry::load(dir.path().join("accounts.json"));
        assert!(registry.is_empty());
        assert!(registry.selected().is_none());
    }

    #[test]
    fn persist_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");

        let mut registry = AccountRegistry::load(&path);
        registry.upsert(account("a-1", "Steve"));
        registry.upsert(account("a-2", "Alex"));
        registry.set_selected("a-2");
        registry.persist().unwrap();

        let reloaded = AccountRegistry::load(&path);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.selected().unwrap().username, "Alex");
        assert_eq!(reloaded.get("a-1").unwrap().display_name, "Steve");
    }

    #[test]
    fn upsert_replaces_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = AccountRegistry::load(dir.path().join("accounts.json"));

        registry.upsert(account("a-1", "Steve"));
        let mut renamed = account("a-1", "Steve");
        renamed.display_name = "Steve2".to_string();
        registry.upsert(renamed);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a-1").unwrap().display_name, "Steve2");
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.json");
        std::fs::write(&path, "{not json").unwrap();

        let registry = AccountRegistry::load(&path);
        assert!(registry.is_empty());
    }
}
