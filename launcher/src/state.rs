//! Application state and channel-based IPC for async operations.

use std::sync::mpsc::{channel, Receiver, Sender};

use ember_types::Account;

use crate::api::ApiError;
use crate::settings::LauncherSettings;

/// Messages sent from async operations to the main UI thread.
#[derive(Debug)]
pub enum AppMessage {
    /// Remote login finished.
    LoginResult(Result<Account, ApiError>),
    /// Settings view data finished loading.
    SettingsPrepared(LauncherSettings),
}

/// Application state with channel-based communication.
pub struct AppStateChannels {
    /// Sender for app messages (cloned for each async operation)
    pub tx: Sender<AppMessage>,
    /// Receiver for app messages (owned by main UI thread)
    pub rx: Receiver<AppMessage>,
}

impl AppStateChannels {
    /// Create new application state channels.
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }

    /// Get a clone of the sender for use in async operations.
    pub fn sender(&self) -> Sender<AppMessage> {
        self.tx.clone()
    }
}

impl Default for AppStateChannels {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn async work onto the runtime entered in `main`.
pub fn spawn_task<F>(future: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    tokio::spawn(future);
}
