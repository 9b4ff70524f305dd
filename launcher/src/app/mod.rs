//! Main application structure.

mod constructors;
mod dialogs;
mod rendering;
mod update;

use std::time::Instant;

use ember_types::Account;

use crate::accounts::AccountRegistry;
use crate::api::ApiClient;
use crate::landing::LandingScreen;
use crate::login::controller::{
    AccountEvents, LoginController, LoginPorts, OverlayPort, ViewNavigator,
};
use crate::login::LoginScreen;
use crate::login_options::LoginOptionsScreen;
use crate::settings::SettingsScreen;
use crate::state::AppStateChannels;
use crate::views::{View, ViewSwitch};

/// A modal overlay awaiting user dismissal.
#[derive(Debug, Clone)]
pub struct OverlayContent {
    pub title: String,
    pub desc: String,
    pub action_label: String,
}

/// Overlay dialog state; the controller's overlay port.
#[derive(Debug, Default)]
pub struct OverlayState {
    pub content: Option<OverlayContent>,
}

impl OverlayPort for OverlayState {
    fn show(&mut self, title: String, desc: String, action_label: String) {
        self.content = Some(OverlayContent {
            title,
            desc,
            action_label,
        });
    }
}

/// Pending view transition; the controller's navigator port.
#[derive(Debug, Default)]
pub struct Navigator {
    pub pending: Option<ViewSwitch>,
}

impl Navigator {
    /// Start a transition, replacing any pending one.
    pub fn begin(&mut self, from: View, to: View, out_ms: u32, in_ms: u32) {
        tracing::info!("Switching view: {from:?} -> {to:?}");
        self.pending = Some(ViewSwitch {
            from,
            to,
            out_ms,
            in_ms,
            started: Instant::now(),
            flipped: false,
        });
    }
}

impl ViewNavigator for Navigator {
    fn switch_view(&mut self, from: View, to: View, out_ms: u32, in_ms: u32) {
        self.begin(from, to, out_ms, in_ms);
    }
}

/// Holds the most recently selected account for the rest of the UI; the
/// controller's selection-changed port.
#[derive(Debug, Default)]
pub struct SelectedAccount {
    pub account: Option<Account>,
}

impl AccountEvents for SelectedAccount {
    fn selected_changed(&mut self, account: &Account) {
        tracing::info!("Selected account changed: {}", account.id);
        self.account = Some(account.clone());
    }
}

/// The main launcher application.
pub struct LauncherApp {
    /// API client for the remote account service
    api: ApiClient,
    /// Login form state machine
    login: LoginController,
    /// Login view widgets and animation state
    login_screen: LoginScreen,
    login_options: LoginOptionsScreen,
    landing: LandingScreen,
    settings: SettingsScreen,
    /// Persistent account registry (the controller's account-store port)
    accounts: AccountRegistry,
    selected: SelectedAccount,
    overlay: OverlayState,
    navigator: Navigator,
    /// View currently shown
    current_view: View,
    /// A settings-preparation task is in flight
    preparing_settings: bool,
    /// Channel-based state management
    channels: AppStateChannels,
}

impl LauncherApp {
    /// Run a controller event with the collaborator ports bundled up.
    pub(super) fn with_ports<R>(
        &mut self,
        f: impl FnOnce(&mut LoginController, &mut LoginPorts<'_>) -> R,
    ) -> R {
        let Self {
            login,
            accounts,
            selected,
            navigator,
            overlay,
            ..
        } = self;
        let mut ports = LoginPorts {
            accounts,
            events: selected,
            navigator,
            overlay,
        };
        f(login, &mut ports)
    }
}
