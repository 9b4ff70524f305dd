use crate::paths;

use super::*;

impl LauncherApp {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let api = ApiClient::new(
            std::env::var("EMBER_AUTH_URL")
                .unwrap_or_else(|_| "https://account.emberlauncher.org/api".to_string()),
        );
        tracing::info!("Account service URL: {}", api.base_url());

        let accounts_path = match paths::accounts_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!(
                    "Could not resolve data directory ({err}), keeping accounts in ./accounts.json"
                );
                std::path::PathBuf::from("accounts.json")
            }
        };
        let accounts = AccountRegistry::load(accounts_path);

        let selected = SelectedAccount {
            account: accounts.selected().cloned(),
        };
        // Returning users land on the main view; first runs get the welcome.
        let current_view = if selected.account.is_some() {
            View::Landing
        } else {
            View::Welcome
        };

        Self {
            api,
            login: LoginController::default(),
            login_screen: LoginScreen::default(),
            login_options: LoginOptionsScreen::default(),
            landing: LandingScreen,
            settings: SettingsScreen::default(),
            accounts,
            selected,
            overlay: OverlayState::default(),
            navigator: Navigator::default(),
            current_view,
            preparing_settings: false,
            channels: AppStateChannels::new(),
        }
    }
}
