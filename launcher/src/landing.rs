//! Landing view: the selected account and entry points back into login.

use egui::{Color32, Ui};
use ember_types::{Account, AccountKind};

use crate::lang;

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingAction {
    None,
    /// Re-run the login flow to pick a different account.
    SwitchAccount,
    OpenSettings,
}

/// Landing screen.
#[derive(Debug, Default)]
pub struct LandingScreen;

impl LandingScreen {
    /// Show the landing view for the currently selected account.
    pub fn show(&mut self, ui: &mut Ui, account: Option<&Account>) -> LandingAction {
        let mut action = LandingAction::None;

        ui.heading(lang::text("landing.title"));
        ui.add_space(10.0);

        match account {
            Some(account) => {
                ui.label(&account.display_name);
                if account.kind == AccountKind::Offline {
                    ui.colored_label(Color32::GRAY, lang::text("login.offlineOption"));
                }
            }
            None => {
                ui.colored_label(Color32::GRAY, lang::text("landing.noAccount"));
            }
        }

        ui.add_space(15.0);

        ui.horizontal(|ui| {
            if ui.button(lang::text("landing.switchAccount")).clicked() {
                action = LandingAction::SwitchAccount;
            }
            if ui.button(lang::text("landing.settings")).clicked() {
                action = LandingAction::OpenSettings;
            }
        });

        action
    }
}
