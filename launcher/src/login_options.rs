//! Sign-in method chooser.
//!
//! Entry point into the login flow: the caller configures where a
//! successful or cancelled login should land, then this view hands the
//! user to the credential form in either online or offline mode.

use egui::{Align2, Context, Vec2, Window};

use crate::lang;
use crate::views::View;

/// What the user picked this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOptionsAction {
    None,
    /// Online sign-in with the credential form.
    SignIn,
    /// Credential form with offline mode pre-enabled.
    PlayOffline,
    Cancel,
}

/// Login options screen state.
#[derive(Debug, Clone, Copy)]
pub struct LoginOptionsScreen {
    /// Where a successful login from here should land.
    pub view_on_login_success: View,
    /// Where cancelling the credential form should land.
    pub view_on_login_cancel: View,
    /// Where cancelling this chooser should land.
    pub view_on_cancel: View,
    /// Whether the chooser itself can be backed out of.
    pub cancellable: bool,
}

impl Default for LoginOptionsScreen {
    fn default() -> Self {
        Self {
            view_on_login_success: View::Landing,
            view_on_login_cancel: View::LoginOptions,
            view_on_cancel: View::Landing,
            cancellable: false,
        }
    }
}

impl LoginOptionsScreen {
    /// Show the chooser and return the selected action.
    pub fn show(&mut self, ctx: &Context) -> LoginOptionsAction {
        let mut action = LoginOptionsAction::None;

        Window::new(lang::text("loginOptions.title"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.add_space(5.0);

                if ui.button(lang::text("loginOptions.signIn")).clicked() {
                    action = LoginOptionsAction::SignIn;
                }
                if ui.button(lang::text("loginOptions.playOffline")).clicked() {
                    action = LoginOptionsAction::PlayOffline;
                }

                if self.cancellable {
                    ui.add_space(10.0);
                    if ui.button(lang::text("loginOptions.cancel")).clicked() {
                        action = LoginOptionsAction::Cancel;
                    }
                }
            });

        action
    }
}
