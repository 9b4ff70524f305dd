use std::time::Instant;

use egui::{CentralPanel, Color32, Context};

use crate::landing::LandingAction;
use crate::lang;
use crate::login::controller::SubmitDispatch;
use crate::login::LoginAction;
use crate::login_options::LoginOptionsAction;
use crate::settings::SettingsAction;
use crate::views::{View, VIEW_FADE_MS};

use super::*;

impl LauncherApp {
    /// Render the current view, the overlay and the transition curtain.
    pub(super) fn render(&mut self, ctx: &Context) {
        match self.current_view {
            View::Welcome => self.render_welcome(ctx),
            View::LoginOptions => {
                let action = self.login_options.show(ctx);
                CentralPanel::default().show(ctx, |_ui| {});
                self.handle_login_options(action);
            }
            View::Login => {
                CentralPanel::default().show(ctx, |_ui| {});
                let action = self.login_screen.show(ctx, &mut self.login);
                self.handle_login(ctx, action);
            }
            View::Landing => {
                let mut action = LandingAction::None;
                CentralPanel::default().show(ctx, |ui| {
                    action = self.landing.show(ui, self.selected.account.as_ref());
                });
                self.handle_landing(action);
            }
            View::Settings => {
                let mut action = SettingsAction::None;
                CentralPanel::default().show(ctx, |ui| {
                    action = self.settings.show(ui);
                });
                if action == SettingsAction::Back {
                    if let Err(err) = crate::settings::save(&self.settings.settings) {
                        tracing::warn!("Could not save settings: {err}");
                    }
                    self.navigator
                        .begin(View::Settings, View::Landing, VIEW_FADE_MS, VIEW_FADE_MS);
                }
            }
        }

        self.render_overlay(ctx);
        self.render_transition_curtain(ctx);
    }

    fn render_welcome(&mut self, ctx: &Context) {
        let mut start = false;
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(120.0);
                ui.heading(lang::text("welcome.title"));
                ui.label(lang::text("welcome.body"));
                ui.add_space(20.0);
                if ui.button(lang::text("welcome.continue")).clicked() {
                    start = true;
                }
            });
        });
        if start {
            self.open_login_options(View::Welcome, false);
        }
    }

    /// Wire the chooser for a new login flow and navigate to it.
    pub(super) fn open_login_options(&mut self, from: View, cancellable: bool) {
        self.login_options = LoginOptionsScreen {
            view_on_login_success: View::Landing,
            view_on_login_cancel: if cancellable { from } else { View::LoginOptions },
            view_on_cancel: from,
            cancellable,
        };
        self.navigator
            .begin(from, View::LoginOptions, VIEW_FADE_MS, VIEW_FADE_MS);
    }

    fn handle_login_options(&mut self, action: LoginOptionsAction) {
        match action {
            LoginOptionsAction::None => {}
            LoginOptionsAction::SignIn | LoginOptionsAction::PlayOffline => {
                self.login
                    .set_view_on_success(self.login_options.view_on_login_success);
                self.login
                    .set_view_on_cancel(self.login_options.view_on_login_cancel);
                let previous = self.selected.account.as_ref().map(|a| a.id.clone());
                self.login.set_on_cancel(move || match previous {
                    Some(id) => tracing::info!("Login cancelled, keeping account {id}"),
                    None => tracing::info!("Login cancelled"),
                });
                self.login
                    .set_offline_mode(action == LoginOptionsAction::PlayOffline);
                self.navigator
                    .begin(View::LoginOptions, View::Login, VIEW_FADE_MS, VIEW_FADE_MS);
            }
            LoginOptionsAction::Cancel => {
                self.login.clear_fields();
                self.navigator.begin(
                    View::LoginOptions,
                    self.login_options.view_on_cancel,
                    VIEW_FADE_MS,
                    VIEW_FADE_MS,
                );
            }
        }
    }

    fn handle_login(&mut self, ctx: &Context, action: LoginAction) {
        match action {
            LoginAction::None => {}
            LoginAction::Submit => match self.login.submit(Instant::now()) {
                SubmitDispatch::Online { username, password } => {
                    self.begin_remote_login(ctx, username, password);
                }
                // The offline path is completed by the controller's tick.
                SubmitDispatch::Offline | SubmitDispatch::Blocked => {}
            },
            LoginAction::Cancel => {
                let current = self.current_view;
                self.with_ports(|login, ports| login.cancel(ports, current));
            }
        }
    }

    fn handle_landing(&mut self, action: LandingAction) {
        match action {
            LandingAction::None => {}
            LandingAction::SwitchAccount => self.open_login_options(View::Landing, true),
            LandingAction::OpenSettings => {
                self.navigator
                    .begin(View::Landing, View::Settings, VIEW_FADE_MS, VIEW_FADE_MS);
            }
        }
    }

    /// Full-screen fade painted over everything during a view switch.
    fn render_transition_curtain(&self, ctx: &Context) {
        let Some(switch) = self.navigator.pending else {
            return;
        };
        let opacity = switch.curtain_opacity(Instant::now());
        if opacity <= 0.0 {
            return;
        }
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("view_fade"),
        ));
        let alpha = (opacity * 255.0) as u8;
        painter.rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(alpha));
    }
}
