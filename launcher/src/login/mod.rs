//! Login view: credential entry around the submission state machine.

pub mod controller;
pub mod offline;
pub mod validation;

use std::time::Instant;

use egui::{Align2, Color32, Context, Vec2, Window};

use crate::lang;
use controller::{LoginController, SubmissionState};

/// How long the error shake animation runs.
const SHAKE_DURATION: f32 = 0.4;

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit,
    Cancel,
}

/// Login screen widgets and animation state.
///
/// All form logic lives in [`LoginController`]; this type only renders it
/// and reports user actions back to the app.
pub struct LoginScreen {
    /// Remember-option checkbox.
    pub remember: bool,
    username_shake_seen: u32,
    password_shake_seen: u32,
    username_shake_at: Option<Instant>,
    password_shake_at: Option<Instant>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            remember: true,
            username_shake_seen: 0,
            password_shake_seen: 0,
            username_shake_at: None,
            password_shake_at: None,
        }
    }
}

impl LoginScreen {
    /// Show the login screen and return the action the user requested.
    pub fn show(&mut self, ctx: &Context, login: &mut LoginController) -> LoginAction {
        let now = Instant::now();
        self.consume_shakes(login, now);

        let mut action = LoginAction::None;
        let enabled = login.form_enabled();

        Window::new(lang::text("login.title"))
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                let mut submit_requested = false;

                ui.label(lang::text("login.username.label"));
                let username_response =
                    ui.add_enabled(enabled, egui::TextEdit::singleline(&mut login.username));
                if username_response.changed() {
                    login.username_changed();
                }
                if username_response.lost_focus() {
                    login.username_blur();
                    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_requested = true;
                    }
                }
                self.error_label(ui, login.username_error.as_ref(), self.username_shake_at, now);

                ui.label(lang::text("login.password.label"));
                let password_enabled = enabled && !login.offline_mode();
                let password_response = ui.add_enabled(
                    password_enabled,
                    egui::TextEdit::singleline(&mut login.password).password(true),
                );
                if password_response.changed() {
                    login.password_changed();
                }
                if password_response.lost_focus() {
                    login.password_blur();
                    if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_requested = true;
                    }
                }
                self.error_label(ui, login.password_error.as_ref(), self.password_shake_at, now);

                ui.add_space(5.0);

                let mut offline = login.offline_mode();
                if ui
                    .add_enabled(
                        enabled,
                        egui::Checkbox::new(&mut offline, lang::text("login.offlineOption")),
                    )
                    .changed()
                {
                    login.set_offline_mode(offline);
                }

                ui.add_enabled(
                    enabled,
                    egui::Checkbox::new(&mut self.remember, lang::text("login.rememberOption")),
                );

                ui.add_space(10.0);

                ui.horizontal(|ui| {
                    let submit = ui.add_enabled(
                        enabled && login.submit_enabled(),
                        egui::Button::new(login.submit_label()),
                    );
                    if submit.clicked() || submit_requested {
                        action = LoginAction::Submit;
                    }

                    if login.cancel_enabled() {
                        let cancel =
                            ui.add_enabled(enabled, egui::Button::new(lang::text("login.cancel")));
                        if cancel.clicked() {
                            action = LoginAction::Cancel;
                        }
                    }

                    match login.submission() {
                        SubmissionState::Submitting { .. } => {
                            ui.spinner();
                        }
                        SubmissionState::Succeeded { .. } | SubmissionState::Navigating => {
                            ui.colored_label(Color32::from_rgb(80, 200, 120), "\u{2714}");
                        }
                        _ => {}
                    }
                });
            });

        if self.username_shake_at.is_some() || self.password_shake_at.is_some() {
            ctx.request_repaint();
        }

        action
    }

    /// Pick up new shake requests from the controller and drop finished
    /// ones so repaints stop.
    fn consume_shakes(&mut self, login: &LoginController, now: Instant) {
        if login.username_shake != self.username_shake_seen {
            self.username_shake_seen = login.username_shake;
            self.username_shake_at = Some(now);
        }
        if login.password_shake != self.password_shake_seen {
            self.password_shake_seen = login.password_shake;
            self.password_shake_at = Some(now);
        }
        for at in [&mut self.username_shake_at, &mut self.password_shake_at] {
            if at.is_some_and(|started| now.duration_since(started).as_secs_f32() >= SHAKE_DURATION)
            {
                *at = None;
            }
        }
    }

    /// Inline error message with a decaying horizontal shake.
    fn error_label(
        &self,
        ui: &mut egui::Ui,
        error: Option<&validation::FieldError>,
        shake_at: Option<Instant>,
        now: Instant,
    ) {
        let Some(error) = error else { return };
        let offset = shake_offset(shake_at, now);
        ui.horizontal(|ui| {
            ui.add_space(offset);
            ui.colored_label(Color32::RED, error.message());
        });
    }
}

/// Horizontal displacement of a shaking error label, decaying to zero.
fn shake_offset(shake_at: Option<Instant>, now: Instant) -> f32 {
    let Some(started) = shake_at else { return 0.0 };
    let t = now.duration_since(started).as_secs_f32();
    if t >= SHAKE_DURATION {
        return 0.0;
    }
    let decay = 1.0 - t / SHAKE_DURATION;
    ((t * 50.0).sin() * 6.0 * decay).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn shake_decays_to_zero() {
        let start = Instant::now();
        let early = shake_offset(Some(start), start + Duration::from_millis(50));
        assert!(early >= 0.0);
        assert_eq!(
            shake_offset(Some(start), start + Duration::from_millis(500)),
            0.0
        );
        assert_eq!(shake_offset(None, start), 0.0);
    }
}
