use std::time::{Duration, Instant};

use egui::Context;

use crate::login::controller::SubmissionState;
use crate::state::{spawn_task, AppMessage};
use crate::views::View;

use super::*;

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.drain_messages(ctx);

        let now = Instant::now();
        self.with_ports(|login, ports| login.tick(ports, now));

        self.advance_view_switch(ctx);

        self.render(ctx);

        // Timed transitions are driven by tick; keep frames coming while
        // one is pending.
        if !matches!(
            self.login.submission(),
            SubmissionState::Idle | SubmissionState::Failed
        ) || self.navigator.pending.is_some()
        {
            ctx.request_repaint();
        }
    }
}

impl LauncherApp {
    /// Apply messages queued by async operations.
    fn drain_messages(&mut self, ctx: &Context) {
        while let Ok(message) = self.channels.rx.try_recv() {
            match message {
                AppMessage::LoginResult(result) => {
                    let now = Instant::now();
                    self.with_ports(|login, ports| login.remote_result(ports, result, now));
                    ctx.request_repaint();
                }
                AppMessage::SettingsPrepared(settings) => {
                    self.settings.settings = settings;
                    self.settings.prepared = true;
                    self.preparing_settings = false;
                    ctx.request_repaint();
                }
            }
        }
    }

    /// Start the remote login for an accepted online submission.
    pub(super) fn begin_remote_login(&mut self, ctx: &Context, username: String, password: String) {
        let api = self.api.clone();
        let tx = self.channels.sender();
        let ctx = ctx.clone();

        spawn_task(async move {
            let result = api.login(username, password).await;
            let _ = tx.send(AppMessage::LoginResult(result));
            ctx.request_repaint();
        });
    }

    /// Load the settings view's data in the background.
    fn begin_prepare_settings(&mut self, ctx: &Context) {
        tracing::info!("Preparing settings view...");
        let tx = self.channels.sender();
        let ctx = ctx.clone();

        spawn_task(async move {
            let settings = crate::settings::prepare().await;
            let _ = tx.send(AppMessage::SettingsPrepared(settings));
            ctx.request_repaint();
        });
    }

    /// Advance any pending view transition, finishing it once the fade has
    /// run out and the destination is ready.
    fn advance_view_switch(&mut self, ctx: &Context) {
        let Some(mut switch) = self.navigator.pending else {
            return;
        };
        let now = Instant::now();
        let elapsed = now.duration_since(switch.started);

        // The visible view flips at the fade midpoint.
        if !switch.flipped && elapsed >= Duration::from_millis(u64::from(switch.out_ms)) {
            switch.flipped = true;
            self.current_view = switch.to;
            self.navigator.pending = Some(switch);
        }

        if !switch_finished(&switch, now, self.settings.prepared) {
            // Once the fade has run out, what is left is the settings view
            // waiting for its data; kick off the load if it has not
            // started yet.
            if elapsed >= switch.total() && !self.preparing_settings {
                self.preparing_settings = true;
                self.begin_prepare_settings(ctx);
            }
            ctx.request_repaint();
            return;
        }

        self.finish_view_switch();
    }

    /// Transition done: commit the destination and, for the login success
    /// path, let the controller reset itself.
    fn finish_view_switch(&mut self) {
        let Some(switch) = self.navigator.pending.take() else {
            return;
        };
        self.current_view = switch.to;
        if self.login.submission() == SubmissionState::Navigating {
            self.login.navigation_complete();
        }
    }
}

/// Whether a pending transition may commit its destination. The fade has
/// to have run out, and the settings view additionally needs its data
/// loaded.
fn switch_finished(switch: &crate::views::ViewSwitch, now: Instant, settings_prepared: bool) -> bool {
    now.duration_since(switch.started) >= switch.total()
        && (switch.to != View::Settings || settings_prepared)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewSwitch;

    fn switch_to(to: View, started: Instant) -> ViewSwitch {
        ViewSwitch {
            from: View::Login,
            to,
            out_ms: 100,
            in_ms: 100,
            started,
            flipped: true,
        }
    }

    #[test]
    fn settings_switch_waits_for_preparation() {
        let start = Instant::now();
        let switch = switch_to(View::Settings, start);
        let done = start + Duration::from_millis(200);

        // The fade has run out, but the destination is not ready yet; the
        // controller's post-navigation reset must not run.
        assert!(!switch_finished(&switch, done, false));
        assert!(switch_finished(&switch, done, true));
    }

    #[test]
    fn other_destinations_finish_on_the_fade_alone() {
        let start = Instant::now();
        let switch = switch_to(View::Landing, start);

        assert!(!switch_finished(&switch, start + Duration::from_millis(50), false));
        assert!(switch_finished(&switch, start + Duration::from_millis(200), false));
    }
}
