use egui::{Align2, Context, Vec2, Window};

use super::*;

impl LauncherApp {
    /// Render the error overlay, if one is up. Its action re-enables the
    /// login form and dismisses the overlay; nothing is retried
    /// automatically.
    pub(super) fn render_overlay(&mut self, ctx: &Context) {
        let Some(content) = self.overlay.content.clone() else {
            return;
        };

        Window::new(&content.title)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&content.desc);
                ui.add_space(10.0);
                if ui.button(&content.action_label).clicked() {
                    self.overlay.content = None;
                    self.login.overlay_dismissed();
                }
            });
    }
}
