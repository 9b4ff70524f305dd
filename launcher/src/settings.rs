//! Settings view and its async preparation.
//!
//! The settings view is only entered after [`prepare`] has loaded its data;
//! a navigation whose destination is settings waits for that to finish.

use egui::Ui;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::lang;

/// Launcher settings as shown in the settings view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Keep the session signed in across launcher restarts.
    pub remember_login: bool,
    /// Allocated game memory in megabytes.
    pub memory_mb: u32,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            remember_login: true,
            memory_mb: 3072,
        }
    }
}

/// Load the settings from disk, falling back to defaults.
pub async fn prepare() -> LauncherSettings {
    let path = match crate::paths::settings_path() {
        Ok(path) => path,
        Err(err) => {
            warn!("Could not resolve settings path: {err}");
            return LauncherSettings::default();
        }
    };
    match std::fs::read_to_string(&path) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("Settings file is corrupt, using defaults: {err}");
            LauncherSettings::default()
        }),
        Err(_) => LauncherSettings::default(),
    }
}

/// Write the settings back to disk.
pub fn save(settings: &LauncherSettings) -> anyhow::Result<()> {
    let path = crate::paths::settings_path()?;
    let raw = serde_json::to_string_pretty(settings)?;
    std::fs::write(&path, raw)?;
    Ok(())
}

/// What the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    Back,
}

/// Settings screen state.
#[derive(Debug, Default)]
pub struct SettingsScreen {
    /// Whether the view's data has been loaded.
    pub prepared: bool,
    pub settings: LauncherSettings,
}

impl SettingsScreen {
    /// Show the settings view.
    pub fn show(&mut self, ui: &mut Ui) -> SettingsAction {
        let mut action = SettingsAction::None;

        ui.heading(lang::text("settings.title"));
        ui.add_space(10.0);

        ui.checkbox(
            &mut self.settings.remember_login,
            lang::text("settings.rememberLogin"),
        );
        ui.add(
            egui::Slider::new(&mut self.settings.memory_mb, 1024..=16384)
                .text(lang::text("settings.memory")),
        );

        ui.add_space(15.0);
        if ui.button(lang::text("settings.back")).clicked() {
            action = SettingsAction::Back;
        }

        action
    }
}
