//! Ember launcher application.
//!
//! Native desktop launcher: account sign-in (online or offline), account
//! persistence and the views around them.

#![warn(clippy::all, rust_2018_idioms)]

mod accounts;
mod api;
mod app;
mod landing;
mod lang;
mod login;
mod login_options;
mod paths;
mod settings;
mod state;
mod views;

use app::LauncherApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Ember launcher");

    // The UI runs on the eframe event loop; remote auth and settings
    // preparation are spawned onto this runtime.
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let _guard = runtime.enter();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([980.0, 600.0])
            .with_title("Ember Launcher"),
        ..Default::default()
    };

    eframe::run_native(
        "Ember Launcher",
        native_options,
        Box::new(|cc| Ok(Box::new(LauncherApp::new(cc)))),
    )
}
