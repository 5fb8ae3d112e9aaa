// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;
use state::app_state::AppState;

fn main() {
    // RUST_LOG overrides the default `info` level, e.g. RUST_LOG=calculator=debug
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Fleet ROI Calculator (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Successfully loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {:#}. Using built-in defaults.", e);
            AppConfig::default()
        }
    };

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.window.title.clone())
            .with_inner_size(LogicalSize::new(app_config.window.width, app_config.window.height)),
    );

    // Each card owns its inputs; only configuration is shared through context.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(AppState::from_config(&app_config))
        .launch(App);

    tracing::info!("Fleet ROI Calculator finished.");
}
