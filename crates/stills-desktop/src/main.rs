//! Stills Desktop Application
//!
//! Pick a profile from the carousel, write a reminder and tag it.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stills=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Stills...");

    let window = WindowBuilder::new()
        .with_title("Stills")
        .with_inner_size(LogicalSize::new(720.0, 640.0));
    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
