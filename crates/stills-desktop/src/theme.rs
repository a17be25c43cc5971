//! Theme configuration for the desktop app

use std::sync::OnceLock;

pub use stills_core::models::ThemeMode;

static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System => {
            if *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode) {
                ResolvedTheme::Dark
            } else {
                ResolvedTheme::Light
            }
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    use std::process::Command;

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}. Using light.", e);
            false
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> bool {
    // GTK_THEME is the only cheap signal outside macOS
    let is_dark = std::env::var("GTK_THEME")
        .map(|theme| theme.to_lowercase().contains("dark"))
        .unwrap_or(false);
    tracing::debug!(
        "System theme detected: {}",
        if is_dark { "dark" } else { "light" }
    );
    is_dark
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_card: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub chip_bg: &'static str,
    pub chip_text: &'static str,
    pub chip_selected_bg: &'static str,
    pub chip_selected_text: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub overlay: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#f1f3f4",
    bg_card: "rgba(255, 255, 255, 0.85)",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    border: "#dadce0",
    chip_bg: "rgba(60, 64, 67, 0.12)",
    chip_text: "#1a1a1a",
    chip_selected_bg: "#ffffff",
    chip_selected_text: "#000000",
    accent: "#4f46e5",
    accent_text: "#ffffff",
    overlay: "rgba(255, 255, 255, 0.95)",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#1a1a1a",
    bg_card: "rgba(45, 45, 45, 0.85)",
    text_primary: "#e8eaed",
    text_secondary: "#9aa0a6",
    border: "#3c4043",
    chip_bg: "rgba(255, 255, 255, 0.14)",
    chip_text: "#e8eaed",
    chip_selected_bg: "#ffffff",
    chip_selected_text: "#000000",
    accent: "#818cf8",
    accent_text: "#1a1a1a",
    overlay: "rgba(36, 36, 36, 0.95)",
};

impl ResolvedTheme {
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}
