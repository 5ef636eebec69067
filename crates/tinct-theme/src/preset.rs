//! Named preset configurations — ready-to-use core color sets.
//!
//! Each preset is a complete [`ThemeConfig`]; pass it to
//! [`ThemeConfig::synthesize`] or edit it first.

use crate::config::ThemeConfig;
use crate::input::{CoreColors, CoreNumbers, Mode};

fn preset(mode: Mode, colors: [&str; 6]) -> ThemeConfig {
    let [base, surface, text, accent, utility, border] = colors;
    ThemeConfig {
        mode,
        colors: CoreColors::new(base, surface, text, accent, utility, border),
        numbers: CoreNumbers::default(),
    }
}

/// Look up a builtin preset by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn builtin_preset(name: &str) -> Option<ThemeConfig> {
    Some(match name {
        "default" | "default-light" => ThemeConfig::default(),
        "default-dark" => preset(
            Mode::Dark,
            ["#0b1120", "#111827", "#e5e7eb", "#60a5fa", "#a78bfa", "#334155"],
        ),
        "ocean" => preset(
            Mode::Light,
            ["#f0f9ff", "#ffffff", "#0c4a6e", "#0284c7", "#0d9488", "#bae6fd"],
        ),
        "forest" => preset(
            Mode::Dark,
            ["#0f1a14", "#16241c", "#e7f0e9", "#4ade80", "#facc15", "#2f4a3a"],
        ),
        "sunset" => preset(
            Mode::Light,
            ["#fff7ed", "#ffffff", "#431407", "#ea580c", "#db2777", "#fed7aa"],
        ),
        "mono" => preset(
            Mode::Light,
            ["#ffffff", "#f5f5f5", "#171717", "#404040", "#737373", "#d4d4d4"],
        ),
        _ => return None,
    })
}

/// List all available builtin preset names.
#[must_use]
pub const fn builtin_names() -> &'static [&'static str] {
    &[
        "default",
        "default-light",
        "default-dark",
        "ocean",
        "forest",
        "sunset",
        "mono",
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
