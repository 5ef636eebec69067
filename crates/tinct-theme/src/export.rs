//! Token export — the flat, versioned name → value mapping consumers apply.
//!
//! Names are stable: consumers bind style variables to them directly.
//! Colors export as `#rrggbb`; numbers carry their unit suffix.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::theme::Theme;

/// Version of the exported token vocabulary. Bumped whenever a name is
/// added, removed, or changes meaning.
pub const TOKEN_SCHEMA_VERSION: u32 = 1;

/// Every exported color role except the chart series.
pub const COLOR_ROLES: &[&str] = &[
    "background.primary",
    "background.surface",
    "text.primary",
    "text.onSurface",
    "text.secondary",
    "text.muted",
    "accent.primary",
    "accent.hover",
    "accent.pressed",
    "accent.subtle",
    "accent.onAccent",
    "accent.onSubtle",
    "utility.primary",
    "utility.hover",
    "utility.pressed",
    "utility.subtle",
    "utility.onUtility",
    "utility.onSubtle",
    "stroke.subtle",
    "stroke.default",
    "stroke.strong",
    "stroke.focus",
    "overlay.low",
    "overlay.medium",
    "overlay.high",
    "chart.background",
];

/// Flatten `theme` into its exported token mapping.
#[must_use]
pub fn export_tokens(theme: &Theme) -> BTreeMap<String, String> {
    let mut tokens: BTreeMap<String, String> = COLOR_ROLES
        .iter()
        .filter_map(|&role| Some((role.to_owned(), theme.color(role)?.to_hex())))
        .collect();

    for (i, color) in theme.chart.series.iter().enumerate() {
        tokens.insert(format!("chart.series{}", i + 1), color.to_hex());
    }

    let n = theme.numbers;
    tokens.insert("radius.base".to_owned(), format!("{}rem", n.radius));
    tokens.insert("stroke.width".to_owned(), format!("{}px", n.stroke_width));
    tokens.insert("focus.width".to_owned(), format!("{}px", n.focus_width));
    tokens
}

/// CSS custom-property name for a token: `accent.onAccent` →
/// `--accent-on-accent`, `chart.series1` → `--chart-series-1`.
#[must_use]
pub fn css_variable(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 4);
    out.push_str("--");
    let mut prev: Option<char> = None;
    for ch in token.chars() {
        match ch {
            '.' | '_' => out.push('-'),
            c if c.is_ascii_uppercase() => {
                out.push('-');
                out.push(c.to_ascii_lowercase());
            }
            c if c.is_ascii_digit() && prev.is_some_and(|p| !p.is_ascii_digit()) => {
                out.push('-');
                out.push(c);
            }
            c => out.push(c),
        }
        prev = Some(ch);
    }
    out
}

/// Render a token mapping as a CSS rule of custom properties.
#[must_use]
pub fn to_css(tokens: &BTreeMap<String, String>, selector: &str) -> String {
    let mut css = format!("{selector} {{\n");
    for (name, value) in tokens {
        let _ = writeln!(css, "  {}: {value};", css_variable(name));
    }
    css.push_str("}\n");
    css
}
