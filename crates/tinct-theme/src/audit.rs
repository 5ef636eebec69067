//! Contrast audit — re-measures the emitted colors of critical role pairs.
//!
//! The audit reads the finished [`Theme`] through its role names rather
//! than trusting the synthesizer's intermediate values, so a report entry
//! always describes exactly what a consumer will render.

use serde::Serialize;
use tinct_color::Rgb;

use crate::contrast::{MUTED_CONTRAST, TEXT_CONTRAST, UI_CONTRAST, contrast_ratio};
use crate::theme::Theme;

/// Fixed `(foreground, background, required)` pairs checked on every theme.
///
/// Chart series are appended per series against `chart.background`.
pub const AUDITED_PAIRS: &[(&str, &str, f64)] = &[
    ("text.primary", "background.primary", TEXT_CONTRAST),
    ("text.onSurface", "background.surface", TEXT_CONTRAST),
    ("text.secondary", "background.primary", UI_CONTRAST),
    ("text.muted", "background.primary", MUTED_CONTRAST),
    ("accent.primary", "background.primary", UI_CONTRAST),
    ("accent.onAccent", "accent.primary", TEXT_CONTRAST),
    ("accent.onSubtle", "accent.subtle", TEXT_CONTRAST),
    ("utility.primary", "background.primary", UI_CONTRAST),
    ("utility.onUtility", "utility.primary", TEXT_CONTRAST),
    ("utility.onSubtle", "utility.subtle", TEXT_CONTRAST),
    ("stroke.strong", "background.surface", UI_CONTRAST),
    ("stroke.focus", "background.primary", UI_CONTRAST),
    ("stroke.focus", "background.surface", UI_CONTRAST),
];

/// One audited foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReportItem {
    /// `"<foreground> on <background>"`.
    pub pair: String,
    pub foreground_role: String,
    pub background_role: String,
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
    pub required: f64,
    pub pass: bool,
}

impl ContrastReportItem {
    #[must_use]
    pub fn measure(fg_role: &str, fg: Rgb, bg_role: &str, bg: Rgb, required: f64) -> Self {
        let ratio = contrast_ratio(fg, bg);
        Self {
            pair: format!("{fg_role} on {bg_role}"),
            foreground_role: fg_role.to_owned(),
            background_role: bg_role.to_owned(),
            foreground: fg,
            background: bg,
            ratio,
            required,
            pass: ratio >= required,
        }
    }
}

/// Measure every audited pair of `theme`.
///
/// Purely diagnostic; a failing entry is reported, never raised. The
/// existing `theme.meta.report` is ignored.
#[must_use]
pub fn audit(theme: &Theme) -> Vec<ContrastReportItem> {
    let series = (1..=theme.chart.series.len())
        .map(|n| (format!("chart.series{n}"), "chart.background", UI_CONTRAST));
    let pairs = AUDITED_PAIRS
        .iter()
        .map(|&(fg, bg, required)| (fg.to_owned(), bg, required))
        .chain(series);

    pairs
        .filter_map(|(fg_role, bg_role, required)| {
            let fg = theme.color(&fg_role)?;
            let bg = theme.color(bg_role)?;
            Some(ContrastReportItem::measure(&fg_role, fg, bg_role, bg, required))
        })
        .collect()
}
