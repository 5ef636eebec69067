//! Theme synthesis — six core colors in, a complete semantic token tree out.
//!
//! Derivation runs in a fixed order so every step only reads values that
//! earlier steps have already normalized and enforced:
//!
//! ```text
//! base, surface ──▶ text ──▶ secondary / muted
//!       │
//!       ├──▶ accent, utility ──▶ on-color text
//!       ├──▶ strokes, focus ring, overlays
//!       ├──▶ hover / pressed, subtle tints ──▶ on-subtle text
//!       └──▶ chart series
//!                           └──▶ audit
//! ```
//!
//! Synthesis is total and pure: the same inputs always produce the same
//! `Theme`, and malformed input degrades to black instead of failing.

use serde::Serialize;
use tinct_color::{Rgb, normalize, parse};

use crate::audit::{ContrastReportItem, audit};
use crate::contrast::{
    MUTED_CONTRAST, TEXT_CONTRAST, UI_CONTRAST, black_or_white, ensure_contrast,
    ensure_contrast_all,
};
use crate::input::{CoreColors, CoreNumbers, Mode};
use crate::series::{SERIES_COUNT, build_series};
use crate::state::{InteractionState, tweak};

// ─── Derivation constants ───────────────────────────────────────────────────

/// Chroma kept by secondary text relative to primary text.
const SECONDARY_CHROMA: f32 = 0.6;
/// Chroma kept by muted text (secondary applied twice).
const MUTED_CHROMA: f32 = SECONDARY_CHROMA * SECONDARY_CHROMA;
/// How far secondary text moves toward the background lightness.
///
/// This pull is a tinct choice layered on top of desaturation: without it
/// secondary text keeps the primary lightness and differs only in chroma.
/// Contrast is enforced after the move, so the 4.5:1 floor still holds.
const SECONDARY_FADE: f32 = 0.25;
/// How far muted text moves toward the background lightness.
///
/// Same extra pull as [`SECONDARY_FADE`], stronger. Muted text is enforced
/// at 2.2:1 afterwards, so the fade may be partly undone.
const MUTED_FADE: f32 = 0.45;

/// Opacity of text-on-surface for the subtle/default/strong strokes.
const STROKE_ALPHA: [f32; 3] = [0.12, 0.24, 0.45];
/// Opacity of text-on-surface for the low/medium/high overlays.
const OVERLAY_ALPHA: [f32; 3] = [0.03, 0.06, 0.10];
/// Opacity of a role color in its subtle tint, light mode.
const SUBTLE_ALPHA_LIGHT: f32 = 0.12;
/// Opacity of a role color in its subtle tint, dark mode.
const SUBTLE_ALPHA_DARK: f32 = 0.18;

// ─── Token tree ─────────────────────────────────────────────────────────────

/// A fully synthesized theme.
///
/// Every color is an opaque [`Rgb`]; serializing yields `#rrggbb` strings
/// under camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub mode: Mode,
    pub bg: Backgrounds,
    pub text: TextRoles,
    pub accent: AccentRoles,
    pub utility: UtilityRoles,
    pub stroke: StrokeRoles,
    pub overlay: OverlayRoles,
    pub chart: ChartRoles,
    pub numbers: CoreNumbers,
    pub meta: Meta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Backgrounds {
    pub primary: Rgb,
    pub surface: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextRoles {
    /// Body text on the base background.
    pub primary: Rgb,
    /// Body text on the surface background.
    pub on_surface: Rgb,
    pub secondary: Rgb,
    pub muted: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccentRoles {
    pub primary: Rgb,
    pub hover: Rgb,
    pub pressed: Rgb,
    pub subtle: Rgb,
    pub on_accent: Rgb,
    pub on_subtle: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityRoles {
    pub primary: Rgb,
    pub hover: Rgb,
    pub pressed: Rgb,
    pub subtle: Rgb,
    pub on_utility: Rgb,
    pub on_subtle: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeRoles {
    pub subtle: Rgb,
    pub default: Rgb,
    pub strong: Rgb,
    pub focus: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayRoles {
    pub low: Rgb,
    pub medium: Rgb,
    pub high: Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRoles {
    pub background: Rgb,
    pub series: Vec<Rgb>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub report: Vec<ContrastReportItem>,
}

/// The six colors shared by the accent and utility role groups.
struct Interactive {
    primary: Rgb,
    hover: Rgb,
    pressed: Rgb,
    subtle: Rgb,
    on_primary: Rgb,
    on_subtle: Rgb,
}

impl Interactive {
    fn derive(raw: Rgb, base: Rgb, surface: Rgb, mode: Mode) -> Self {
        let primary = ensure_contrast(raw, base, UI_CONTRAST);
        let on_primary = ensure_contrast(black_or_white(primary), primary, TEXT_CONTRAST);
        let alpha = if mode.is_dark() {
            SUBTLE_ALPHA_DARK
        } else {
            SUBTLE_ALPHA_LIGHT
        };
        let subtle = primary.over(surface, alpha);
        Self {
            primary,
            hover: tweak(primary, mode, InteractionState::Hover),
            pressed: tweak(primary, mode, InteractionState::Pressed),
            subtle,
            on_primary,
            on_subtle: ensure_contrast(primary, subtle, TEXT_CONTRAST),
        }
    }
}

impl From<Interactive> for AccentRoles {
    fn from(i: Interactive) -> Self {
        Self {
            primary: i.primary,
            hover: i.hover,
            pressed: i.pressed,
            subtle: i.subtle,
            on_accent: i.on_primary,
            on_subtle: i.on_subtle,
        }
    }
}

impl From<Interactive> for UtilityRoles {
    fn from(i: Interactive) -> Self {
        Self {
            primary: i.primary,
            hover: i.hover,
            pressed: i.pressed,
            subtle: i.subtle,
            on_utility: i.on_primary,
            on_subtle: i.on_subtle,
        }
    }
}

// ─── Synthesis ──────────────────────────────────────────────────────────────

/// Derive a complete theme from core colors, numeric knobs, and mode.
#[must_use]
pub fn synthesize(core: &CoreColors, numbers: CoreNumbers, mode: Mode) -> Theme {
    // Backgrounds.
    let base = normalize(&core.base);
    let surface = normalize(&core.surface);
    let bg = Backgrounds {
        primary: base,
        surface,
    };

    // Text, one value per background.
    let raw_text = normalize(&core.text);
    let text_primary = ensure_contrast(raw_text, base, TEXT_CONTRAST);
    let text_on_surface = ensure_contrast(raw_text, surface, TEXT_CONTRAST);

    let primary_c = text_primary.to_color();
    let base_c = base.to_color();
    let secondary = primary_c
        .scale_chroma(SECONDARY_CHROMA)
        .approach_lightness(&base_c, SECONDARY_FADE)
        .to_rgb();
    let muted = primary_c
        .scale_chroma(MUTED_CHROMA)
        .approach_lightness(&base_c, MUTED_FADE)
        .to_rgb();
    let text = TextRoles {
        primary: text_primary,
        on_surface: text_on_surface,
        secondary: ensure_contrast(secondary, base, UI_CONTRAST),
        muted: ensure_contrast(muted, base, MUTED_CONTRAST),
    };

    // Accent and utility with their on-colors, states, and tints.
    let accent: AccentRoles =
        Interactive::derive(normalize(&core.accent), base, surface, mode).into();
    let utility: UtilityRoles =
        Interactive::derive(normalize(&core.utility), base, surface, mode).into();

    // Strokes.
    let [subtle_a, default_a, strong_a] = STROKE_ALPHA;
    let default = parse(&core.border).unwrap_or_else(|_| {
        tracing::debug!(border = %core.border, "border unset or invalid, blending from text");
        text_on_surface.over(surface, default_a)
    });
    let stroke = StrokeRoles {
        subtle: text_on_surface.over(surface, subtle_a),
        default,
        strong: ensure_contrast(text_on_surface.over(surface, strong_a), surface, UI_CONTRAST),
        focus: ensure_contrast_all(accent.primary, &[base, surface], UI_CONTRAST),
    };

    // Elevation.
    let [low_a, medium_a, high_a] = OVERLAY_ALPHA;
    let overlay = OverlayRoles {
        low: text_on_surface.over(surface, low_a),
        medium: text_on_surface.over(surface, medium_a),
        high: text_on_surface.over(surface, high_a),
    };

    let chart = ChartRoles {
        background: surface,
        series: build_series(accent.primary, surface, SERIES_COUNT),
    };

    let mut theme = Theme {
        mode,
        bg,
        text,
        accent,
        utility,
        stroke,
        overlay,
        chart,
        numbers,
        meta: Meta { report: Vec::new() },
    };
    theme.meta.report = audit(&theme);

    let failures = theme.failures().count();
    for item in theme.failures() {
        tracing::warn!(
            pair = %item.pair,
            ratio = item.ratio,
            required = item.required,
            "contrast requirement not met"
        );
    }
    tracing::debug!(
        %mode,
        accent = %theme.accent.primary,
        checked = theme.meta.report.len(),
        failures,
        "synthesized theme"
    );

    theme
}

impl Theme {
    /// Resolve a color role by its exported name (`"accent.onAccent"`,
    /// `"chart.series3"`, ...).
    #[must_use]
    pub fn color(&self, role: &str) -> Option<Rgb> {
        let (group, name) = role.split_once('.')?;
        Some(match (group, name) {
            ("background", "primary") => self.bg.primary,
            ("background", "surface") => self.bg.surface,
            ("text", "primary") => self.text.primary,
            ("text", "onSurface") => self.text.on_surface,
            ("text", "secondary") => self.text.secondary,
            ("text", "muted") => self.text.muted,
            ("accent", "primary") => self.accent.primary,
            ("accent", "hover") => self.accent.hover,
            ("accent", "pressed") => self.accent.pressed,
            ("accent", "subtle") => self.accent.subtle,
            ("accent", "onAccent") => self.accent.on_accent,
            ("accent", "onSubtle") => self.accent.on_subtle,
            ("utility", "primary") => self.utility.primary,
            ("utility", "hover") => self.utility.hover,
            ("utility", "pressed") => self.utility.pressed,
            ("utility", "subtle") => self.utility.subtle,
            ("utility", "onUtility") => self.utility.on_utility,
            ("utility", "onSubtle") => self.utility.on_subtle,
            ("stroke", "subtle") => self.stroke.subtle,
            ("stroke", "default") => self.stroke.default,
            ("stroke", "strong") => self.stroke.strong,
            ("stroke", "focus") => self.stroke.focus,
            ("overlay", "low") => self.overlay.low,
            ("overlay", "medium") => self.overlay.medium,
            ("overlay", "high") => self.overlay.high,
            ("chart", "background") => self.chart.background,
            ("chart", series) => {
                let n: usize = series.strip_prefix("series")?.parse().ok()?;
                *self.chart.series.get(n.checked_sub(1)?)?
            }
            _ => return None,
        })
    }

    /// Audit entries that did not reach their required ratio.
    pub fn failures(&self) -> impl Iterator<Item = &ContrastReportItem> {
        self.meta.report.iter().filter(|item| !item.pass)
    }

    /// Whether every audited pair passed.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.failures().next().is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
