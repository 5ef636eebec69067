//! WCAG contrast measurement and enforcement.
//!
//! Two thresholds run through the whole engine:
//!
//! - Body text: contrast ratio >= 4.5:1 ([`TEXT_CONTRAST`])
//! - Large text and non-text UI (borders, icons, focus rings, chart marks):
//!   >= 3.0:1 ([`UI_CONTRAST`])
//!
//! Measurement happens on quantized 8-bit sRGB (WCAG relative luminance),
//! so a ratio always describes the exact hex that gets emitted. Adjustment
//! happens in OKLCH lightness with hue and chroma held, because OKLCH
//! steps are perceptually uniform and keep the color recognizable.

use tinct_color::color::srgb_to_linear;
use tinct_color::{Rgb, normalize, parse};

/// Minimum contrast for normal-size text.
pub const TEXT_CONTRAST: f64 = 4.5;

/// Minimum contrast for large text and non-text UI elements.
pub const UI_CONTRAST: f64 = 3.0;

/// Floor for de-emphasized (muted) text.
pub const MUTED_CONTRAST: f64 = 2.2;

/// Lightness increment of the adjuster's local search.
pub const SEARCH_STEP: f32 = 0.02;

/// Number of increments tried in each direction (±0.80 total).
pub const SEARCH_STEPS: u16 = 40;

/// Rec. 709 weights of linear red, green, and blue in perceived luminance.
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// WCAG relative luminance: 0.0 for black, 1.0 for white.
#[must_use]
pub fn relative_luminance(color: Rgb) -> f64 {
    let (r, g, b) = color.to_srgb();
    [r, g, b]
        .into_iter()
        .zip(LUMA_WEIGHTS)
        .map(|(channel, weight)| weight * f64::from(srgb_to_linear(channel)))
        .sum()
}

/// WCAG contrast ratio, `(brighter + 0.05) / (dimmer + 0.05)`.
///
/// Symmetric in its arguments; ranges from 1.0 (identical luminance) to
/// 21.0 (black on white).
#[must_use]
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Contrast ratio between two color strings.
///
/// Total: returns 1.0 (no contrast) when either side does not parse.
#[must_use]
pub fn contrast_ratio_hex(fg: &str, bg: &str) -> f64 {
    match (parse(fg), parse(bg)) {
        (Ok(fg), Ok(bg)) => contrast_ratio(fg, bg),
        _ => 1.0,
    }
}

/// Pure black or pure white, whichever contrasts more with `bg`.
///
/// One of the two always reaches at least √21 ≈ 4.58:1.
#[must_use]
pub fn black_or_white(bg: Rgb) -> Rgb {
    if contrast_ratio(Rgb::BLACK, bg) >= contrast_ratio(Rgb::WHITE, bg) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Return the color nearest to `fg` that reaches `required` contrast
/// against `bg`.
///
/// An already-compliant `fg` comes back unchanged. Otherwise OKLCH
/// lightness is walked outward from the original in [`SEARCH_STEP`]
/// increments, lighter first then darker, for up to [`SEARCH_STEPS`]
/// increments each way; the first passing candidate wins. If none passes
/// the result is [`black_or_white`] for `bg`.
#[must_use]
pub fn ensure_contrast(fg: Rgb, bg: Rgb, required: f64) -> Rgb {
    if contrast_ratio(fg, bg) >= required {
        return fg;
    }

    let base = fg.to_color();
    for step in 1..=SEARCH_STEPS {
        let delta = SEARCH_STEP * f32::from(step);
        for lightness in [base.l + delta, base.l - delta] {
            let candidate = base.set_lightness(lightness).to_rgb();
            if contrast_ratio(candidate, bg) >= required {
                return candidate;
            }
        }
    }

    let fallback = black_or_white(bg);
    tracing::trace!(%fg, %bg, required, %fallback, "no same-hue lightness reaches target");
    fallback
}

/// [`ensure_contrast`] on color strings; unparseable input is treated as
/// black.
#[must_use]
pub fn ensure_contrast_hex(fg: &str, bg: &str, required: f64) -> Rgb {
    ensure_contrast(normalize(fg), normalize(bg), required)
}

/// Enforce `required` contrast against every background in `bgs`.
///
/// Backgrounds are enforced one after another first. When a later step
/// undoes an earlier one, every lightness from 0 to 1 is swept at the
/// original hue and chroma and the passing value closest to the original
/// lightness is kept. Failing that, every sRGB gray is tried the same way,
/// so any gray that clears all backgrounds is found. With no passing gray
/// the result is whichever of black or white has the best worst-case
/// ratio.
#[must_use]
pub fn ensure_contrast_all(fg: Rgb, bgs: &[Rgb], required: f64) -> Rgb {
    let passes = |c: Rgb| bgs.iter().all(|&bg| contrast_ratio(c, bg) >= required);

    let sequential = bgs
        .iter()
        .fold(fg, |acc, &bg| ensure_contrast(acc, bg, required));
    if passes(sequential) {
        return sequential;
    }

    let base = fg.to_color();
    let mut best: Option<(f32, Rgb)> = None;
    for i in 0..=100u8 {
        let lightness = f32::from(i) / 100.0;
        let candidate = base.set_lightness(lightness).to_rgb();
        if !passes(candidate) {
            continue;
        }
        let distance = (lightness - base.l).abs();
        if best.is_none_or(|(d, _)| distance < d) {
            best = Some((distance, candidate));
        }
    }
    if let Some((_, color)) = best {
        return color;
    }

    let gray = (0..=u8::MAX)
        .map(|v| Rgb::new(v, v, v))
        .filter(|&g| passes(g))
        .min_by(|a, b| {
            let da = (a.to_color().l - base.l).abs();
            let db = (b.to_color().l - base.l).abs();
            da.total_cmp(&db)
        });
    if let Some(gray) = gray {
        tracing::trace!(%fg, required, %gray, "fell back to a neutral gray");
        return gray;
    }

    let worst = |c: Rgb| {
        bgs.iter()
            .map(|&bg| contrast_ratio(c, bg))
            .fold(f64::INFINITY, f64::min)
    };
    let fallback = if worst(Rgb::BLACK) >= worst(Rgb::WHITE) {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    };
    tracing::trace!(%fg, required, %fallback, "no lightness satisfies every background");
    fallback
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
