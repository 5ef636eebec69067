//! Data-visualization palette — evenly spaced hues seeded by the accent.
//!
//! Series `i` of `count` takes the accent's hue rotated by `i * 360/count`
//! degrees. Chroma and lightness are clamped into a balanced band so an
//! extreme accent (neon, near-white, near-black) still produces calm,
//! distinguishable marks, and every mark is then enforced to UI contrast
//! against the chart background.

use tinct_color::{Color, Rgb};

use crate::contrast::{UI_CONTRAST, ensure_contrast};

/// Number of chart series in an exported theme.
pub const SERIES_COUNT: usize = 6;

/// Chroma band for series colors.
pub const SERIES_CHROMA: (f32, f32) = (0.04, 0.20);

/// Lightness band for series colors.
pub const SERIES_LIGHTNESS: (f32, f32) = (0.35, 0.75);

/// The unadjusted series colors: rotated hue, clamped chroma and lightness.
///
/// An achromatic accent (gray, black, white) seeds from hue 0.
#[must_use]
pub fn series_seeds(accent: Rgb, count: usize) -> Vec<Color> {
    if count == 0 {
        return Vec::new();
    }
    let seed = accent.to_color();
    let hue = if seed.is_achromatic() { 0.0 } else { seed.h };
    let l = seed.l.clamp(SERIES_LIGHTNESS.0, SERIES_LIGHTNESS.1);
    let c = seed.c.clamp(SERIES_CHROMA.0, SERIES_CHROMA.1);
    let step = 360.0 / count as f32;

    (0..count)
        .map(|i| Color::oklch(l, c, hue).shift_hue(step * i as f32))
        .collect()
}

/// Build `count` chart colors legible against `background`.
#[must_use]
pub fn build_series(accent: Rgb, background: Rgb, count: usize) -> Vec<Rgb> {
    series_seeds(accent, count)
        .into_iter()
        .map(|seed| ensure_contrast(seed.to_rgb(), background, UI_CONTRAST))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio;
    use tinct_color::hue_diff;

    fn rgb(hex: &str) -> Rgb {
        hex.parse().unwrap()
    }

    #[test]
    fn seeds_are_sixty_degrees_apart() {
        let seeds = series_seeds(rgb("#2563eb"), SERIES_COUNT);
        assert_eq!(seeds.len(), 6);
        for pair in seeds.windows(2) {
            let d = hue_diff(pair[0].h, pair[1].h);
            assert!((d - 60.0).abs() < 0.01, "spacing {d}");
        }
        let wrap = hue_diff(seeds[5].h, seeds[0].h);
        assert!((wrap - 60.0).abs() < 0.01);
    }

    #[test]
    fn first_seed_keeps_accent_hue() {
        let accent = rgb("#2563eb");
        let seeds = series_seeds(accent, SERIES_COUNT);
        assert!(hue_diff(seeds[0].h, accent.to_color().h) < 0.01);
    }

    #[test]
    fn seeds_are_clamped() {
        for accent in ["#ffffff", "#000000", "#00ff00", "#ff00ff", "#fefefe"] {
            for seed in series_seeds(rgb(accent), SERIES_COUNT) {
                assert!((SERIES_LIGHTNESS.0..=SERIES_LIGHTNESS.1).contains(&seed.l));
                assert!((SERIES_CHROMA.0..=SERIES_CHROMA.1).contains(&seed.c));
            }
        }
    }

    #[test]
    fn series_is_legible() {
        for bg in ["#ffffff", "#f8fafc", "#0b1120", "#777777"] {
            let bg = rgb(bg);
            let series = build_series(rgb("#60a5fa"), bg, SERIES_COUNT);
            assert_eq!(series.len(), SERIES_COUNT);
            for c in series {
                assert!(contrast_ratio(c, bg) >= UI_CONTRAST, "{c} on {bg}");
            }
        }
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(build_series(Rgb::WHITE, Rgb::BLACK, 0).is_empty());
    }

    #[test]
    fn other_counts_space_evenly() {
        let seeds = series_seeds(rgb("#16a34a"), 4);
        let d = hue_diff(seeds[0].h, seeds[1].h);
        assert!((d - 90.0).abs() < 0.01);
    }
}
