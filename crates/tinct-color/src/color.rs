// SPDX-License-Identifier: MIT
//
// tinct color system — OKLCH for derivation, 8-bit sRGB for output.
//
// Two types live here:
//
//   Color — a perceptual OKLCH triple. Every derivation step (shift
//           lightness, scale chroma, rotate hue) happens in this space so
//           that a blue accent stays recognizably blue after adjustment.
//   Rgb   — an opaque, quantized 8-bit sRGB color. This is what the theme
//           engine emits and what contrast is measured on, so a reported
//           ratio always describes the exact hex a consumer will paint.
//
// Conversions go through Oklab and an LMS cone space, using the matrices
// published with Oklab (https://bottosson.github.io/posts/oklab/):
//
//   Rgb ─decode─▶ sRGB ─linearize─▶ linear sRGB ─M1─▶ LMS ─∛, M2─▶ Oklab ─polar─▶ OKLCH
//
// and back again in reverse. Quantizing back to Rgb first pulls chroma into
// the sRGB gamut so clipping cannot skew the hue.

// Color science names its channels with single letters.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::parse::{ParseColorError, parse};

type Vec3 = [f32; 3];
type Mat3 = [[f32; 3]; 3];

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color in OKLCH: lightness, chroma, hue.
///
/// Lightness steps in OKLCH look evenly spaced to the eye, which is what
/// lets the contrast adjuster walk lightness and keep the hue intact.
///
/// ```
/// use tinct_color::Rgb;
///
/// let accent = Rgb::new(0x25, 0x63, 0xeb).to_color();
/// let softer = accent.lighten(0.15);
/// assert!(softer.l > accent.l);
/// assert!(softer.to_rgb().to_string().starts_with('#'));
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness, 0.0 (black) to 1.0 (white).
    pub l: f32,
    /// Chroma. Zero is gray; sRGB tops out a little under 0.33.
    pub c: f32,
    /// Hue in degrees, [0, 360).
    pub h: f32,
}

impl Color {
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// From 8-bit sRGB channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        let encoded = [r, g, b].map(|v| f32::from(v) / 255.0);
        let lab = linear_srgb_to_oklab(encoded.map(srgb_to_linear));
        Self::from_oklab(lab)
    }

    /// Chroma too small to carry a meaningful hue.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    /// Zero out non-finite components, clamp lightness, and wrap the hue.
    ///
    /// Perceptual triples can come from arithmetic on user input; NaN
    /// still has to convert to some color.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        Self {
            l: finite(self.l).clamp(0.0, 1.0),
            c: finite(self.c).max(0.0),
            h: normalize_hue(finite(self.h)),
        }
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    #[inline]
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        self.set_lightness(self.l + amount)
    }

    #[inline]
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        self.set_lightness(self.l - amount)
    }

    /// Replace lightness, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Replace chroma; negative values become zero.
    #[inline]
    #[must_use]
    pub const fn set_chroma(self, c: f32) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    #[inline]
    #[must_use]
    pub fn scale_chroma(self, factor: f32) -> Self {
        self.set_chroma(self.c * factor)
    }

    /// Rotate the hue by `degrees`, either direction.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }

    /// Move a fraction `t` (0.0–1.0) of the way toward `target`'s
    /// lightness. Chroma and hue stay put.
    #[must_use]
    pub fn approach_lightness(self, target: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        self.set_lightness((target.l - self.l).mul_add(t, self.l))
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Quantize to an opaque [`Rgb`], mapping into gamut first.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let [r, g, b] = self.sanitized().to_gamut().encoded().map(to_u8);
        Rgb::new(r, g, b)
    }

    /// Whether every sRGB channel lands within 0.0–1.0 (to within 1e-4).
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        const EPS: f32 = 1e-4;
        self.encoded()
            .iter()
            .all(|v| (-EPS..=1.0 + EPS).contains(v))
    }

    /// The most chromatic color with this lightness and hue that sRGB can
    /// show. Bisects chroma, so the result is within 0.4/65536 of the edge.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }
        let (mut inside, mut outside) = (0.0f32, self.c);
        for _ in 0..16 {
            let mid = (inside + outside) * 0.5;
            if self.set_chroma(mid).in_srgb_gamut() {
                inside = mid;
            } else {
                outside = mid;
            }
        }
        self.set_chroma(inside)
    }

    /// Gamma-encoded sRGB channels, unclamped.
    fn encoded(self) -> Vec3 {
        linear_srgb_from_oklab(self.to_oklab()).map(linear_to_srgb)
    }

    fn to_oklab(self) -> Vec3 {
        let (sin, cos) = self.h.to_radians().sin_cos();
        [self.l, self.c * cos, self.c * sin]
    }

    fn from_oklab([l, a, b]: Vec3) -> Self {
        let c = a.hypot(b);
        // Hue is meaningless at zero chroma; pin it so output is stable.
        let h = if c < 1e-8 {
            0.0
        } else {
            normalize_hue(b.atan2(a).to_degrees())
        };
        Self { l, c, h }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rgb(), f)
    }
}

/// Approximate: components within 1e-5, hue ignored when either side is
/// achromatic.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        let hue_matches =
            self.is_achromatic() || other.is_achromatic() || hue_diff(self.h, other.h) < EPS;
        (self.l - other.l).abs() < EPS && (self.c - other.c).abs() < EPS && hue_matches
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// An opaque, 8-bit sRGB color; the form every emitted token takes.
///
/// Displays and serializes as lowercase `#rrggbb`. Equality is exact, so
/// two themes built from the same inputs compare equal byte for byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Absolute black, the fallback for anything unparseable.
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel values as sRGB fractions (0.0–1.0).
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let [r, g, b] = [self.r, self.g, self.b].map(|v| f32::from(v) / 255.0);
        (r, g, b)
    }

    /// Lift into OKLCH for perceptual adjustment.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::rgb8(self.r, self.g, self.b)
    }

    /// Canonical hex string, `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Composite this color at `alpha` opacity over an opaque `bg`.
    ///
    /// Straight-alpha "source over", evaluated per channel on the encoded
    /// sRGB values the same way a browser flattens `rgba()` onto an opaque
    /// backdrop. The result is always opaque. `alpha` is clamped to
    /// 0.0–1.0 and NaN counts as fully transparent.
    #[must_use]
    pub fn over(self, bg: Self, alpha: f32) -> Self {
        let a = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let mix = |fg: u8, bg: u8| {
            let fg = f32::from(fg) / 255.0;
            let bg = f32::from(bg) / 255.0;
            to_u8((fg - bg).mul_add(a, bg))
        };
        Self::new(mix(self.r, bg.r), mix(self.g, bg.g), mix(self.b, bg.b))
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb({self})")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b))
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.to_rgb()
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Wrap any angle into [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Angular distance between two hues along the shorter arc, 0–180.
#[inline]
#[must_use]
pub fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

// ─── Transfer function ───────────────────────────────────────────────────────

/// sRGB encode: linear light → gamma-encoded channel.
#[inline]
#[must_use]
pub fn linear_to_srgb(v: f32) -> f32 {
    if v > 0.003_130_8 {
        1.055f32.mul_add(v.powf(1.0 / 2.4), -0.055)
    } else {
        v * 12.92
    }
}

/// sRGB decode: gamma-encoded channel → linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(v: f32) -> f32 {
    if v > 0.040_45 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

// ─── Oklab matrices ──────────────────────────────────────────────────────────

const LINEAR_SRGB_TO_LMS: Mat3 = [
    [0.412_221_47, 0.536_332_55, 0.051_445_995],
    [0.211_903_5, 0.680_699_5, 0.107_396_96],
    [0.088_302_46, 0.281_718_84, 0.629_978_7],
];

const LMS_ROOT_TO_OKLAB: Mat3 = [
    [0.210_454_26, 0.793_617_8, -0.004_072_047],
    [1.977_998_5, -2.428_592_2, 0.450_593_7],
    [0.025_904_037, 0.782_771_77, -0.808_675_77],
];

const OKLAB_TO_LMS_ROOT: Mat3 = [
    [1.0, 0.396_337_78, 0.215_803_76],
    [1.0, -0.105_561_346, -0.063_854_17],
    [1.0, -0.089_484_18, -1.291_485_5],
];

const LMS_TO_LINEAR_SRGB: Mat3 = [
    [4.076_741_7, -3.307_711_6, 0.230_969_94],
    [-1.268_438, 2.609_757_4, -0.341_319_38],
    [-0.004_196_086_3, -0.703_418_6, 1.707_614_7],
];

#[inline]
fn mul(m: Mat3, v: Vec3) -> Vec3 {
    m.map(|row| row[0].mul_add(v[0], row[1].mul_add(v[1], row[2] * v[2])))
}

fn linear_srgb_to_oklab(rgb: Vec3) -> Vec3 {
    mul(LMS_ROOT_TO_OKLAB, mul(LINEAR_SRGB_TO_LMS, rgb).map(f32::cbrt))
}

fn linear_srgb_from_oklab(lab: Vec3) -> Vec3 {
    mul(LMS_TO_LINEAR_SRGB, mul(OKLAB_TO_LMS_ROOT, lab).map(|v| v * v * v))
}

/// 0.0–1.0 → 0–255, rounded. Out-of-range input saturates and NaN is 0.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f32) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_rgb_close(actual: Rgb, expected: Rgb) {
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
            "RGB mismatch: got {actual}, expected {expected}"
        );
    }

    // ── Conversion ───────────────────────────────────────────────────────

    #[test]
    fn primaries_survive_the_round_trip() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(255, 0, 255),
            Rgb::WHITE,
            Rgb::BLACK,
        ];
        for rgb in samples {
            assert_rgb_close(rgb.to_color().to_rgb(), rgb);
        }
    }

    #[test]
    fn palette_colors_survive_the_round_trip() {
        for hex in ["#0f172a", "#2563eb", "#c86432", "#f8fafc", "#7c3aed"] {
            let rgb: Rgb = hex.parse().unwrap();
            assert_rgb_close(rgb.to_color().to_rgb(), rgb);
        }
    }

    #[test]
    fn black_and_white_lightness() {
        let black = Rgb::BLACK.to_color();
        let white = Rgb::WHITE.to_color();
        assert!(approx_eq(black.l, 0.0, 0.001) && approx_eq(black.c, 0.0, 0.001));
        assert!(approx_eq(white.l, 1.0, 0.001) && approx_eq(white.c, 0.0, 0.001));
    }

    #[test]
    fn red_sits_near_29_degrees() {
        let red = Rgb::new(255, 0, 0).to_color();
        assert!(red.h > 20.0 && red.h < 35.0, "red hue {}", red.h);
        assert!(red.c > 0.2, "red chroma {}", red.c);
    }

    #[test]
    fn blue_is_darker_than_yellow() {
        let blue = Rgb::new(0, 0, 255).to_color();
        let yellow = Rgb::new(255, 255, 0).to_color();
        assert!(blue.l < yellow.l);
    }

    // ── Perceptual Operations ────────────────────────────────────────────

    #[test]
    fn lightness_moves_alone() {
        let color = Color::oklch(0.5, 0.1, 90.0);
        let lighter = color.lighten(0.2);
        assert!(approx_eq(lighter.l, 0.7, 0.001));
        assert!(approx_eq(lighter.c, 0.1, 1e-6));
        assert!(approx_eq(lighter.h, 90.0, 1e-6));
        assert!(approx_eq(color.darken(0.2).l, 0.3, 0.001));
    }

    #[test]
    fn lightness_is_clamped() {
        assert!(approx_eq(Color::oklch(0.9, 0.1, 90.0).lighten(0.5).l, 1.0, 1e-6));
        assert!(approx_eq(Color::oklch(0.1, 0.1, 90.0).darken(0.5).l, 0.0, 1e-6));
        assert!(approx_eq(Color::BLACK.set_lightness(-3.0).l, 0.0, 1e-6));
    }

    #[test]
    fn scale_chroma_multiplies() {
        let softer = Color::oklch(0.5, 0.1, 90.0).scale_chroma(0.6);
        assert!(approx_eq(softer.c, 0.06, 0.0001));
        assert!(approx_eq(softer.scale_chroma(-1.0).c, 0.0, 1e-6));
    }

    #[test]
    fn shift_hue_wraps_both_ways() {
        assert!(approx_eq(Color::oklch(0.5, 0.1, 350.0).shift_hue(30.0).h, 20.0, 0.001));
        assert!(approx_eq(Color::oklch(0.5, 0.1, 10.0).shift_hue(-30.0).h, 340.0, 0.001));
    }

    #[test]
    fn approach_lightness_moves_fractionally() {
        let dark = Color::oklch(0.2, 0.05, 250.0);
        let moved = dark.approach_lightness(&Color::WHITE, 0.5);
        assert!(approx_eq(moved.l, 0.6, 0.001));
        assert!(approx_eq(moved.h, 250.0, 1e-6));
    }

    #[test]
    fn sanitized_replaces_nan() {
        let bad = Color::oklch(f32::NAN, f32::INFINITY, f32::NAN).sanitized();
        assert!(bad.l.is_finite() && bad.c.is_finite() && bad.h.is_finite());
        assert_eq!(Color::oklch(f32::NAN, 0.1, 20.0).to_rgb(), Rgb::BLACK);
    }

    // ── Gamut Mapping ────────────────────────────────────────────────────

    #[test]
    fn in_gamut_colors_unchanged() {
        let color = Rgb::new(102, 153, 128).to_color();
        assert!(color.in_srgb_gamut());
        assert!(approx_eq(color.c, color.to_gamut().c, 1e-6));
    }

    #[test]
    fn out_of_gamut_loses_chroma_only() {
        let color = Color::oklch(0.5, 0.4, 180.0);
        assert!(!color.in_srgb_gamut());
        let mapped = color.to_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < color.c);
        assert!(approx_eq(mapped.l, color.l, 1e-6));
        assert!(approx_eq(mapped.h, color.h, 1e-6));
    }

    // ── Hue helpers ──────────────────────────────────────────────────────

    #[test]
    fn hue_helpers() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-4));
        assert!(approx_eq(normalize_hue(720.0), 0.0, 1e-4));
        assert!(approx_eq(hue_diff(350.0, 10.0), 20.0, 1e-4));
        assert!(approx_eq(hue_diff(10.0, 350.0), 20.0, 1e-4));
        assert!(approx_eq(hue_diff(0.0, 180.0), 180.0, 1e-4));
    }

    // ── Rgb ──────────────────────────────────────────────────────────────

    #[test]
    fn rgb_displays_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xff).to_string(), "#ab0cff");
        assert_eq!(format!("{:?}", Rgb::new(1, 2, 3)), "Rgb(#010203)");
        assert_eq!(format!("{:>9}", Rgb::BLACK), "  #000000");
    }

    #[test]
    fn over_at_extremes() {
        let red = Rgb::new(255, 0, 0);
        let blue = Rgb::new(0, 0, 255);
        assert_eq!(red.over(blue, 1.0), red);
        assert_eq!(red.over(blue, 0.0), blue);
        assert_eq!(red.over(blue, f32::NAN), blue);
        assert_eq!(red.over(blue, 7.0), red);
    }

    #[test]
    fn over_half_is_midpoint() {
        assert_eq!(Rgb::WHITE.over(Rgb::BLACK, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn rgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x25, 0x63, 0xeb)).unwrap();
        assert_eq!(json, "\"#2563eb\"");
        let back: Rgb = serde_json::from_str("\"#2563EB\"").unwrap();
        assert_eq!(back, Rgb::new(0x25, 0x63, 0xeb));
    }

    // ── Equality ─────────────────────────────────────────────────────────

    #[test]
    fn achromatic_equality_ignores_hue() {
        assert_eq!(Color::oklch(0.5, 0.0, 0.0), Color::oklch(0.5, 0.0, 180.0));
        assert_ne!(Color::oklch(0.5, 0.1, 0.0), Color::oklch(0.5, 0.1, 180.0));
    }

    #[test]
    fn color_debug_format() {
        assert_eq!(format!("{:?}", Color::oklch(0.5, 0.1, 90.0)), "oklch(0.5000 0.1000 90.0)");
    }
}
