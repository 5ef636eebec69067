// SPDX-License-Identifier: MIT
//
// Color-string parsing and the fail-safe normalizer.
//
// Accepts what a user might type into a color picker: hex in its four
// lengths, `rgb()`/`rgba()`, `hsl()`/`hsla()`, `oklch()` and CSS names.
// Alpha is read and dropped; the canonical form of every color is an
// opaque `#rrggbb`.

use thiserror::Error;

use crate::color::{Color, Rgb, to_u8};
use crate::named;

/// Why a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    #[error("unsupported color function `{0}`")]
    UnknownFunction(String),

    #[error("expected {expected} arguments to `{function}`, found {found}")]
    Arity {
        function: String,
        expected: &'static str,
        found: usize,
    },

    #[error("invalid color component `{0}`")]
    InvalidComponent(String),

    #[error("unrecognized color `{0}`")]
    Unrecognized(String),
}

/// Parse a color string into its canonical opaque form.
///
/// # Errors
///
/// Returns a [`ParseColorError`] describing the first problem found.
pub fn parse(input: &str) -> Result<Rgb, ParseColorError> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ParseColorError::InvalidHex(input.trim().to_string()));
    }

    if let Some(open) = s.find('(') {
        let Some(body) = s[open + 1..].strip_suffix(')') else {
            return Err(ParseColorError::Unrecognized(input.trim().to_string()));
        };
        return parse_function(s[..open].trim(), body);
    }

    if let Some(rgb) = named::lookup(&s) {
        return Ok(rgb);
    }

    parse_hex(&s).ok_or_else(|| ParseColorError::Unrecognized(input.trim().to_string()))
}

/// Parse `input`, substituting absolute black when it is not a color.
///
/// Live editing feeds half-typed values through here; a malformed value
/// must never stop derivation.
#[must_use]
pub fn normalize(input: &str) -> Rgb {
    match parse(input) {
        Ok(rgb) => rgb,
        Err(err) => {
            tracing::debug!(input, %err, "color did not parse, using black");
            Rgb::BLACK
        }
    }
}

/// Normalize `input` and lift it into OKLCH.
#[must_use]
pub fn to_perceptual(input: &str) -> Color {
    normalize(input).to_color()
}

/// Quantize a perceptual triple to its canonical opaque form.
///
/// Total: non-finite components are zeroed and out-of-gamut chroma is
/// reduced, so any triple yields some color.
#[must_use]
pub fn from_perceptual(color: Color) -> Rgb {
    color.to_rgb()
}

/// Flatten `fg` at `alpha` opacity over `bg`, both normalized first.
///
/// See [`Rgb::over`].
#[must_use]
pub fn blend(fg: &str, bg: &str, alpha: f32) -> Rgb {
    normalize(fg).over(normalize(bg), alpha)
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Rgb> {
    let bytes = s.as_bytes();
    let nibble = |i: usize| parse_hex_digit(bytes[i]);
    match bytes.len() {
        // #RGB / #RGBA
        3 | 4 => {
            let (r, g, b) = (nibble(0)?, nibble(1)?, nibble(2)?);
            if bytes.len() == 4 {
                nibble(3)?;
            }
            Some(Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB / #RRGGBBAA
        6 | 8 => {
            let byte = |i: usize| Some(nibble(i)? << 4 | nibble(i + 1)?);
            let (r, g, b) = (byte(0)?, byte(2)?, byte(4)?);
            if bytes.len() == 8 {
                byte(6)?;
            }
            Some(Rgb::new(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

// ─── Functional notation ─────────────────────────────────────────────────────

fn parse_function(name: &str, body: &str) -> Result<Rgb, ParseColorError> {
    // Legacy comma syntax and modern space syntax (with `/ alpha`) both
    // reduce to a plain token list.
    let args: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    let arity = |expected| ParseColorError::Arity {
        function: name.to_string(),
        expected,
        found: args.len(),
    };
    if !(3..=4).contains(&args.len()) {
        return Err(arity("3 or 4"));
    }
    if let Some(alpha) = args.get(3) {
        alpha_component(alpha)?;
    }

    match name {
        "rgb" | "rgba" => {
            let r = rgb_component(args[0])?;
            let g = rgb_component(args[1])?;
            let b = rgb_component(args[2])?;
            Ok(Rgb::new(r, g, b))
        }
        "hsl" | "hsla" => {
            let h = hue_component(args[0])?;
            let s = percent_component(args[1])?;
            let l = percent_component(args[2])?;
            let (r, g, b) = hsl_to_srgb(h, s, l);
            Ok(Rgb::new(to_u8(r), to_u8(g), to_u8(b)))
        }
        "oklch" => {
            let l = match args[0].strip_suffix('%') {
                Some(p) => number(p, args[0])? / 100.0,
                None => number(args[0], args[0])?,
            };
            // Chroma percentages are relative to 0.4 per CSS Color 4.
            let c = match args[1].strip_suffix('%') {
                Some(p) => number(p, args[1])? / 100.0 * 0.4,
                None => number(args[1], args[1])?,
            };
            let h = hue_component(args[2])?;
            Ok(Color::oklch(l, c, h).to_rgb())
        }
        other => Err(ParseColorError::UnknownFunction(other.to_string())),
    }
}

fn number(s: &str, original: &str) -> Result<f32, ParseColorError> {
    s.parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ParseColorError::InvalidComponent(original.to_string()))
}

fn rgb_component(s: &str) -> Result<u8, ParseColorError> {
    let v = match s.strip_suffix('%') {
        Some(p) => number(p, s)? / 100.0,
        None => number(s, s)? / 255.0,
    };
    Ok(to_u8(v.clamp(0.0, 1.0)))
}

fn percent_component(s: &str) -> Result<f32, ParseColorError> {
    let p = s.strip_suffix('%').unwrap_or(s);
    Ok((number(p, s)? / 100.0).clamp(0.0, 1.0))
}

fn hue_component(s: &str) -> Result<f32, ParseColorError> {
    let (digits, scale) = if let Some(d) = s.strip_suffix("deg") {
        (d, 1.0)
    } else if let Some(t) = s.strip_suffix("turn") {
        (t, 360.0)
    } else {
        (s, 1.0)
    };
    Ok((number(digits, s)? * scale).rem_euclid(360.0))
}

fn alpha_component(s: &str) -> Result<f32, ParseColorError> {
    match s.strip_suffix('%') {
        Some(p) => number(p, s).map(|v| v / 100.0),
        None => number(s, s),
    }
}

/// HSL (hue in degrees, saturation and lightness 0.0–1.0) → sRGB.
fn hsl_to_srgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    let c = (1.0 - 2.0f32.mul_add(l, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = c.mul_add(-0.5, l);

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}
