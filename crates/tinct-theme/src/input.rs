//! Synthesis inputs: the six core colors, three numeric knobs, and the mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Light or dark rendering mode.
///
/// Flips the direction of interaction-state shifts and the strength of
/// tinted surfaces; the derivation structure is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown mode '{other}' (expected 'light' or 'dark')")),
        }
    }
}

/// The six user-chosen colors every token is derived from.
///
/// Values are raw color strings exactly as typed; anything unparseable is
/// treated as black during synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreColors {
    /// Page background.
    pub base: String,
    /// Card / panel background.
    pub surface: String,
    /// Foreground text.
    pub text: String,
    /// Brand color.
    pub accent: String,
    /// Secondary brand color.
    pub utility: String,
    /// Divider and outline color.
    pub border: String,
}

impl CoreColors {
    /// Build from six color strings in field order.
    #[must_use]
    pub fn new(
        base: &str,
        surface: &str,
        text: &str,
        accent: &str,
        utility: &str,
        border: &str,
    ) -> Self {
        Self {
            base: base.to_owned(),
            surface: surface.to_owned(),
            text: text.to_owned(),
            accent: accent.to_owned(),
            utility: utility.to_owned(),
            border: border.to_owned(),
        }
    }
}

impl Default for CoreColors {
    fn default() -> Self {
        Self::new("#ffffff", "#f8fafc", "#0f172a", "#2563eb", "#7c3aed", "#e2e8f0")
    }
}

/// Numeric knobs carried through to the output untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CoreNumbers {
    /// Corner radius base, in rem.
    pub radius: f64,
    /// Stroke width base, in px.
    pub stroke_width: f64,
    /// Focus ring width, in px.
    pub focus_width: f64,
}

impl Default for CoreNumbers {
    fn default() -> Self {
        Self {
            radius: 0.5,
            stroke_width: 1.0,
            focus_width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Mode>(), Ok(Mode::Dark));
        assert_eq!(" light ".parse::<Mode>(), Ok(Mode::Light));
        assert!("dim".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_display_round_trips() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(mode.to_string().parse::<Mode>(), Ok(mode));
        }
    }

    #[test]
    fn default_numbers() {
        let n = CoreNumbers::default();
        assert!((n.radius - 0.5).abs() < f64::EPSILON);
        assert!((n.stroke_width - 1.0).abs() < f64::EPSILON);
        assert!((n.focus_width - 2.0).abs() < f64::EPSILON);
    }
}
