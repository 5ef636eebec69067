//! Interaction-state variants (hover, pressed) by fixed lightness shifts.
//!
//! Light mode darkens, dark mode lightens, so a state always moves away
//! from the page background. The result is not re-checked for contrast.

use tinct_color::Rgb;

use crate::input::Mode;

/// Lightness shift applied on hover.
pub const HOVER_DELTA: f32 = 0.04;

/// Lightness shift applied while pressed.
pub const PRESSED_DELTA: f32 = 0.08;

/// An interactive state with its own color variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionState {
    Hover,
    Pressed,
}

impl InteractionState {
    /// Magnitude of the OKLCH lightness shift for this state.
    #[must_use]
    pub const fn delta(self) -> f32 {
        match self {
            Self::Hover => HOVER_DELTA,
            Self::Pressed => PRESSED_DELTA,
        }
    }
}

/// Shift `color` to its `state` variant for `mode`.
#[must_use]
pub fn tweak(color: Rgb, mode: Mode, state: InteractionState) -> Rgb {
    let c = color.to_color();
    let shifted = match mode {
        Mode::Light => c.darken(state.delta()),
        Mode::Dark => c.lighten(state.delta()),
    };
    shifted.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightness(c: Rgb) -> f32 {
        c.to_color().l
    }

    #[test]
    fn light_mode_darkens() {
        let accent: Rgb = "#2563eb".parse().unwrap();
        let hover = tweak(accent, Mode::Light, InteractionState::Hover);
        let pressed = tweak(accent, Mode::Light, InteractionState::Pressed);
        assert!(lightness(hover) < lightness(accent));
        assert!(lightness(pressed) < lightness(hover));
    }

    #[test]
    fn dark_mode_lightens() {
        let accent: Rgb = "#2563eb".parse().unwrap();
        let hover = tweak(accent, Mode::Dark, InteractionState::Hover);
        let pressed = tweak(accent, Mode::Dark, InteractionState::Pressed);
        assert!(lightness(hover) > lightness(accent));
        assert!(lightness(pressed) > lightness(hover));
    }

    #[test]
    fn hover_shift_is_about_four_hundredths() {
        let gray = Rgb::new(0x80, 0x80, 0x80);
        let hover = tweak(gray, Mode::Light, InteractionState::Hover);
        let d = lightness(gray) - lightness(hover);
        assert!((d - HOVER_DELTA).abs() < 0.01, "delta {d}");
    }

    #[test]
    fn clamps_at_extremes() {
        assert_eq!(tweak(Rgb::BLACK, Mode::Light, InteractionState::Pressed), Rgb::BLACK);
        assert_eq!(tweak(Rgb::WHITE, Mode::Dark, InteractionState::Pressed), Rgb::WHITE);
    }
}
