//! End-to-end synthesis scenarios on realistic palettes.

use pretty_assertions::assert_eq;
use tinct_color::Rgb;
use tinct_theme::contrast::{TEXT_CONTRAST, UI_CONTRAST};
use tinct_theme::preset::{builtin_names, builtin_preset};
use tinct_theme::{
    CoreColors, CoreNumbers, Mode, ThemeConfig, contrast_ratio, contrast_ratio_hex, export_tokens,
    synthesize, to_css,
};

fn rgb(hex: &str) -> Rgb {
    hex.parse().unwrap()
}

#[test]
fn default_light_text_passes_through() {
    let theme = synthesize(&CoreColors::default(), CoreNumbers::default(), Mode::Light);
    assert!(contrast_ratio(theme.text.primary, theme.bg.primary) >= TEXT_CONTRAST);
    assert_eq!(theme.text.primary, rgb("#0f172a"));
    assert!(theme.is_compliant());
}

#[test]
fn near_white_accent_is_pulled_into_contrast() {
    let core = CoreColors {
        accent: "#fbfbff".into(),
        ..CoreColors::default()
    };
    let theme = synthesize(&core, CoreNumbers::default(), Mode::Light);
    assert_ne!(theme.accent.primary, rgb("#fbfbff"));
    assert!(contrast_ratio(theme.accent.primary, Rgb::WHITE) >= UI_CONTRAST);
}

#[test]
fn mode_flips_state_direction_not_audit_pairs() {
    let core = CoreColors::default();
    let light = synthesize(&core, CoreNumbers::default(), Mode::Light);
    let dark = synthesize(&core, CoreNumbers::default(), Mode::Dark);

    let l = |c: Rgb| c.to_color().l;
    assert!(l(light.accent.hover) < l(light.accent.primary));
    assert!(l(dark.accent.hover) > l(dark.accent.primary));
    assert!(l(light.utility.pressed) < l(light.utility.primary));
    assert!(l(dark.utility.pressed) > l(dark.utility.primary));

    let pairs = |t: &tinct_theme::Theme| -> Vec<String> {
        t.meta.report.iter().map(|i| i.pair.clone()).collect()
    };
    assert_eq!(pairs(&light), pairs(&dark));
}

#[test]
fn malformed_everything_is_safe() {
    let core = CoreColors::new("not-a-color", "", "#zzz", "rgb(", "oklch(1 2)", "hsl(x y z)");
    let theme = synthesize(&core, CoreNumbers::default(), Mode::Light);
    assert_eq!(theme.bg.primary, Rgb::BLACK);
    assert!(theme.is_compliant());
    assert!((contrast_ratio_hex("not-a-color", "#ffffff") - 1.0).abs() < f64::EPSILON);
}

#[test]
fn every_preset_exports_a_full_css_block() {
    for name in builtin_names() {
        let config = builtin_preset(name).unwrap();
        let tokens = export_tokens(&config.synthesize());
        let css = to_css(&tokens, ":root");
        assert!(css.contains("--accent-on-accent: #"), "{name}");
        assert!(css.contains("--chart-series-6: #"), "{name}");
        assert!(css.contains("--radius-base: 0.5rem;"), "{name}");
    }
}

#[test]
fn config_file_drives_synthesis() {
    let config = ThemeConfig::from_toml_str(
        r##"
        mode = "dark"

        [colors]
        base = "#0b1120"
        surface = "#111827"
        text = "#e5e7eb"
        accent = "oklch(70% 0.15 250)"
        utility = "hsl(270 70% 70%)"
        border = "rgb(51 65 85)"
        "##,
    )
    .unwrap();
    let theme = config.synthesize();
    assert_eq!(theme.mode, Mode::Dark);
    assert_eq!(theme.stroke.default, rgb("#334155"));
    assert!(theme.is_compliant());
}
