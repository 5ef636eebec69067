// SPDX-License-Identifier: MIT
//
// tinct — derive contrast-guaranteed design tokens from six core colors.
//
// This is the binary that wires the crates together:
//
//   tinct-color → parsing, OKLCH conversion, compositing
//   tinct-theme → contrast enforcement, synthesis, audit, export
//
// Each run flows through:
//
//   --preset / --config → ThemeConfig → --mode override
//   synthesize → Theme → tokens | css | tree | report → stdout
//
// Logs go to stderr so the output can be piped straight into a file.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tinct_theme::preset::builtin_names;
use tinct_theme::{TOKEN_SCHEMA_VERSION, Theme, ThemeConfig, export_tokens, to_css};

mod cli;
mod logging;

use crate::cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(logging::level(cli.verbose, cli.quiet));

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut out = io::stdout().lock();

    if cli.list_presets {
        for name in builtin_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = load_config(cli)?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let theme = config.synthesize();
    write_output(&mut out, &theme, cli.format)?;
    out.flush()?;

    if cli.check && !theme.is_compliant() {
        let failed = theme.failures().count();
        tracing::error!(failed, "contrast check failed");
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

/// Resolve the starting config: `--config` file, `--preset`, or the
/// default light preset.
fn load_config(cli: &Cli) -> Result<ThemeConfig> {
    if let Some(path) = &cli.config {
        return ThemeConfig::load(path)
            .with_context(|| format!("could not load theme config {}", path.display()));
    }
    let name = cli.preset.as_deref().unwrap_or("default");
    ThemeConfig::from_preset(name).with_context(|| {
        format!("available presets: {}", builtin_names().join(", "))
    })
}

fn write_output(out: &mut impl Write, theme: &Theme, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Tokens => {
            serde_json::to_writer_pretty(&mut *out, &export_tokens(theme))?;
            writeln!(out)?;
        }
        OutputFormat::Css => {
            write!(out, "{}", to_css(&export_tokens(theme), ":root"))?;
        }
        OutputFormat::Tree => {
            serde_json::to_writer_pretty(&mut *out, theme)?;
            writeln!(out)?;
        }
        OutputFormat::Report => write_report(out, theme)?,
    }
    Ok(())
}

// ─── Report ─────────────────────────────────────────────────────────────────

fn write_report(out: &mut impl Write, theme: &Theme) -> io::Result<()> {
    let report = &theme.meta.report;
    let width = report.iter().map(|i| i.pair.len()).max().unwrap_or(4);

    writeln!(
        out,
        "tinct token schema v{TOKEN_SCHEMA_VERSION}, {} mode",
        theme.mode
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<width$}  {:<7}  {:<7}  {:>6}  {:>8}  RESULT",
        "PAIR", "FG", "BG", "RATIO", "REQUIRED"
    )?;
    for item in report {
        writeln!(
            out,
            "{:<width$}  {}  {}  {:>6.2}  {:>8.1}  {}",
            item.pair,
            item.foreground,
            item.background,
            item.ratio,
            item.required,
            if item.pass { "pass" } else { "FAIL" },
        )?;
    }

    let passed = report.iter().filter(|i| i.pass).count();
    writeln!(out)?;
    writeln!(out, "{passed}/{} pairs pass", report.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_theme::{CoreColors, CoreNumbers, Mode, synthesize};

    fn render(format: OutputFormat) -> String {
        let theme = synthesize(&CoreColors::default(), CoreNumbers::default(), Mode::Light);
        let mut buf = Vec::new();
        write_output(&mut buf, &theme, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tokens_are_json() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Tokens)).unwrap();
        assert_eq!(json["background.primary"], "#ffffff");
        assert_eq!(json["radius.base"], "0.5rem");
    }

    #[test]
    fn css_is_a_root_block() {
        let css = render(OutputFormat::Css);
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --text-primary: #0f172a;\n"));
    }

    #[test]
    fn tree_has_report() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Tree)).unwrap();
        assert!(json["meta"]["report"].as_array().is_some_and(|r| !r.is_empty()));
    }

    #[test]
    fn report_lists_every_pair() {
        let text = render(OutputFormat::Report);
        assert!(text.contains("text.primary on background.primary"));
        assert!(text.contains("chart.series6 on chart.background"));
        assert!(text.contains("19/19 pairs pass"));
    }
}
