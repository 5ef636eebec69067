// SPDX-License-Identifier: MIT
//
// Command-line arguments for `tinct`.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};
use tinct_theme::Mode;

#[derive(Debug, Parser)]
#[command(
    name = "tinct",
    version,
    about = "Derive contrast-guaranteed design tokens from six core colors",
    long_about = "Derive a complete set of semantic design tokens from six core colors.\n\n\
                  Text, accent, stroke and chart colors are adjusted automatically \
                  until they meet WCAG contrast (4.5:1 for text, 3:1 for UI)."
)]
#[command(group(ArgGroup::new("source").args(["config", "preset"])))]
pub struct Cli {
    /// Theme config file (TOML).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Builtin preset to start from (see --list-presets).
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Override the light/dark mode of the config or preset.
    #[arg(short, long, value_name = "light|dark")]
    pub mode: Option<Mode>,

    /// What to print.
    #[arg(short, long, value_enum, default_value = "tokens")]
    pub format: OutputFormat,

    /// Exit with status 1 if any audited pair misses its contrast target.
    #[arg(long)]
    pub check: bool,

    /// List builtin presets and exit.
    #[arg(long)]
    pub list_presets: bool,

    /// More logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Flat token mapping as JSON.
    Tokens,
    /// CSS custom properties on `:root`.
    Css,
    /// The full theme tree as JSON.
    Tree,
    /// Human-readable contrast audit.
    Report,
}
