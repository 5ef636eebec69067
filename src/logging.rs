// SPDX-License-Identifier: MIT
//
// Diagnostic logging to stderr. `RUST_LOG` wins when set; otherwise the
// level comes from -v / -q. Stdout stays reserved for tokens.

use std::io;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for a verbosity count, with `quiet` forcing errors only.
#[must_use]
pub const fn level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        // Other crates stay at warn.
        EnvFilter::new(format!(
            "warn,tinct={level},tinct_color={level},tinct_theme={level}"
        ))
    })
}

/// Install the global subscriber. Call once, before any work.
pub fn init(level: Level) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
