//! Diagnostics for the `bazi` binary.
//!
//! Pillars and Julian days are printed on stdout, so log lines go to stderr
//! and `bazi pillars ... --json | jq` keeps working at any verbosity.

use tracing_subscriber::EnvFilter;

/// The calculator's own crates. Dependencies (clap, toml) stay silent.
const BAZI_TARGETS: &[&str] = &["bazi_cli", "bazi_core", "bazi_rs"];

/// Level for a `-v` count.
///
/// `-v` shows the moment being charted and the loaded config, `-vv` adds
/// why an input field or policy check rejected a request, `-vvv` adds every
/// computed chart.
fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn default_directives(verbosity: u8) -> String {
    let level = level(verbosity);
    BAZI_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. A set `RUST_LOG` replaces the `-v` level.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
