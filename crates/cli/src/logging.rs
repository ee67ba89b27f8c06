//! Log setup. Logs go to stderr so stdout stays parseable.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count to a default filter directive.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Color codes only when the log stream is an interactive terminal.
pub fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

/// Installs the global subscriber. `RUST_LOG` overrides `-v`.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi_enabled(&std::io::stderr()))
        .with_target(false)
        .init();
}
