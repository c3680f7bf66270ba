//! Diagnostic logging for the `wixgen` binary.
//!
//! Logs go to stderr so the fragment printed on stdout stays clean. The
//! binary prints its own `error:`/`warning:` line for a failed run, so only
//! log errors are shown until `-v` is given.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    }
}

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over the
/// verbosity flags when set. Calling this twice is harmless.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
