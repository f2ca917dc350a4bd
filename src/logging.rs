//! Tracing setup for the CLI.
//!
//! Diagnostics go to stderr so stdout carries only the rendered diff.
//! `SIMILARDIFF_LOG` accepts the usual EnvFilter directives; without it the
//! level comes from the `-v` count.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an EnvFilter directive string.
pub const LOG_ENV_VAR: &str = "SIMILARDIFF_LOG";

/// Default level for a given `-v` count.
pub fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "debug");
        assert_eq!(default_level(2), "trace");
        assert_eq!(default_level(9), "trace");
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(0);
        init(2);
    }
}
