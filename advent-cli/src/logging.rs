//! Diagnostic logging to stderr

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Map the `-v` count to the default log level; `RUST_LOG` overrides it
pub fn default_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Stdout stays reserved for pass lines.
pub fn configure_tracing(verbose: u8) {
    let fmt_layer = fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr);
    let level_filter_layer = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(level_filter_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(default_level(0), LevelFilter::WARN);
        assert_eq!(default_level(1), LevelFilter::INFO);
        assert_eq!(default_level(2), LevelFilter::DEBUG);
        assert_eq!(default_level(9), LevelFilter::TRACE);
    }
}
