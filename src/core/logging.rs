//! Logging configuration and initialization
//!
//! Diagnostic events go to stderr so they never interleave with the report
//! printed on stdout.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a user-supplied level to an `EnvFilter` directive
///
/// Accepts the usual level names plus `warning` and `critical`. Anything
/// unrecognised falls back to `warn`.
pub fn normalize_level(log_level: &str) -> &'static str {
    let level = log_level
        .split_whitespace()
        .next()
        .unwrap_or("warn")
        .to_lowercase();

    match level.as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "error" | "critical" => "error",
        _ => "warn",
    }
}

/// Initialize the logging system with the specified level
///
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(normalize_level(log_level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("DEBUG"), "debug");
        assert_eq!(normalize_level("warning"), "warn");
        assert_eq!(normalize_level("critical"), "error");
        assert_eq!(normalize_level("info # comment"), "info");
        assert_eq!(normalize_level("verbose"), "warn");
        assert_eq!(normalize_level(""), "warn");
    }
}
