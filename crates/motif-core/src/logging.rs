//! Tracing subscriber setup for host tools and tests.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `motif_analysis=debug`.
pub const LOG_ENV_VAR: &str = "MOTIF_LOG";

/// Install a global fmt subscriber filtered by `MOTIF_LOG`, falling back to
/// `default_directive`. Returns false if a global subscriber was already set.
pub fn init_logging(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_logging("warn");
        assert!(!init_logging("debug"));
    }
}
