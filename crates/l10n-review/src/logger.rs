//! Logging to stderr using env_logger
//!
//! Only warnings are shown by default. `RUST_LOG` overrides the filter,
//! e.g. `RUST_LOG=debug` shows every GitHub request.

use env_logger::Env;

const DEFAULT_FILTER: &str = "warn";

/// Initialize stderr logging
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .init();
}
