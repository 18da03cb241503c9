//! Logger setup for binaries and tests embedding the classifiers.

use log::LevelFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "WINNOW_LOG";

/// Install an `env_logger` reading `WINNOW_LOG`, falling back to
/// `default_filter` (e.g. `"error,winnow_classifiers=debug"`).
///
/// Returns `false` when a global logger was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, default_filter))
        .try_init()
        .is_ok()
}

/// Same as [`init_logging`] but captures output per test.
#[doc(hidden)]
pub fn init_test_logging() {
    let _ = env_logger::Builder::default()
        .is_test(true)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV_VAR, "trace"))
        .try_init();
}
