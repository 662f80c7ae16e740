//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Filtering follows `RUST_LOG`; when it is unset, `default_filter` applies
/// (e.g. `"info"` or `"scene_engine=debug"`). Calling this twice is harmless.
pub fn init(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
