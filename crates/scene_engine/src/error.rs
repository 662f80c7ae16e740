//! Application-boundary errors

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the application hosting the scene
///
/// The scene core itself never fails: missed picks are `None` and render
/// pass failures are logged by the loop. These come from configuration and
/// the host.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration could not be loaded or saved
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The host (window system, frame source) failed
    #[error("Host error: {0}")]
    Host(String),
}
