//! HyprMotion - Animation and bezier curve parser for Hyprland configs
//!
//! HyprMotion reads a Hyprland configuration file and extracts its `bezier`
//! and `animation` declarations, validating curve references and the
//! per-animation style grammar along the way.

pub mod cli;
pub mod config;
pub mod logging;
pub mod models;

pub use config::{parse, ConfigParser, ParseError, ParseErrorKind, ParseReport, ParseResult};
pub use models::*;

/// Result type alias for HyprMotion operations
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to HyprMotion operations
#[derive(thiserror::Error, Debug)]
pub enum HyprMotionError {
    #[error("Failed to parse {origin}: {error}")]
    ParseFailed { origin: String, error: ParseError },

    #[error("Configuration source error: {0}")]
    SourceError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
