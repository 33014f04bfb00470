//! Error types for charak-nav

use thiserror::Error;

/// charak-nav error type
#[derive(Error, Debug)]
pub enum CharakError {
    #[error("insufficient waypoints: need at least 3, got {got}")]
    InsufficientWaypoints { got: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for CharakError {
    fn from(e: std::io::Error) -> Self {
        CharakError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for CharakError {
    fn from(e: toml::de::Error) -> Self {
        CharakError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CharakError>;
