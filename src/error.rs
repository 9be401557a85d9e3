use thiserror::Error;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the library
#[derive(Error, Debug)]
pub enum Error {
    #[error("Bill collection is empty")]
    EmptyCollection,

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Position {position} is outside a deck of {len} bills")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("Invalid direction {0}. Allowed values are: -1, 0, 1")]
    InvalidDirection(i8),

    #[error("Unknown command '{0}'. Allowed values are: back, dislike, skip, like")]
    UnknownCommand(String),

    #[error("Unknown navigation policy '{0}'. Allowed values are: wrap, clamp")]
    UnknownPolicy(String),

    #[error("File path error: {0}")]
    Path(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
