use thiserror::Error;

/// Custom error types for avtool
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unrecognized option '{0}'")]
    UnknownOption(String),

    #[error("Missing argument for option '{0}'")]
    MissingArgument(String),

    #[error("Invalid argument for option '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Option '{name}' rejected value '{value}'")]
    HandlerRejected { name: String, value: String },

    #[error("Option table error: {0}")]
    Registration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for avtool operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
