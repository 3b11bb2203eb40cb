//! Application layer errors

use std::path::PathBuf;
use thiserror::Error;

/// Messaging channel errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Faults a command handler can report back to the executor
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Message has no sender")]
    MissingSender,

    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Reply failed: {0}")]
    Reply(#[from] BotError),

    #[error("Handler panicked: {0}")]
    Panicked(String),
}

/// Reasons a plugin candidate is rejected at load time
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid command name {0:?}: must be non-empty and contain no whitespace")]
    InvalidName(String),

    #[error("Unknown handler: {0}")]
    UnknownHandler(String),

    #[error("Command '{0}' already registered")]
    Duplicate(String),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
