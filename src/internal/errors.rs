//! Error types for the interpreter, its commands, and collection storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the dispatch path and by command handlers.
///
/// Every variant is recovered at the dispatcher boundary and reported as a
/// single user-facing line; none of them terminates the interactive loop.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The input line produced no tokens.
    #[error("No command entered, try again")]
    EmptyInput,

    /// The first token is not a registered command name or alias.
    #[error("No such command '{0}'. Type help to list the available commands")]
    UnknownCommand(String),

    /// The number of supplied arguments does not match the command's arity.
    #[error("Wrong number of arguments for {name}: required {required}, got {got}")]
    ArityMismatch {
        name: &'static str,
        required: usize,
        got: usize,
    },

    /// An argument failed domain-specific parsing or validation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced script file does not exist.
    #[error("No file named '{0}' in the current directory. Move the file there and retry")]
    ScriptNotFound(String),

    /// A referenced record id does not exist.
    #[error("No dragon with id {0} in the collection")]
    IdNotFound(u64),

    /// Saving or loading the collection failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading from the interactive input source failed.
    #[error("Input error: {0}")]
    Input(#[from] std::io::Error),
}

/// Errors raised while persisting or restoring the collection file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed collection file '{path}': {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
