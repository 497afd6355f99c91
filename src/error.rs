// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Error types for chaincli
//!
//! Parsing, resolution and dispatch all return [`CliError`]. Callers that need
//! to test "is this error exactly X" compare [`CliError::kind`] values.

use thiserror::Error;

/// Main error type for chaincli operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Raw text does not match the overall command line shape
    #[error("invalid args")]
    InvalidArgs,

    /// The app/chain/command portion is missing or too short
    #[error("invalid commands")]
    InvalidCommands,

    /// The resolved group has no command with the requested name
    #[error("command not found")]
    CommandHandlerNotFound,

    /// Some segment of the requested chain does not exist in the tree
    #[error("command manager not found")]
    CommandManagerNotFound,

    /// A configured pattern failed to compile
    #[error("invalid {field} pattern: {source}")]
    InvalidPattern {
        field: &'static str,
        #[source]
        source: regex::Error,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error raised by a command handler
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Discriminant of a [`CliError`], comparable by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgs,
    InvalidCommands,
    CommandHandlerNotFound,
    CommandManagerNotFound,
    InvalidPattern,
    Io,
    Json,
    Handler,
}

impl CliError {
    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CliError::InvalidArgs => ErrorKind::InvalidArgs,
            CliError::InvalidCommands => ErrorKind::InvalidCommands,
            CliError::CommandHandlerNotFound => ErrorKind::CommandHandlerNotFound,
            CliError::CommandManagerNotFound => ErrorKind::CommandManagerNotFound,
            CliError::InvalidPattern { .. } => ErrorKind::InvalidPattern,
            CliError::Io(_) => ErrorKind::Io,
            CliError::Json(_) => ErrorKind::Json,
            CliError::Handler(_) => ErrorKind::Handler,
        }
    }

    /// Whether the error came out of parsing the raw input
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CliError::InvalidArgs | CliError::InvalidCommands)
    }

    /// Whether the error came out of resolving a handler in the tree
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CliError::CommandHandlerNotFound | CliError::CommandManagerNotFound
        )
    }
}

/// Result type alias for chaincli operations
pub type Result<T> = std::result::Result<T, CliError>;
