// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Commands and the per-group command catalog

use std::fmt;
use std::sync::Arc;

use crate::error::{CliError, Result};
use crate::parser::Input;

/// Function invoked with the parsed input of a command line
pub type CommandHandler = Arc<dyn Fn(&Input) -> Result<()> + Send + Sync>;

/// A named, described handler
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub handler: CommandHandler,
}

impl Command {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Input) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            handler: Arc::new(handler),
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered list of commands owned by one group.
///
/// Names are not checked for uniqueness on insert; lookup returns the first
/// command with a matching name.
#[derive(Debug, Clone, Default)]
pub struct Commands(Vec<Command>);

impl Commands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: Command) {
        self.0.push(command);
    }

    /// Find the first command with the given name
    pub fn find(&self, command_name: &str) -> Option<&Command> {
        self.0.iter().find(|cmd| cmd.name == command_name)
    }

    /// Find the handler of the first command with the given name
    pub fn find_handler(&self, command_name: &str) -> Result<CommandHandler> {
        self.find(command_name)
            .map(|cmd| Arc::clone(&cmd.handler))
            .ok_or(CliError::CommandHandlerNotFound)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Command>> for Commands {
    fn from(commands: Vec<Command>) -> Self {
        Self(commands)
    }
}

impl<'a> IntoIterator for &'a Commands {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
