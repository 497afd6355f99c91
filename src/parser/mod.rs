// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Raw command line parsing
//!
//! A [`Parser`] turns one joined command line into an [`Input`]: the app name,
//! the chain of groups, the leaf command, its flags and its options.
//!
//! The CLI surface understood by [`DefaultParser`] is
//! `<root> [<group>...] <command> [--<flag> <value> | -<flag> <value>]... [-<OPTION>]...`

pub mod config;
pub mod default;

pub use config::ParserConfig;
pub use default::DefaultParser;

use std::collections::{HashMap, HashSet};

use crate::error::Result;

/// The command portion of a parsed line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandInput {
    /// First token, conventionally the app name
    pub name: String,
    /// Group names between the app name and the command
    pub chain: Vec<String>,
    /// Last token, the leaf command to invoke
    pub command: String,
}

/// Structured request handed to a command handler
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Input {
    pub command_input: CommandInput,
    /// `-name value` / `--name value` pairs, dashes stripped
    pub flags: HashMap<String, String>,
    /// Presence-only `-OPTION` tokens, dash stripped
    pub options: HashSet<String>,
}

impl Input {
    /// Get a flag value by name
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags.get(name).map(|v| v.as_str())
    }

    /// Whether an option was given
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains(name)
    }

    /// The leaf command name
    pub fn command(&self) -> &str {
        &self.command_input.command
    }

    /// The group chain leading to the command
    pub fn chain(&self) -> &[String] {
        &self.command_input.chain
    }
}

/// Converts a raw command line into an [`Input`]
#[cfg_attr(test, mockall::automock)]
pub trait Parser {
    fn parse(&self, args: &str) -> Result<Input>;
}
