// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Command dispatch
//!
//! [`Cli`] ties a [`Parser`] to a [`Commander`]: parse the raw line, resolve
//! the handler from the command and its chain, invoke it once. Every error is
//! returned to the caller unchanged.

use crate::command::Command;
use crate::commander::Commander;
use crate::error::Result;
use crate::parser::Parser;

/// Parser plus command registry
pub struct Cli<P, C> {
    parser: P,
    commander: C,
}

impl<P: Parser, C: Commander> Cli<P, C> {
    pub fn new(parser: P, commander: C) -> Self {
        Self { parser, commander }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn commander(&self) -> &C {
        &self.commander
    }

    /// Register a command on the root group
    pub fn add_command(&mut self, command: Command) {
        self.commander.add_command(command);
    }

    /// Create a group under the root
    pub fn group(&mut self, name: &str, description: &str) -> &mut dyn Commander {
        self.commander.group(name, description)
    }

    /// Run against the process arguments, excluding the program path.
    pub fn run(&self) -> Result<()> {
        self.run_args(std::env::args().skip(1))
    }

    /// Run against an explicit argument list, joined with single spaces.
    pub fn run_args<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = args
            .into_iter()
            .map(|arg| arg.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.run_line(&line)
    }

    /// Run against an already joined command line.
    pub fn run_line(&self, line: &str) -> Result<()> {
        let input = self.parser.parse(line)?;

        let handler = self
            .commander
            .find_handler(input.command(), input.chain())?;

        tracing::debug!(
            command = %input.command(),
            chain = ?input.chain(),
            "dispatching command"
        );

        handler(&input)
    }
}
