// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! chaincli - parse a raw command line and dispatch it to a grouped handler.
//!
//! Two pieces do the work:
//! - `parser`: turns `app group cmd --flag value -OPT` into an [`Input`]
//!   using configurable regex patterns
//! - `commander`: a tree of named groups, each with its own command catalog,
//!   resolving a chain of group names to a handler
//!
//! [`Cli`] composes the two and invokes exactly one handler per run.
//!
//! ```no_run
//! use chaincli::{Cli, Command, CommanderManager, DefaultParser, Input};
//!
//! fn main() -> chaincli::Result<()> {
//!     let mut cli = Cli::new(DefaultParser::new(None)?, CommanderManager::new("app", "demo"));
//!     cli.group("greet", "greetings")
//!         .add_command(Command::new("hello", "say hello", |input: &Input| {
//!             println!("hello {}", input.flag("name").unwrap_or("world"));
//!             Ok(())
//!         }));
//!     cli.run()
//! }
//! ```
//!
//! Known limitation: command words, flags and options are each extracted
//! independently from the full line, so a token such as `-X 1` is reported both
//! as flag `X` and as option `X`.

pub mod cli;
pub mod command;
pub mod commander;
pub mod error;
pub mod logging;
pub mod parser;

pub use cli::Cli;
pub use command::{Command, CommandHandler, Commands};
pub use commander::{Commander, CommanderManager};
pub use error::{CliError, ErrorKind, Result};
pub use parser::{CommandInput, DefaultParser, Input, Parser, ParserConfig};
