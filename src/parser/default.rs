// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Regex-driven parser
//!
//! The whole line is validated once, then the command words, flags and options
//! are each extracted by their own pattern from the same raw string. The
//! extractors do not consume input from one another: a token that fits both the
//! flag and the option pattern (e.g. `-X 1`) shows up in both maps.

use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::error::{CliError, Result};

use super::{CommandInput, Input, Parser, ParserConfig};

/// Default [`Parser`] implementation built from [`ParserConfig`] patterns
#[derive(Debug, Clone)]
pub struct DefaultParser {
    pattern_cli: Regex,
    pattern_chain: Regex,
    pattern_flag: Regex,
    pattern_option: Regex,
    trimmer: Regex,
}

impl DefaultParser {
    /// Compile a parser. `None` uses every default pattern.
    pub fn new(config: Option<ParserConfig>) -> Result<Self> {
        let config = config.unwrap_or_default();

        Ok(Self {
            pattern_cli: compile("cli", config.cli_pattern())?,
            pattern_chain: compile("chain", config.chain_pattern())?,
            pattern_flag: compile("flag", config.flag_pattern())?,
            pattern_option: compile("option", config.option_pattern())?,
            trimmer: compile("trimmer", config.trimmer_pattern())?,
        })
    }

    /// Extract the app name, chain and command.
    ///
    /// At least two words (app and command) are required.
    pub fn parse_commands(&self, args: &str) -> Result<CommandInput> {
        let matched = self
            .pattern_chain
            .find(args)
            .ok_or(CliError::InvalidCommands)?;

        let mut words = self.split(matched.as_str());
        if words.len() < 2 {
            return Err(CliError::InvalidCommands);
        }

        // len >= 2 checked above
        let command = words.pop().unwrap_or_default();
        let name = words.remove(0);

        Ok(CommandInput {
            name,
            chain: words,
            command,
        })
    }

    /// Extract flag pairs. No match is an empty map, not an error.
    pub fn parse_flags(&self, args: &str) -> HashMap<String, String> {
        let Some(matched) = self.pattern_flag.find(args) else {
            return HashMap::new();
        };

        let tokens = self.split(matched.as_str());
        let pairs = tokens.chunks_exact(2);
        if let [dangling] = pairs.remainder() {
            tracing::warn!(token = %dangling, "flag without a value ignored");
        }

        // Later duplicates overwrite earlier ones.
        pairs
            .map(|pair| (strip_dashes(&pair[0]), pair[1].clone()))
            .collect()
    }

    /// Extract presence-only options. No match is an empty set, not an error.
    pub fn parse_options(&self, args: &str) -> HashSet<String> {
        let Some(matched) = self.pattern_option.find(args) else {
            return HashSet::new();
        };

        self.split(matched.as_str())
            .iter()
            .map(|token| strip_dashes(token))
            .collect()
    }

    /// Trim both ends, collapse inner whitespace, split into tokens.
    fn split(&self, matched: &str) -> Vec<String> {
        let normalized = self.trimmer.replace_all(matched.trim(), " ");
        normalized.split_whitespace().map(str::to_string).collect()
    }
}

impl Default for DefaultParser {
    fn default() -> Self {
        // The built-in patterns are constants known to compile.
        Self::new(None).expect("built-in patterns compile")
    }
}

impl Parser for DefaultParser {
    fn parse(&self, args: &str) -> Result<Input> {
        if !self.pattern_cli.is_match(args) {
            tracing::debug!(args = %args, "command line rejected by cli pattern");
            return Err(CliError::InvalidArgs);
        }

        let command_input = self.parse_commands(args)?;
        let flags = self.parse_flags(args);
        let options = self.parse_options(args);

        tracing::debug!(
            command = %command_input.command,
            chain = ?command_input.chain,
            flags = ?flags,
            options = ?options,
            "parsed command line"
        );

        Ok(Input {
            command_input,
            flags,
            options,
        })
    }
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| CliError::InvalidPattern { field, source })
}

fn strip_dashes(token: &str) -> String {
    token.trim_start_matches('-').to_string()
}
