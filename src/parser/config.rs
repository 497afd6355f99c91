// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Parser configuration
//!
//! Every pattern is optional. Unset or empty fields fall back to the built-in
//! defaults, so a config only needs to name what it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

// The defaults use ASCII `\w` and `\s` (`(?-u)`): words are `[0-9A-Za-z_]`,
// so `café` is not a word token.

/// Whole line: two or more words, then flag pairs, then options
pub const DEFAULT_PATTERN_CLI: &str =
    r"(?-u)^(\w+(?:\s+\w+)+)(\s+-{1,2}\w+\s+\w+)*(\s+-[A-Z0-9]+)*$";
/// Leading run of bare words (app, chain and command)
pub const DEFAULT_PATTERN_CHAIN: &str = r"(?-u)^(\w+(?:\s+\w+)+)";
/// Repeated `-name value` / `--name value` pairs
pub const DEFAULT_PATTERN_FLAG: &str = r"(?-u)(\s+-{1,2}\w+\s+\w+)+";
/// Repeated single-dash uppercase alphanumeric tokens
pub const DEFAULT_PATTERN_OPTION: &str = r"(?-u)(\s+-[A-Z0-9]+)+";
/// Two or more consecutive whitespace characters
pub const DEFAULT_TRIMMER: &str = r"(?-u)\s{2,}";

/// Overridable patterns for [`DefaultParser`](super::DefaultParser)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Validator for the whole command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_cli: Option<String>,

    /// Extractor for the app/chain/command words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_chain: Option<String>,

    /// Extractor for flag pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_flag: Option<String>,

    /// Extractor for options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_option: Option<String>,

    /// Whitespace collapsed to a single space inside each extracted match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trimmer: Option<String>,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern_cli(mut self, pattern: impl Into<String>) -> Self {
        self.pattern_cli = Some(pattern.into());
        self
    }

    pub fn with_pattern_chain(mut self, pattern: impl Into<String>) -> Self {
        self.pattern_chain = Some(pattern.into());
        self
    }

    pub fn with_pattern_flag(mut self, pattern: impl Into<String>) -> Self {
        self.pattern_flag = Some(pattern.into());
        self
    }

    pub fn with_pattern_option(mut self, pattern: impl Into<String>) -> Self {
        self.pattern_option = Some(pattern.into());
        self
    }

    pub fn with_trimmer(mut self, pattern: impl Into<String>) -> Self {
        self.trimmer = Some(pattern.into());
        self
    }

    /// Parse a config from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load a config from a JSON file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn cli_pattern(&self) -> &str {
        resolve(&self.pattern_cli, DEFAULT_PATTERN_CLI)
    }

    pub fn chain_pattern(&self) -> &str {
        resolve(&self.pattern_chain, DEFAULT_PATTERN_CHAIN)
    }

    pub fn flag_pattern(&self) -> &str {
        resolve(&self.pattern_flag, DEFAULT_PATTERN_FLAG)
    }

    pub fn option_pattern(&self) -> &str {
        resolve(&self.pattern_option, DEFAULT_PATTERN_OPTION)
    }

    pub fn trimmer_pattern(&self) -> &str {
        resolve(&self.trimmer, DEFAULT_TRIMMER)
    }
}

// Empty strings count as unset.
fn resolve<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(pattern) if !pattern.is_empty() => pattern,
        _ => default,
    }
}
