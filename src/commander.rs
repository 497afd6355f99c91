// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Grouped command registry
//!
//! A [`CommanderManager`] is one node of the command tree. It owns its own
//! [`Commands`] catalog and its child groups. The tree is built during a
//! registration phase and only grows: there is no removal.
//!
//! ```text
//! app                      (root: app name and description)
//! ├── version              (command)
//! └── db                   (group)
//!     ├── migrate          (command, chain = ["db"])
//!     └── users            (group)
//!         └── list         (command, chain = ["db", "users"])
//! ```

use crate::command::{Command, CommandHandler, Commands};
use crate::error::{CliError, Result};

/// Registry capabilities used by the dispatcher
pub trait Commander {
    /// Resolve `chain` to a group, then `command_name` within it.
    fn find_handler(&self, command_name: &str, chain: &[String]) -> Result<CommandHandler>;

    /// Append a command to this group.
    fn add_command(&mut self, command: Command);

    /// Create an empty child group and return it for further registration.
    fn group(&mut self, name: &str, description: &str) -> &mut dyn Commander;
}

/// A node of the command tree
#[derive(Debug, Clone, Default)]
pub struct CommanderManager {
    name: String,
    description: String,
    commands: Commands,
    groups: Vec<CommanderManager>,
}

impl CommanderManager {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn commands(&self) -> &Commands {
        &self.commands
    }

    pub fn groups(&self) -> &[CommanderManager] {
        &self.groups
    }

    /// Walk `chain` from this node, one child level per element.
    ///
    /// An empty chain resolves to `self`. At each level the first child with
    /// a matching name is taken.
    pub fn find_commander<S: AsRef<str>>(&self, chain: &[S]) -> Result<&CommanderManager> {
        let mut current = self;
        for segment in chain {
            let segment = segment.as_ref();
            current = current
                .groups
                .iter()
                .find(|group| group.name == segment)
                .ok_or_else(|| {
                    tracing::debug!(group = segment, parent = %current.name, "group not found");
                    CliError::CommandManagerNotFound
                })?;
        }
        Ok(current)
    }

    /// Every command in the tree, depth first, with the chain leading to it.
    pub fn entries(&self) -> Vec<(Vec<String>, &Command)> {
        let mut entries = Vec::new();
        self.collect_entries(&mut Vec::new(), &mut entries);
        entries
    }

    fn collect_entries<'a>(
        &'a self,
        chain: &mut Vec<String>,
        entries: &mut Vec<(Vec<String>, &'a Command)>,
    ) {
        for command in &self.commands {
            entries.push((chain.clone(), command));
        }
        for group in &self.groups {
            chain.push(group.name.clone());
            group.collect_entries(chain, entries);
            chain.pop();
        }
    }
}

impl Commander for CommanderManager {
    fn find_handler(&self, command_name: &str, chain: &[String]) -> Result<CommandHandler> {
        self.find_commander(chain)?.commands.find_handler(command_name)
    }

    fn add_command(&mut self, command: Command) {
        tracing::debug!(group = %self.name, command = %command.name, "command registered");
        self.commands.push(command);
    }

    fn group(&mut self, name: &str, description: &str) -> &mut dyn Commander {
        self.groups.push(CommanderManager::new(name, description));
        let index = self.groups.len() - 1;
        &mut self.groups[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Input;

    fn noop(_: &Input) -> Result<()> {
        Ok(())
    }

    fn chain(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn nested_tree() -> CommanderManager {
        let mut root = CommanderManager::new("app", "test app");
        root.add_command(Command::new("version", "print version", noop));
        let g1 = root.group("g1", "first level");
        let g2 = g1.group("g2", "second level");
        g2.add_command(Command::new("leaf", "leaf command", noop));
        root
    }

    #[test]
    fn test_find_commander_empty_chain_is_self() {
        let root = nested_tree();
        let found = root.find_commander::<String>(&[]).unwrap();
        assert_eq!(found.name(), "app");
    }

    #[test]
    fn test_find_commander_nested() {
        let root = nested_tree();
        let found = root.find_commander(&["g1", "g2"]).unwrap();
        assert_eq!(found.name(), "g2");
        assert_eq!(found.description(), "second level");
    }

    #[test]
    fn test_find_commander_wrong_segment() {
        let root = nested_tree();
        let result = root.find_commander(&["g1", "wrong"]);
        assert!(matches!(result, Err(CliError::CommandManagerNotFound)));
    }

    #[test]
    fn test_find_commander_too_deep() {
        let root = nested_tree();
        let result = root.find_commander(&["g1", "g2", "g3"]);
        assert!(matches!(result, Err(CliError::CommandManagerNotFound)));
    }

    #[test]
    fn test_find_handler_root_command() {
        let root = nested_tree();
        assert!(root.find_handler("version", &[]).is_ok());
    }

    #[test]
    fn test_find_handler_nested_command() {
        let root = nested_tree();
        assert!(root.find_handler("leaf", &chain(&["g1", "g2"])).is_ok());
    }

    #[test]
    fn test_find_handler_missing_group() {
        let root = nested_tree();
        let result = root.find_handler("leaf", &chain(&["g1", "wrong"]));
        assert!(matches!(result, Err(CliError::CommandManagerNotFound)));
    }

    #[test]
    fn test_find_handler_missing_command() {
        let root = nested_tree();
        let result = root.find_handler("missing", &chain(&["g1", "g2"]));
        assert!(matches!(result, Err(CliError::CommandHandlerNotFound)));
    }

    #[test]
    fn test_commands_do_not_leak_across_levels() {
        let root = nested_tree();
        let result = root.find_handler("leaf", &[]);
        assert!(matches!(result, Err(CliError::CommandHandlerNotFound)));
        let result = root.find_handler("version", &chain(&["g1"]));
        assert!(matches!(result, Err(CliError::CommandHandlerNotFound)));
    }

    #[test]
    fn test_duplicate_group_names_first_wins() {
        let mut root = CommanderManager::new("app", "");
        root.group("dup", "first");
        root.group("dup", "second");

        let found = root.find_commander(&["dup"]).unwrap();
        assert_eq!(found.description(), "first");
        assert_eq!(root.groups().len(), 2);
    }

    #[test]
    fn test_entries_depth_first() {
        let root = nested_tree();
        let entries: Vec<_> = root
            .entries()
            .into_iter()
            .map(|(chain, cmd)| (chain.join(" "), cmd.name.clone()))
            .collect();

        assert_eq!(
            entries,
            vec![
                (String::new(), "version".to_string()),
                ("g1 g2".to_string(), "leaf".to_string()),
            ]
        );
    }
}
