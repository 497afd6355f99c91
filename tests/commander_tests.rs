// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use chaincli::{CliError, Command, Commander, CommanderManager, ErrorKind, Input, Result};

fn noop(_: &Input) -> Result<()> {
    Ok(())
}

fn chain(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn build() -> CommanderManager {
    let mut root = CommanderManager::new("app", "application");
    let g1 = root.group("g1", "group one");
    let g2 = g1.group("g2", "group two");
    g2.add_command(Command::new("leaf", "leaf command", noop));
    root
}

#[test]
fn test_nested_resolution_succeeds() {
    let root = build();
    assert!(root.find_handler("leaf", &chain(&["g1", "g2"])).is_ok());
}

#[test]
fn test_wrong_group_is_manager_not_found() {
    let root = build();
    let err = root
        .find_handler("leaf", &chain(&["g1", "wrong"]))
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::CommandManagerNotFound);
}

#[test]
fn test_missing_command_is_handler_not_found() {
    let root = build();
    let err = root
        .find_handler("missing", &chain(&["g1", "g2"]))
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::CommandHandlerNotFound);
}

#[test]
fn test_partial_chain_does_not_reach_leaf() {
    let root = build();
    let result = root.find_handler("leaf", &chain(&["g1"]));
    assert!(matches!(result, Err(CliError::CommandHandlerNotFound)));
}

#[test]
fn test_lookup_is_idempotent() {
    let root = build();
    for _ in 0..3 {
        assert!(root.find_handler("leaf", &chain(&["g1", "g2"])).is_ok());
        assert!(matches!(
            root.find_handler("leaf", &chain(&["nope"])),
            Err(CliError::CommandManagerNotFound)
        ));
        assert_eq!(root.find_commander(&["g1"]).unwrap().name(), "g1");
    }
}

#[test]
fn test_sibling_groups_resolve_independently() {
    let mut root = CommanderManager::new("app", "");
    root.group("db", "database")
        .add_command(Command::new("migrate", "", noop));
    root.group("cache", "cache")
        .add_command(Command::new("flush", "", noop));

    assert!(root.find_handler("migrate", &chain(&["db"])).is_ok());
    assert!(root.find_handler("flush", &chain(&["cache"])).is_ok());
    assert!(matches!(
        root.find_handler("flush", &chain(&["db"])),
        Err(CliError::CommandHandlerNotFound)
    ));
}

#[test]
fn test_tree_accessors() {
    let root = build();
    assert_eq!(root.name(), "app");
    assert_eq!(root.description(), "application");
    assert!(root.commands().is_empty());
    assert_eq!(root.groups().len(), 1);
    assert_eq!(root.groups()[0].groups()[0].commands().len(), 1);
}

#[test]
fn test_entries_lists_every_command() {
    let mut root = build();
    root.add_command(Command::new("version", "print version", noop));

    let listed: Vec<String> = root
        .entries()
        .into_iter()
        .map(|(mut path, cmd)| {
            path.push(cmd.name.clone());
            path.join(".")
        })
        .collect();
    assert_eq!(listed, vec!["version", "g1.g2.leaf"]);
}

#[test]
fn test_resolved_handler_is_callable() {
    let mut root = CommanderManager::new("app", "");
    root.add_command(Command::new("echo", "", |input: &Input| {
        if input.flag("fail").is_some() {
            return Err(anyhow::anyhow!("asked to fail").into());
        }
        Ok(())
    }));

    let handler = root.find_handler("echo", &[]).unwrap();
    assert!(handler(&Input::default()).is_ok());

    let mut failing = Input::default();
    failing.flags.insert("fail".to_string(), "yes".to_string());
    assert_eq!(handler(&failing).unwrap_err().kind(), ErrorKind::Handler);
}
