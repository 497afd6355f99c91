// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Commands nested under a group, plus a `help` listing built from the tree.
//!
//! `cargo run --example group -- app group ping`
//! `cargo run --example group -- app help`

use chaincli::{Cli, Command, Commander, CommanderManager, DefaultParser, Input};

fn build_tree() -> CommanderManager {
    let mut root = CommanderManager::new("app", "group example");

    let group = root.group("group", "two commands, ping and hello");
    group.add_command(Command::new("ping", "prints pong", |_: &Input| {
        println!("pong");
        Ok(())
    }));
    group.add_command(Command::new(
        "hello",
        "prints hello and the flags it was given",
        |input: &Input| {
            println!("hello {}", input.flag("name").unwrap_or("world"));
            if input.has_option("V") {
                println!("-chain: {:?}\n-flags: {:?}", input.chain(), input.flags);
            }
            Ok(())
        },
    ));

    root
}

fn main() {
    let verbose = std::env::args().any(|arg| arg == "-V");
    chaincli::logging::init(u8::from(verbose));

    let tree = build_tree();
    let listing: Vec<String> = tree
        .entries()
        .into_iter()
        .map(|(chain, cmd)| {
            let mut path = chain;
            path.push(cmd.name.clone());
            format!("  {:<20} {}", path.join(" "), cmd.description)
        })
        .collect();
    let title = format!("{} - {}", tree.name(), tree.description());

    let parser = match DefaultParser::new(None) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut cli = Cli::new(parser, tree);
    cli.add_command(Command::new("help", "lists every command", move |_: &Input| {
        println!("{}", title);
        for line in &listing {
            println!("{}", line);
        }
        Ok(())
    }));

    if let Err(e) = cli.run() {
        eprintln!("{}", e);
        if e.is_parse_error() {
            eprintln!("usage: app <group>... <command> [--flag value]... [-OPTION]...");
        } else if e.is_not_found() {
            eprintln!("run `app help` to list commands");
        }
        std::process::exit(1);
    }
}
