// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Single command registered on the root group.
//!
//! `cargo run --example basic -- basic hello --name ted -V`

use chaincli::{Cli, Command, CommanderManager, DefaultParser, Input};

fn main() {
    chaincli::logging::init(0);

    let parser = match DefaultParser::new(None) {
        Ok(parser) => parser,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let mut cli = Cli::new(parser, CommanderManager::new("basic", "basic example"));
    cli.add_command(Command::new(
        "hello",
        "prints hello world and shows info about the input",
        |input: &Input| {
            println!("hello world");
            println!(
                "-command: {}\n-chain: {:?}\n-flags: {:?}\n-options: {:?}",
                input.command(),
                input.chain(),
                input.flags,
                input.options
            );
            Ok(())
        },
    ));

    if let Err(e) = cli.run() {
        eprintln!("{}", e);
        if e.is_parse_error() {
            eprintln!("usage: basic hello [--name value]... [-OPTION]...");
        } else if e.is_not_found() {
            eprintln!("the only command is `hello`");
        }
        std::process::exit(1);
    }
}
