// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Tracing setup for binaries built on chaincli

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to WARN.
///
/// `-v` style verbosity (`verbose > 0`) turns on debug output for parsing and
/// dispatch without requiring users to know target names. `RUST_LOG` still
/// takes precedence. Does nothing if a global subscriber is already set.
pub fn init(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    if verbose > 0 {
        if let Ok(parsed) = "chaincli=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init();
}
