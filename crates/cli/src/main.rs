// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::io::Write;

use clap::Parser;
use deploykit::Cli;

fn main() {
    let cli = Cli::parse();
    deploykit::logging::setup_logging();

    if let Err(e) = deploykit::run(&cli) {
        if e.is_user_facing() {
            // A closed stdout still exits with the error code.
            let _ = writeln!(std::io::stdout(), "❌ Error: {}", e);
        } else {
            let _ = writeln!(std::io::stderr(), "error: {}", e);
        }
        std::process::exit(e.exit_code());
    }
}
