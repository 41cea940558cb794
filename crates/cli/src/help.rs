// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output with the guide's color conventions.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

const EXAMPLES: &[(&str, &str)] = &[
    ("deploy-analytics", "Print the guide for sql/analytics-schema.sql"),
    ("deploy-analytics -C ../site", "Read the schema from another checkout"),
    ("deploy-analytics -s db/schema.sql", "Use a different schema file"),
    ("deploy-analytics -o json", "Print the guide as JSON"),
];

/// Examples block shown after the options in `--help`.
pub fn examples() -> String {
    let width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
    let colorize = colors::should_colorize();

    let mut out = if colorize {
        colors::header("Examples:")
    } else {
        "Examples:".to_string()
    };
    for (cmd, desc) in EXAMPLES {
        let padded = format!("{cmd:<width$}");
        let padded = if colorize {
            colors::colorize_command(&padded)
        } else {
            padded
        };
        out.push_str(&format!("\n  {padded}  {desc}"));
    }
    out
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
