// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for the deployment guide and help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used across the guide and `--help`.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders/context: medium grey
    pub const CONTEXT: u8 = 245;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const LITERAL_START: &str = "\x1b[38;5;250m";
    pub const CONTEXT_START: &str = "\x1b[38;5;245m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    format!("{}{}{}", fg256(codes::HEADER), text, RESET)
}

/// Apply literal color (commands, paths) to text.
pub fn literal(text: &str) -> String {
    format!("{}{}{}", fg256(codes::LITERAL), text, RESET)
}

/// Apply context color (placeholders, quoted values) to text.
pub fn context(text: &str) -> String {
    format!("{}{}{}", fg256(codes::CONTEXT), text, RESET)
}

/// Decides once whether output is colored and applies it consistently.
///
/// Rendering code takes a `Palette` rather than probing the terminal itself,
/// so the same guide can be rendered plain for JSON, tests and pipes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Palette matching the current terminal and environment.
    pub fn detect() -> Self {
        Self::new(should_colorize())
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn header(&self, text: &str) -> String {
        if self.enabled {
            header(text)
        } else {
            text.to_string()
        }
    }

    pub fn literal(&self, text: &str) -> String {
        if self.enabled {
            literal(text)
        } else {
            text.to_string()
        }
    }

    pub fn command(&self, cmd: &str) -> String {
        if self.enabled {
            colorize_command(cmd)
        } else {
            cmd.to_string()
        }
    }
}

/// Colorize a shell command, highlighting quoted arguments and `[PLACEHOLDER]`
/// segments as context and everything else as literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut chars = cmd.char_indices();
    let mut segment_start = 0;

    while let Some((i, c)) = chars.next() {
        let close = match c {
            '\'' => '\'',
            '[' => ']',
            _ => continue,
        };

        if i > segment_start {
            result.push_str(&literal(&cmd[segment_start..i]));
        }

        // Unclosed quote or bracket extends to the end
        let mut end = cmd.len();
        for (j, ch) in chars.by_ref() {
            if ch == close {
                end = j + ch.len_utf8();
                break;
            }
        }
        result.push_str(&context(&cmd[i..end]));
        segment_start = end;
    }

    if segment_start < cmd.len() {
        result.push_str(&literal(&cmd[segment_start..]));
    }

    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
