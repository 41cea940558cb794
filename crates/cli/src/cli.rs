// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::help;
use crate::project::DEFAULT_PROJECT_REF;
use crate::schema::DEFAULT_SCHEMA_PATH;
use clap::{Parser, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for the deployment guide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "deploy-analytics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Print instructions for deploying the analytics schema to Supabase")]
#[command(
    long_about = "Print instructions for deploying the analytics schema to Supabase.\n\n\
    Reads the schema file to confirm it exists, then describes three manual ways to apply it. \
    Nothing is executed and no network requests are made."
)]
#[command(after_help = help::examples())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if started in <path>
    #[arg(short = 'C', long = "directory", value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Schema file to deploy
    #[arg(
        short = 's',
        long = "schema",
        value_name = "path",
        default_value = DEFAULT_SCHEMA_PATH,
        value_parser = non_empty_string
    )]
    pub schema: String,

    /// Supabase project ref
    #[arg(
        long = "project-ref",
        value_name = "ref",
        default_value = DEFAULT_PROJECT_REF,
        value_parser = non_empty_string
    )]
    pub project_ref: String,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
