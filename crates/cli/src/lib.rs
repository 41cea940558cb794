// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! deploykit - library behind the `deploy-analytics` command.
//!
//! Reads the analytics SQL schema file to confirm it is present, then prints
//! a guide for applying it to the hosted Supabase database by hand. Nothing
//! is executed and no network requests are made.
//!
//! # Main Components
//!
//! - [`Cli`] - Command line arguments (all optional)
//! - [`SchemaFile`] - Read-only load of the schema file
//! - [`Project`] - Target project and derived URLs
//! - [`DeploymentGuide`] - The instructions, rendered as text or JSON
//! - [`Error`] - Error types for all operations

mod cli;
pub mod colors;
pub mod env;
pub mod error;
pub mod guide;
pub mod help;
pub mod logging;
pub mod project;
pub mod schema;

pub use cli::{Cli, OutputFormat};
pub use error::{Error, Result};
pub use guide::DeploymentGuide;
pub use project::{Project, ServiceRoleKey};
pub use schema::SchemaFile;

use std::io::Write;

use colors::Palette;

/// Execute the command, writing the guide to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let palette = match cli.output {
        OutputFormat::Text => Palette::detect(),
        OutputFormat::Json => Palette::plain(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &mut out, palette)?;
    out.flush()?;
    Ok(())
}

/// Execute the command against an arbitrary writer. This is the testable
/// core of [`run`].
pub fn run_with(cli: &Cli, out: &mut dyn Write, palette: Palette) -> Result<()> {
    let text = cli.output == OutputFormat::Text;
    tracing::debug!(color = palette.is_enabled(), output = ?cli.output, "rendering guide");
    if text {
        guide::write_preamble(out, palette)?;
        // Keep the preamble ahead of a missing-file error printed elsewhere.
        out.flush()?;
    }

    let schema = SchemaFile::load(cli.directory.as_deref(), &cli.schema)?;
    tracing::info!(
        path = schema.display_path(),
        bytes = schema.len(),
        "schema file present"
    );
    if schema.is_empty() {
        tracing::warn!(path = schema.display_path(), "schema file is empty");
    }

    let project = Project::new(cli.project_ref.as_str());
    let key = ServiceRoleKey::from_env();
    if key.is_none() {
        tracing::debug!("no service role key in environment");
    }
    let deployment = DeploymentGuide::new(&schema, &project, key);

    match cli.output {
        OutputFormat::Text => {
            guide::write_loaded(out)?;
            deployment.write_text(out, palette)
        }
        OutputFormat::Json => deployment.write_json(out),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
