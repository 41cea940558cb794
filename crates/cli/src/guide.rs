// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The deployment guide: three manual ways to apply the schema, the tables
//! it creates and what to do afterwards.
//!
//! The guide is built once as plain data and then rendered either as
//! human-readable text or as JSON (`--output json`).

use std::io::Write;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::colors::Palette;
use crate::error::Result;
use crate::project::{Project, ServiceRoleKey, ADMIN_ANALYTICS_URL, DASHBOARD_URL};
use crate::schema::SchemaFile;

/// Tables created by the analytics schema.
pub const TABLES: [&str; 5] = [
    "analytics_property_views",
    "analytics_leads",
    "analytics_valuations",
    "analytics_page_views",
    "analytics_searches",
];

/// Inner width of the boxed banners, in terminal columns.
const BANNER_WIDTH: usize = 64;

/// Width of the horizontal rule between the options and the summary.
const RULE_WIDTH: usize = 63;

/// One numbered instruction within a deployment option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// Something the user does by hand.
    Note { text: String },
    /// A shell command to run, introduced by `text`.
    Command { text: String, command: String },
}

impl Step {
    fn note(text: impl Into<String>) -> Self {
        Step::Note { text: text.into() }
    }

    fn command(text: impl Into<String>, command: impl Into<String>) -> Self {
        Step::Command {
            text: text.into(),
            command: command.into(),
        }
    }
}

/// One of the alternative ways to apply the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployOption {
    pub number: u8,
    pub title: String,
    pub steps: Vec<Step>,
}

/// Everything the guide shows, independent of how it is rendered.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentGuide {
    pub schema_path: String,
    pub project_ref: String,
    pub api_url: String,
    pub dashboard_url: String,
    pub service_role_key: Option<ServiceRoleKey>,
    pub options: Vec<DeployOption>,
    pub tables: Vec<String>,
    pub next_steps: Vec<String>,
    pub admin_url: String,
}

impl DeploymentGuide {
    pub fn new(schema: &SchemaFile, project: &Project, key: Option<ServiceRoleKey>) -> Self {
        let path = schema.display_path();
        let options = vec![
            DeployOption {
                number: 1,
                title: "Via Supabase Dashboard (Easiest)".to_string(),
                steps: vec![
                    Step::note(format!("Go to: {DASHBOARD_URL}")),
                    Step::note(format!(
                        "Select your project: {} ({})",
                        project.project_ref(),
                        project.dashboard_url()
                    )),
                    Step::note("Go to: SQL Editor → New Query"),
                    Step::note(format!("Copy the entire content of: {path}")),
                    Step::note("Paste into the SQL Editor"),
                    Step::note("Click: Run (blue button)"),
                ],
            },
            DeployOption {
                number: 2,
                title: "Via PostgreSQL CLI (If you have psql installed)".to_string(),
                steps: vec![
                    Step::note("Get your database password from Supabase Dashboard"),
                    Step::command(
                        "Run this command:",
                        format!("psql '{}' < {path}", project.database_url()),
                    ),
                ],
            },
            DeployOption {
                number: 3,
                title: "Supabase CLI".to_string(),
                steps: vec![
                    Step::command("Install CLI:", "npm install -g supabase"),
                    Step::command("Run:", format!("supabase db push {path}")),
                ],
            },
        ];

        Self {
            schema_path: path.to_string(),
            project_ref: project.project_ref().to_string(),
            api_url: project.base_url(),
            dashboard_url: project.dashboard_url(),
            service_role_key: key,
            options,
            tables: TABLES.iter().map(|t| t.to_string()).collect(),
            next_steps: vec!["npm run dev".to_string()],
            admin_url: ADMIN_ANALYTICS_URL.to_string(),
        }
    }

    /// Write the guide as pretty-printed JSON.
    pub fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }

    /// Write the human-readable guide.
    pub fn write_text(&self, out: &mut dyn Write, palette: Palette) -> Result<()> {
        write_banner(out, palette, "🚀 HOW TO DEPLOY THE SCHEMA")?;

        for option in &self.options {
            writeln!(
                out,
                "✅ {}\n",
                palette.header(&format!("OPTION {}: {}", option.number, option.title))
            )?;
            for (i, step) in option.steps.iter().enumerate() {
                let n = i + 1;
                match step {
                    Step::Note { text } => writeln!(out, "   {n}. {text}")?,
                    Step::Command { text, command } => {
                        writeln!(out, "   {n}. {text}")?;
                        writeln!(out, "      {}", palette.command(command))?;
                    }
                }
            }
            writeln!(out)?;
        }

        writeln!(out, "{}\n", "═".repeat(RULE_WIDTH))?;

        match &self.service_role_key {
            Some(key) => writeln!(out, "🔐 Service role key: configured ({key})\n")?,
            None => writeln!(
                out,
                "🔐 Service role key: not set (export SUPABASE_SERVICE_ROLE_KEY; never commit it)\n"
            )?,
        }

        writeln!(
            out,
            "📊 {}",
            palette.header(&format!("The schema will create {} tables:", self.tables.len()))
        )?;
        for table in &self.tables {
            writeln!(out, "   • {table}")?;
        }
        writeln!(out)?;

        writeln!(out, "After executing, you can:")?;
        for step in &self.next_steps {
            writeln!(out, "   {}", palette.literal(step))?;
        }
        writeln!(out, "   → Go to: {}\n", self.admin_url)?;

        writeln!(out, "✨ Dashboard will be fully functional!")?;
        Ok(())
    }
}

/// Lines printed before the schema file is read.
pub fn write_preamble(out: &mut dyn Write, palette: Palette) -> Result<()> {
    write_banner(out, palette, "📊 ANALYTICS SCHEMA DEPLOYMENT TO SUPABASE")?;
    writeln!(out, "⚠️  REST API endpoint doesn't support direct SQL execution.")?;
    writeln!(out, "     Apply the schema with one of the manual options below.\n")?;
    writeln!(out, "📖 Reading SQL schema file...")?;
    Ok(())
}

/// Success marker printed once the schema file has been read.
pub fn write_loaded(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "✓ SQL schema loaded\n")?;
    Ok(())
}

fn write_banner(out: &mut dyn Write, palette: Palette, title: &str) -> Result<()> {
    let inner = format!("   {title}");
    let pad = BANNER_WIDTH.saturating_sub(UnicodeWidthStr::width(inner.as_str()));
    writeln!(out, "╔{}╗", "═".repeat(BANNER_WIDTH))?;
    writeln!(out, "║{}{}║", palette.header(&inner), " ".repeat(pad))?;
    writeln!(out, "╚{}╝\n", "═".repeat(BANNER_WIDTH))?;
    Ok(())
}

#[cfg(test)]
#[path = "guide_tests.rs"]
mod tests;
