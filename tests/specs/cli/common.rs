// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const SCHEMA_PATH: &str = "sql/analytics-schema.sql";

pub const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS analytics_property_views (id uuid primary key);
CREATE TABLE IF NOT EXISTS analytics_leads (id uuid primary key);
";

pub const OPTION_HEADERS: [&str; 3] = [
    "OPTION 1: Via Supabase Dashboard (Easiest)",
    "OPTION 2: Via PostgreSQL CLI (If you have psql installed)",
    "OPTION 3: Supabase CLI",
];

pub const TABLES: [&str; 5] = [
    "analytics_property_views",
    "analytics_leads",
    "analytics_valuations",
    "analytics_page_views",
    "analytics_searches",
];

/// The binary with a predictable environment: no colors, no credentials.
pub fn deploy() -> Command {
    let mut cmd = cargo_bin_cmd!("deploy-analytics");
    cmd.env_remove("COLOR")
        .env_remove("SUPABASE_SERVICE_ROLE_KEY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// `deploy()` running inside `dir`.
pub fn deploy_in(dir: &Path) -> Command {
    let mut cmd = deploy();
    cmd.current_dir(dir);
    cmd
}

/// Temp directory containing `sql/analytics-schema.sql`.
pub fn temp_with_schema() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_schema(temp.path(), SCHEMA_PATH);
    temp
}

pub fn write_schema(dir: &Path, rel: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, SCHEMA_SQL).unwrap();
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}
