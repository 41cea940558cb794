// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `--output json`.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use serde_json::Value;

fn json_guide(temp: &TempDir) -> Value {
    let out = stdout_of(deploy_in(temp.path()).args(["--output", "json"]));
    serde_json::from_str(&out).unwrap()
}

#[test]
fn json_is_the_only_stdout() {
    let temp = temp_with_schema();
    deploy_in(temp.path())
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("Reading SQL schema file").not());
}

#[test]
fn json_lists_tables() {
    let temp = temp_with_schema();
    let guide = json_guide(&temp);
    let tables: Vec<&str> = guide["tables"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert_eq!(tables, TABLES.to_vec());
}

#[test]
fn json_lists_three_options_with_steps() {
    let temp = temp_with_schema();
    let guide = json_guide(&temp);
    let options = guide["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    assert_eq!(options[0]["title"], "Via Supabase Dashboard (Easiest)");
    assert_eq!(options[0]["steps"].as_array().unwrap().len(), 6);
    assert_eq!(
        options[2]["steps"][1]["command"],
        "supabase db push sql/analytics-schema.sql"
    );
}

#[test]
fn json_describes_project() {
    let temp = temp_with_schema();
    let guide = json_guide(&temp);
    assert_eq!(guide["project_ref"], "yheqvroinbcrrpppzdzx");
    assert_eq!(guide["api_url"], "https://yheqvroinbcrrpppzdzx.supabase.co");
    assert_eq!(
        guide["dashboard_url"],
        "https://app.supabase.com/project/yheqvroinbcrrpppzdzx"
    );
    assert_eq!(guide["admin_url"], "http://localhost:3000/es/admin/analytics");
    assert!(guide["service_role_key"].is_null());
}

#[test]
fn json_redacts_service_role_key() {
    let temp = temp_with_schema();
    let out = stdout_of(
        deploy_in(temp.path())
            .env("SUPABASE_SERVICE_ROLE_KEY", "eyJhbGciOiJIUzI1NiJ9.hidden-part")
            .args(["-o", "json"]),
    );
    let guide: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(guide["service_role_key"], "eyJhbGci…");
    assert!(!out.contains("hidden-part"));
}

#[test]
fn json_has_no_color_even_when_forced() {
    let temp = temp_with_schema();
    deploy_in(temp.path())
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .args(["-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
