// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only access to the SQL schema file.
//!
//! The file is an opaque blob: it is loaded to confirm it is present and
//! readable, and is never parsed, validated or sent anywhere.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default schema location, relative to the working directory.
pub const DEFAULT_SCHEMA_PATH: &str = "sql/analytics-schema.sql";

/// A schema file loaded into memory.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    display_path: String,
    bytes: Vec<u8>,
}

impl SchemaFile {
    /// Load the schema at `path`, resolved against `base` when relative.
    ///
    /// `path` is kept as given for display so output does not depend on
    /// where the command was run from.
    pub fn load(base: Option<&Path>, path: &str) -> Result<Self> {
        let resolved = resolve(base, path);
        tracing::debug!(path = %resolved.display(), "reading schema file");

        let mut file = match File::open(&resolved) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::SchemaNotFound {
                    path: path.to_string(),
                });
            }
            Err(source) => {
                return Err(Error::SchemaUnreadable {
                    path: path.to_string(),
                    source,
                });
            }
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| Error::SchemaUnreadable {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!(bytes = bytes.len(), "schema file loaded");
        Ok(Self {
            display_path: path.to_string(),
            bytes,
        })
    }

    /// The path as the user gave it.
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn resolve(base: Option<&Path>, path: &str) -> PathBuf {
    match base {
        Some(dir) => dir.join(path),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
