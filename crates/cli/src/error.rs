// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors `deploy-analytics` can report.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema file does not exist at the expected path.
    #[error("{path} not found")]
    SchemaNotFound { path: String },

    #[error("cannot read {path}: {source}")]
    SchemaUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Missing-input errors are printed on stdout; everything else on stderr.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::SchemaNotFound { .. })
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// A specialized Result type for deploy-analytics operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
