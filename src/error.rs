//! Error types shared by the record store, importer and configuration loader.

use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised by [`RecordStore`](crate::records::RecordStore) on insert.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("student name must not be empty")]
    EmptyIdentifier,

    #[error("invalid score for {identifier}")]
    NonFiniteScore { identifier: String },
}

/// Failures that abort an import as a whole.
///
/// Per-row problems are not errors; they are collected as [`MalformedRecord`]s.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("source not found: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read source: {0}")]
    Read(#[from] csv::Error),
}

/// A row that had two fields but could not be turned into a record.
///
/// `line` is the 1-based line of the row in the source, when known.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedRecord {
    #[error("invalid score for {identifier}")]
    InvalidScore {
        line: Option<u64>,
        identifier: String,
        raw_score: String,
    },

    #[error("missing student name")]
    EmptyIdentifier { line: Option<u64> },
}

impl MalformedRecord {
    pub fn line(&self) -> Option<u64> {
        match self {
            MalformedRecord::InvalidScore { line, .. } | MalformedRecord::EmptyIdentifier { line } => {
                *line
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
