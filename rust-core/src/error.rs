//! Error types for the DFT pipeline
//!
//! Only whole-sequence failures live here. Per-record problems in the input
//! are absorbed by the loader and never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DftError {
    #[error("Failed to read input '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse input '{}': {source}", .path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("No samples loaded from '{}'", .path.display())]
    EmptySequence { path: PathBuf },

    #[error("Failed to write output '{}': {source}", .path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize components: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write trace '{}': {source}", .path.display())]
    TraceWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, DftError>;
