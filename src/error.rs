//! Errors that abort validation of a document before any checker runs.
//!
//! Checkers report everything they find as a `Finding`, never as an error;
//! `ParseError` is reserved for input that cannot be decoded at all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
