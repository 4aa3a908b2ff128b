//! Unified error types for multisig-regen.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during a regeneration run.
#[derive(Error, Debug)]
pub enum RegenError {
    // --- Template sources ---

    /// A template source file could not be read. The run aborts before the
    /// target file is touched.
    #[error("failed to read {kind} template at {path}")]
    TemplateRead {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Target document ---

    /// The target source file could not be read.
    #[error("failed to read target file at {path}")]
    TargetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rewritten target could not be written back.
    #[error("failed to write target file at {path}")]
    TargetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, RegenError>`.
pub type Result<T> = std::result::Result<T, RegenError>;
