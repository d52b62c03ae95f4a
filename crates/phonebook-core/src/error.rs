// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the phonebook printer.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all phonebook operations.
///
/// Every variant is fatal; the binary's top-level handler turns it into a
/// diagnostic and a non-zero exit status.
#[derive(Debug, Error)]
pub enum PhonebookError {
    // -- Invocation --
    #[error("No file specified")]
    MissingInput,

    #[error("invalid option: {0}")]
    InvalidOption(String),

    // -- Input --
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse phonebook: {0}")]
    Parse(String),

    // -- Output --
    #[error("rendering failed: {0}")]
    Render(String),

    #[error("image processing failed: {0}")]
    Image(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::de::DeError> for PhonebookError {
    fn from(err: quick_xml::de::DeError) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PhonebookError>;
