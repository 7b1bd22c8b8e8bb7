// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Schmutz.

use thiserror::Error;

/// Top-level error type for all Schmutz operations.
///
/// Every error is fatal to the run: there is no retry or partial-output
/// recovery anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum SchmutzError {
    // -- Pipeline errors --
    #[error("image processing failed: {0}")]
    Image(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    // -- I/O --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SchmutzError>;
