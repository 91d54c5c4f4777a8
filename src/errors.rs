// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error taxonomy for the engine.
//!
//! Every failure path of the library surfaces as an [`EngineError`]. Each
//! category maps to a distinct process exit code so callers of the binary
//! can tell configuration mistakes from malformed input or an internal
//! invariant violation.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The run configuration is unusable (bad knockout bound, lambda, ...).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool could not be constructed.
    #[error("worker pool error: {0}")]
    WorkerPool(String),

    /// An I/O failure while reading the cutset file or writing the report.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The cutset file is not a rectangular 0/1 matrix with non-empty rows.
    #[error("input format error: {0}")]
    InputFormat(String),

    /// An internal invariant of the counting algorithm was violated.
    #[error("algorithm invariant violated: {0}")]
    AlgorithmInvariant(String),
}

impl EngineError {
    /// Process exit code for this error category.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::InvalidConfig(_) => 1,
            EngineError::WorkerPool(_) => 2,
            EngineError::Io(_) => 4,
            EngineError::InputFormat(_) => 6,
            EngineError::AlgorithmInvariant(_) => 7,
        }
    }
}
