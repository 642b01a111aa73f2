//! Traceability labels and scan logging.

mod record;
mod scan;

pub use record::*;
pub use scan::*;

use thiserror::Error;

/// Traceability errors.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Malformed label payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Label checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

pub type TraceResult<T> = Result<T, TraceError>;
