//! Error types for plategrowth
//!
//! Engine failures are deterministic computations, not IO: no retries,
//! every error surfaces immediately to the caller.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Plategrowth error types
#[derive(Error, Debug)]
pub enum Error {
    /// Pipeline step attempted out of order (e.g. baseline resolution
    /// before the artifact cutoff is known)
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// Sequence lengths disagree (well readings vs time axis, log series
    /// vs timestamps). The engine never silently truncates.
    #[error("input shape mismatch in {context}: expected {expected}, got {actual}")]
    InputShape {
        /// Which pair of sequences disagreed
        context: String,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Well label lookup or join miss
    #[error("unknown well label: {0}")]
    UnknownWell(String),

    /// A single well's analysis failed; the plate run attaches the label so
    /// callers can choose to skip the well or abort the run
    #[error("well {label}: {source}")]
    Well {
        /// Label of the failing well
        label: String,
        /// Underlying failure
        source: Box<Error>,
    },

    /// Malformed collaborator input (non-numeric reading, bad row layout)
    #[error("parse error: {0}")]
    Parse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Wrap an error with the label of the well it occurred in.
    #[must_use]
    pub fn for_well(label: impl Into<String>, source: Self) -> Self {
        Self::Well {
            label: label.into(),
            source: Box::new(source),
        }
    }
}
