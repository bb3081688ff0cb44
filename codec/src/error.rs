//! Error types for code operations.

use std::fmt;

/// Result type for code operations.
pub type CodeResult<T> = Result<T, CodeError>;

/// Errors that can occur constructing or transforming a code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeError {
    /// The string does not satisfy the code grammar.
    InvalidCode {
        /// The rejected candidate string.
        code: String,
    },

    /// The requested digit count cannot be encoded.
    ///
    /// Counts below 4 are rejected, as are odd counts below 10: pair digits
    /// are always produced two at a time.
    InvalidLength { length: usize },

    /// The operation needs a full code (separator at position 8).
    NotFull { code: String },

    /// The operation cannot run on a padded code.
    Padded { code: String },

    /// The reference point is too far from the code center to shorten.
    ReferenceTooFar {
        /// Largest per-axis distance to the reference, in degrees.
        range_degrees: f64,
    },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode { code } => write!(f, "invalid code {code:?}"),
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "invalid digit count {length}: need at least 4, and even below 10"
                )
            }
            Self::NotFull { code } => write!(f, "code {code:?} is not a full code"),
            Self::Padded { code } => write!(f, "code {code:?} is padded"),
            Self::ReferenceTooFar { range_degrees } => {
                write!(
                    f,
                    "reference point is {range_degrees} degrees from the code center, too far to shorten"
                )
            }
        }
    }
}

impl std::error::Error for CodeError {}
