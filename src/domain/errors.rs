//! Domain vocabulary errors.

use std::fmt;

/// Errors that can occur when reading a fixed-vocabulary value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The label is not part of the vocabulary.
    UnknownLabel {
        vocabulary: &'static str,
        label: String,
    },

    /// The code is not part of the vocabulary.
    UnknownCode {
        vocabulary: &'static str,
        code: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLabel { vocabulary, label } => {
                write!(f, "Unknown {} label: {}", vocabulary, label)
            }
            Self::UnknownCode { vocabulary, code } => {
                write!(f, "Unknown {} code: {}", vocabulary, code)
            }
        }
    }
}

impl std::error::Error for DomainError {}
