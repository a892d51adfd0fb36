//! Error types for document decoding

use tea_core::Kind;
use thiserror::Error;

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors that can occur while decoding a descriptor document
///
/// All of them are deterministic for a given input; retrying cannot help.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The stream is not a well-formed document
    #[error("failed to parse document: {0}")]
    Parse(String),

    /// The document's `kind` differs from the requested one
    #[error("got kind {} instead of {expected}", found_or_none(.found))]
    KindMismatch {
        /// The `kind` literal in the document, if any
        found: Option<String>,
        /// The kind the caller asked for
        expected: String,
    },

    /// The document does not fit the entity shape for its kind
    #[error("failed to parse {kind}: {message}")]
    Structure {
        /// Shape the document was decoded against
        kind: Kind,
        /// Description of the first mismatch found
        message: String,
    },
}

fn found_or_none(found: &Option<String>) -> &str {
    match found.as_deref() {
        Some(kind) if !kind.is_empty() => kind,
        _ => "<none>",
    }
}

/// Failure category of a [`DecodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Parse,
    KindMismatch,
    Structure,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Parse => "stream-parse",
            ErrorCategory::KindMismatch => "kind-mismatch",
            ErrorCategory::Structure => "structural-decode",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DecodeError {
    /// Create a kind mismatch error
    pub fn kind_mismatch(found: Option<String>, expected: impl Into<String>) -> Self {
        Self::KindMismatch {
            found,
            expected: expected.into(),
        }
    }

    /// Create a structural decode error for the given shape
    pub fn structure(kind: Kind, message: impl std::fmt::Display) -> Self {
        Self::Structure {
            kind,
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(_) => ErrorCategory::Parse,
            Self::KindMismatch { .. } => ErrorCategory::KindMismatch,
            Self::Structure { .. } => ErrorCategory::Structure,
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, Self::KindMismatch { .. })
    }

    pub fn is_structure(&self) -> bool {
        matches!(self, Self::Structure { .. })
    }
}
