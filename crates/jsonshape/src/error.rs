use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;

use crate::{Kind, Path};

/// Failure to turn JSON text into a [`Value`](crate::Value).
///
/// Raised before any decoding starts, so it carries a text position rather
/// than a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    msg: String,
    /// One-based line of the offending character.
    pub line: usize,
    /// One-based column of the offending character.
    pub column: usize,
}

impl ParseError {
    /// The full message, position included.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            msg: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl core::error::Error for ParseError {}

/// Why a decode failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The value is not of the kind the target type accepts.
    #[error("expected {expected}, found {actual}")]
    TypeMismatch {
        /// Kind the target type accepts.
        expected: Kind,
        /// Kind of the value found.
        actual: Kind,
    },
    /// A required field is absent from the object.
    #[error("missing field `{0}`")]
    MissingField(String),
    /// The object has a member no field is declared for. Only raised with
    /// [`DecodeOptions::deny_unknown_fields`](crate::DecodeOptions::deny_unknown_fields).
    #[error("unknown field `{0}`")]
    UnknownField(String),
    /// The value nests deeper than
    /// [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
    #[error("nesting deeper than {limit} levels")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },
    /// Raised by a hand-written [`Decode`](crate::Decode) implementation.
    #[error("{0}")]
    Custom(String),
}

/// A decode failure and the path of the value it happened at.
///
/// For [`MissingField`](DecodeErrorKind::MissingField) and
/// [`UnknownField`](DecodeErrorKind::UnknownField) the path is that of the
/// enclosing object.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    pub(crate) path: Path,
    pub(crate) kind: DecodeErrorKind,
}

impl DecodeError {
    /// Creates an error located at `path`.
    #[must_use]
    pub fn new(path: Path, kind: DecodeErrorKind) -> Self {
        Self { path, kind }
    }

    /// Path of the value the decode failed at.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why the decode failed.
    #[must_use]
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Consumes the error, returning its kind.
    #[must_use]
    pub fn into_kind(self) -> DecodeErrorKind {
        self.kind
    }
}

/// Error from the full text-to-record pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text is not well-formed JSON.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// The text parsed but does not fit the target type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
