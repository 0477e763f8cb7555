//! Error types for OBJ decoding.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// How many fields a statement accepts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
    Between(usize, usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::AtLeast(n) => write!(f, "at least {n}"),
            Arity::Exactly(n) => write!(f, "exactly {n}"),
            Arity::Between(lo, hi) => write!(f, "{lo} to {hi}"),
        }
    }
}

/// Numeric type a token was expected to hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NumberKind {
    Float,
    Integer,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Float => f.write_str("floating-point number"),
            NumberKind::Integer => f.write_str("non-negative integer"),
        }
    }
}

/// Failure decoding the fields of a single statement.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DecodeError {
    /// Wrong number of fields for a statement.
    #[error("'{statement}' expects {expected} fields ('{usage}'), got {actual}")]
    Arity {
        statement: &'static str,
        expected: Arity,
        usage: &'static str,
        actual: usize,
    },

    /// A token that should be numeric is not.
    #[error("invalid {expected}: '{token}'")]
    NumericFormat { token: String, expected: NumberKind },

    /// Curve/surface type name outside the known family.
    #[error("unknown curve/surface type '{0}'")]
    UnknownType(String),

    /// Rationality marker other than `rat` / `non-rat`.
    #[error("unknown rationality marker '{0}', expected 'rat' or 'non-rat'")]
    UnknownRationality(String),

    /// Basis matrix direction other than `u` / `v`.
    #[error("unknown basis matrix direction '{0}', expected 'u' or 'v'")]
    UnknownDirection(String),
}

impl DecodeError {
    pub fn arity(
        statement: &'static str,
        expected: Arity,
        usage: &'static str,
        actual: usize,
    ) -> Self {
        Self::Arity {
            statement,
            expected,
            usage,
            actual,
        }
    }

    pub fn numeric(token: impl Into<String>, expected: NumberKind) -> Self {
        Self::NumericFormat {
            token: token.into(),
            expected,
        }
    }
}

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failure of a whole parse. The first error aborts it.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Reading from the line source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file could not be opened.
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A statement could not be decoded.
    #[error("line {line}: {source} in '{text}'")]
    Decode {
        /// Line number (1-indexed).
        line: usize,
        /// The offending line as read, surrounding whitespace included.
        text: String,
        #[source]
        source: DecodeError,
    },
}

impl ObjError {
    pub fn open(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn decode(line: usize, text: impl Into<String>, source: DecodeError) -> Self {
        Self::Decode {
            line,
            text: text.into(),
            source,
        }
    }

    /// Line number of a decode failure, `None` for I/O and open errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ObjError::Io(_) | ObjError::Open { .. } => None,
            ObjError::Decode { line, .. } => Some(*line),
        }
    }

    /// The underlying decode failure, if any.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            ObjError::Io(_) | ObjError::Open { .. } => None,
            ObjError::Decode { source, .. } => Some(source),
        }
    }
}

pub type ObjResult<T> = Result<T, ObjError>;
