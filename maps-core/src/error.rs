use crate::operation::Operation;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Operation '{0}' is not supported")]
    UnsupportedOperation(Operation),
    #[error(transparent)]
    InvalidArgument(#[from] Invalidation),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid JSON response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unexpected response: missing or invalid '{0}'")]
    Structure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Invalidation {
    #[error("Operation must be specified (directions/geocode)")]
    Operation,
    #[error("Street address cannot be empty")]
    StreetAddress,
    #[error("Area cannot be empty")]
    Area,
    #[error("Division cannot be empty")]
    Division,
    #[error("Does not support {0} for this address: zero results")]
    ZeroResults(Operation),
}

/// Flat discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedOperation,
    InvalidArgument,
    Io,
    Parse,
    Structure,
}

impl Error {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Io(_) => ErrorKind::Io,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Structure(_) => ErrorKind::Structure,
        }
    }

    pub(crate) fn structure(path: impl Into<String>) -> Self {
        Self::Structure(path.into())
    }
}
