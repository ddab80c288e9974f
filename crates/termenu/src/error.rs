use std::{io, result::Result as StdResult};

use thiserror::Error;

use crate::geom;

/// Result type for termenu operations.
pub type Result<T> = StdResult<T, Error>;

/// Toolkit error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// The caller handed us something that can't be displayed: a label with
    /// no usable hotkey, a window that does not fit, a malformed menu tree.
    #[error("configuration: {0}")]
    Configuration(String),
    /// Surfaces were closed out of order, or a handle is stale.
    #[error("surface: {0}")]
    Surface(String),
    /// An argument was out of its valid range.
    #[error("invalid: {0}")]
    Invalid(String),
    /// The terminal backend failed.
    #[error("terminal: {0}")]
    Terminal(String),
    /// Geometry failure.
    #[error("geometry: {0}")]
    Geometry(String),
    /// A scripted terminal ran out of input.
    #[error("script exhausted")]
    ScriptExhausted,
}

impl From<geom::Error> for Error {
    fn from(e: geom::Error) -> Self {
        Self::Geometry(e.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Terminal(e.to_string())
    }
}
