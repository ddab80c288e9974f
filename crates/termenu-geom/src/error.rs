use std::fmt;

/// A geometry failure, such as a rectangle that cannot be placed where it was
/// asked to go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A shape did not fit the space it was given.
    Geometry(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geometry(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result alias for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;
