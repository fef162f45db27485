use std::fmt;

/// Errors reported by fallible constructors and parsers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Error {
    /// Argument violates precondition of the operation
    InvalidArgument { name: &'static str, reason: String },
    /// Failed to parse textual representation
    ParseError { reason: String, offset: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{}`: {}", name, reason)
            }
            Error::ParseError { reason, offset } => {
                write!(f, "parse error at {}: {}", offset, reason)
            }
        }
    }
}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        Self::new(std::io::ErrorKind::InvalidData, error)
    }
}

impl std::error::Error for Error {}
