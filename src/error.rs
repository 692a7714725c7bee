use std::fmt;

/// Result type for fallible tag parsing
pub type Result<T> = std::result::Result<T, DeepError>;

/// Error type for the crate.
///
/// Only the named tag parsers can fail. Resolving a tag into an activation is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepError {
    /// The string does not name a known `Mode`
    UnknownMode(String),

    /// The string does not name a known `ActivationType`
    UnknownActivationType(String),
}

impl fmt::Display for DeepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepError::UnknownMode(name) => write!(f, "Unknown mode '{}'", name),
            DeepError::UnknownActivationType(name) => {
                write!(f, "Unknown activation type '{}'", name)
            }
        }
    }
}

impl std::error::Error for DeepError {}

impl DeepError {
    /// Error for a string that names no `Mode`.
    pub fn unknown_mode<S: Into<String>>(name: S) -> Self {
        DeepError::UnknownMode(name.into())
    }

    /// Error for a string that names no `ActivationType`.
    pub fn unknown_activation_type<S: Into<String>>(name: S) -> Self {
        DeepError::UnknownActivationType(name.into())
    }
}
